use thiserror::Error;

/// Result type used by the fallible parts of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors are reserved for misuse of the input boundary. Irregular header contents are never an
/// error: they fall back to an empty or scalar value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A transport header read from the process environment is not valid Unicode.
    #[error("transport header {key:?} is not valid unicode")]
    NonUnicodeSource {
        /// Lossy rendering of the offending key.
        key: String,
    },
}
