use std::ffi::OsString;

use crate::{store::HeaderStore, Error, HeaderConfig, Result};

/// Read-only view of the transport headers of one request.
///
/// `HeaderData` owns its [`HeaderStore`], which is built once at construction. Parsing,
/// personalization and vary composition are all pure reads over it, so an instance can be shared
/// across threads freely.
///
/// # Examples
/// ```
/// # use p13n_headers::HeaderData;
/// let data = HeaderData::new([("HTTP_USER_AGENT", "curl/8.0")]);
/// assert_eq!(data.get_header("User-Agent"), "curl/8.0");
/// assert_eq!(data.get_header("Referer"), "");
/// ```
#[derive(Debug, Clone)]
pub struct HeaderData {
    store: HeaderStore,
    config: HeaderConfig,
}

impl HeaderData {
    /// Create `HeaderData` over an explicit transport source using the default configuration.
    pub fn new<I, K, V>(source: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::with_config(HeaderConfig::new(), source)
    }

    /// Create `HeaderData` over the transport headers found in the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_config(HeaderConfig::new())
    }

    pub(crate) fn with_config<I, K, V>(config: HeaderConfig, source: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        HeaderData {
            store: HeaderStore::from_source(source, &config.prefix),
            config,
        }
    }

    pub(crate) fn from_env_with_config(config: HeaderConfig) -> Result<Self> {
        let source = transport_vars(std::env::vars_os(), &config.prefix)?;
        Ok(Self::with_config(config, source))
    }

    /// Get the raw value of a header by its canonical name, or an empty string if it is absent.
    ///
    /// No normalization happens here: `User-Agent` matches, `user-agent` does not.
    pub fn get_header(&self, name: &str) -> &str {
        self.store.get(name).unwrap_or("")
    }

    /// The normalized headers backing this instance.
    pub fn store(&self) -> &HeaderStore {
        &self.store
    }

    /// The configuration this instance was built with.
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }
}

/// Collect transport entries from an OS-level source. Keys without `prefix` are skipped before
/// the unicode check since the store would drop them anyway.
fn transport_vars(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
    prefix: &str,
) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for (key, value) in vars {
        if !key.to_string_lossy().starts_with(prefix) {
            continue;
        }
        let (key, value) = match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => (key, value),
            (Ok(key), Err(_)) => return Err(Error::NonUnicodeSource { key }),
            (Err(key), _) => {
                return Err(Error::NonUnicodeSource {
                    key: key.to_string_lossy().into_owned(),
                })
            }
        };
        out.push((key, value));
    }
    Ok(out)
}
