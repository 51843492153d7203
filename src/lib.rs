//! Parse the personalization headers an edge network injects into requests.
//!
//! # Overview
//!
//! The crate revolves around [`HeaderData`], built once from a flat, CGI-style transport source
//! (`HTTP_P13N_GEO_CITY => "Salt Lake City"`). Keys are normalized into canonical header names
//! (`P13n-Geo-City`) and values are interpreted per header:
//!
//! - [`HeaderData::get_header`] returns the raw value.
//! - [`HeaderData::parse_header`] returns a [`ParsedValue`]: a scalar, a pipe-delimited list, or a
//!   `key:value` map for the deprecated `Audience` headers.
//! - [`HeaderData::personalization_object`] collects all non-empty personalization headers.
//! - [`HeaderData::add_vary`] composes the `Vary` header a response must declare.
//!
//! ```
//! # use p13n_headers::HeaderData;
//! let data = HeaderData::new([
//!     ("HTTP_P13N_GEO_COUNTRY_CODE", "US"),
//!     ("HTTP_P13N_INTEREST", "Rust|Edge"),
//!     ("HTTP_VARY", "Accept-Encoding"),
//! ]);
//!
//! let p_obj = data.personalization_object();
//! assert_eq!(p_obj["P13n-Geo-Country-Code"].as_str(), Some("US"));
//!
//! let vary = data.add_vary("P13n-Interest");
//! assert_eq!(vary.vary.to_header_value(), "Accept-Encoding, P13n-Interest");
//! ```
//!
//! One-shot helpers ([`get_header`], [`parse_header`], [`personalization_object`],
//! [`add_vary`]) construct a fresh instance on every call. There is no global state.
//!
//! # Error Handling
//!
//! Malformed or missing headers are never errors; they fall back to empty values. [`Error`] is
//! only returned when the process environment holds a transport header that is not valid unicode.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate with target `p13n`.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod config;
mod convenience;
mod error;
mod header_data;
pub mod headers;
mod parser;
mod personalization;
mod store;
mod vary;

pub use config::HeaderConfig;
pub use convenience::{add_vary, get_header, parse_header, personalization_object, RawSource};
pub use error::{Error, Result};
pub use header_data::HeaderData;
pub use parser::{parse_value, ParsedValue};
pub use personalization::PersonalizationObject;
pub use store::{canonical_name, transport_key, HeaderStore};
pub use vary::{VaryHeader, VaryKey, VaryKeys, VaryList};
