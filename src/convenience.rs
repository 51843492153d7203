//! One-shot helpers that build a fresh [`HeaderData`] per call.
//!
//! Passing `None` as the source reads the transport headers from the process environment.

use std::collections::HashMap;

use crate::{HeaderData, ParsedValue, PersonalizationObject, Result, VaryHeader, VaryKeys};

/// Flat transport source, e.g. `HTTP_USER_AGENT => "curl/8.0"`.
pub type RawSource = HashMap<String, String>;

fn header_data(source: Option<&RawSource>) -> Result<HeaderData> {
    match source {
        Some(source) => Ok(HeaderData::new(source)),
        None => HeaderData::from_env(),
    }
}

/// See [`HeaderData::get_header`].
///
/// ```
/// # use p13n_headers::{get_header, RawSource};
/// let source = RawSource::from([("HTTP_SHOULD_BE_FOUND".into(), "Should be found".into())]);
/// assert_eq!(get_header("Should-Be-Found", Some(&source)).unwrap(), "Should be found");
/// ```
pub fn get_header(name: &str, source: Option<&RawSource>) -> Result<String> {
    Ok(header_data(source)?.get_header(name).to_owned())
}

/// See [`HeaderData::parse_header`].
pub fn parse_header(name: &str, source: Option<&RawSource>) -> Result<ParsedValue> {
    Ok(header_data(source)?.parse_header(name))
}

/// See [`HeaderData::personalization_object`].
pub fn personalization_object(source: Option<&RawSource>) -> Result<PersonalizationObject> {
    Ok(header_data(source)?.personalization_object())
}

/// See [`HeaderData::add_vary`].
pub fn add_vary(keys: impl Into<VaryKeys>, source: Option<&RawSource>) -> Result<VaryHeader> {
    Ok(header_data(source)?.add_vary(keys))
}
