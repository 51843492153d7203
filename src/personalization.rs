use std::collections::HashMap;

use crate::{HeaderData, ParsedValue};

/// Parsed personalization headers keyed by canonical name. Only non-empty values are present.
pub type PersonalizationObject = HashMap<String, ParsedValue>;

impl HeaderData {
    /// Parse every configured personalization header and collect the non-empty results.
    ///
    /// Headers missing from the request never appear in the result, not even as empty values.
    /// The object is rebuilt on every call.
    ///
    /// ```
    /// # use p13n_headers::HeaderData;
    /// let data = HeaderData::new([("HTTP_ROLE", "Administrator")]);
    /// let p_obj = data.personalization_object();
    /// assert_eq!(p_obj.len(), 1);
    /// assert_eq!(p_obj["Role"].as_str(), Some("Administrator"));
    /// ```
    pub fn personalization_object(&self) -> PersonalizationObject {
        let p_obj: PersonalizationObject = self
            .config()
            .personalization_headers
            .iter()
            .filter_map(|name| {
                let value = self.parse_header(name);
                (!value.is_empty()).then(|| (name.clone(), value))
            })
            .collect();

        log::debug!(target: "p13n", headers = p_obj.len(); "built personalization object");

        p_obj
    }
}
