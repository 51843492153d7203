use crate::{headers::PERSONALIZATION_HEADERS, HeaderData, Result};

/// Configuration for [`HeaderData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    pub(crate) prefix: String,
    pub(crate) personalization_headers: Vec<String>,
}

impl HeaderConfig {
    /// Prefix marking a source key as a transport header (CGI convention).
    pub const DEFAULT_PREFIX: &'static str = "HTTP_";

    /// Create the default configuration.
    ///
    /// ```
    /// # use p13n_headers::HeaderConfig;
    /// HeaderConfig::new();
    /// ```
    pub fn new() -> Self {
        HeaderConfig {
            prefix: HeaderConfig::DEFAULT_PREFIX.to_owned(),
            personalization_headers: PERSONALIZATION_HEADERS
                .iter()
                .map(|&name| name.to_owned())
                .collect(),
        }
    }

    /// Override the transport key prefix. The match is case-sensitive.
    pub fn prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    /// Replace the canonical header names collected by
    /// [`HeaderData::personalization_object`].
    ///
    /// ```
    /// # use p13n_headers::HeaderConfig;
    /// let data = HeaderConfig::new()
    ///     .personalization_headers(["Role", "X-Team"])
    ///     .to_header_data([("HTTP_X_TEAM", "core"), ("HTTP_P13N_GEO_CITY", "Lyon")]);
    /// assert_eq!(data.personalization_object().len(), 1);
    /// ```
    pub fn personalization_headers<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.personalization_headers = names.into_iter().map(Into::into).collect();
        self
    }

    /// Create a [`HeaderData`] over an explicit transport source.
    pub fn to_header_data<I, K, V>(&self, source: I) -> HeaderData
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        HeaderData::with_config(self.clone(), source)
    }

    /// Create a [`HeaderData`] over the transport headers in the process environment.
    pub fn to_header_data_from_env(&self) -> Result<HeaderData> {
        HeaderData::from_env_with_config(self.clone())
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self::new()
    }
}
