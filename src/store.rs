use std::collections::HashMap;

/// `HeaderStore` maps canonical header names (`User-Agent`) to their raw values.
///
/// It is built once from a transport source and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderStore {
    headers: HashMap<String, String>,
}

impl HeaderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a flat transport source, keeping only keys that start with `prefix`.
    ///
    /// When two keys normalize to the same canonical name, the one seen last wins.
    ///
    /// ```
    /// # use p13n_headers::HeaderStore;
    /// let store = HeaderStore::from_source([("HTTP_USER_AGENT", "curl"), ("PATH", "/bin")], "HTTP_");
    /// assert_eq!(store.get("User-Agent"), Some("curl"));
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn from_source<I, K, V>(source: I, prefix: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut headers = HashMap::new();
        for (key, value) in source {
            let key = key.as_ref();
            let Some(stripped) = key.strip_prefix(prefix) else {
                log::trace!(target: "p13n", key; "ignoring non-transport key");
                continue;
            };
            headers.insert(canonical_name(stripped), value.as_ref().to_owned());
        }

        log::debug!(target: "p13n", headers = headers.len(); "collected transport headers");

        Self { headers }
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Number of collected headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether no transport header was collected.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterate over `(canonical name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Convert a transport key with its prefix already stripped into a canonical header name.
///
/// The key is lowercased, every run of `_` and every space becomes a `-`, and the first letter of
/// each word is uppercased. Case mapping is ASCII-only; other characters pass through unchanged.
/// Tabs and line breaks also start a new word but are kept as is.
///
/// ```
/// # use p13n_headers::canonical_name;
/// assert_eq!(canonical_name("USER_AGENT"), "User-Agent");
/// assert_eq!(canonical_name("P13N__GEO_CITY"), "P13n-Geo-City");
/// ```
pub fn canonical_name(stripped_key: &str) -> String {
    let mut name = String::with_capacity(stripped_key.len());
    let mut word_start = true;
    let mut in_run = false;
    for c in stripped_key.chars() {
        match c {
            '_' => {
                if !in_run {
                    name.push('-');
                }
                in_run = true;
                word_start = true;
            }
            ' ' => {
                name.push('-');
                in_run = false;
                word_start = true;
            }
            _ => {
                name.push(if word_start {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                });
                in_run = false;
                word_start = matches!(c, '\t' | '\r' | '\n' | '\x0b' | '\x0c');
            }
        }
    }
    name
}

/// Build the transport key a canonical header name arrives under, e.g. `HTTP_USER_AGENT`.
pub fn transport_key(canonical: &str, prefix: &str) -> String {
    format!("{}{}", prefix, canonical.to_ascii_uppercase().replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{canonical_name, transport_key, HeaderStore};

    #[test]
    fn drops_keys_without_prefix() {
        let store = HeaderStore::from_source(
            [
                ("HTTP_SHOULD_BE_FOUND", "Should be found"),
                ("SERVER_NAME", "Entries without http_ should be ignored"),
                ("http_lowercase", "prefix is case-sensitive"),
                ("IGNORED_ENTRY", "HTTP_LOOKALIKE"),
            ],
            "HTTP_",
        );

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Should-Be-Found"), Some("Should be found"));
        assert_eq!(store.get("Server-Name"), None);
        assert_eq!(store.get("Lowercase"), None);
    }

    #[test]
    fn empty_source_yields_empty_store() {
        let store = HeaderStore::from_source(HashMap::<String, String>::new(), "HTTP_");
        assert!(store.is_empty());
        assert_eq!(store, HeaderStore::new());
    }

    #[test]
    fn normalizes_names() {
        assert_eq!(canonical_name("USER_AGENT"), "User-Agent");
        assert_eq!(canonical_name("P13N_GEO_COUNTRY_CODE"), "P13n-Geo-Country-Code");
        assert_eq!(canonical_name("P13N_Interest"), "P13n-Interest");
        assert_eq!(canonical_name("AUDIENCE__SET"), "Audience-Set");
        assert_eq!(canonical_name("ROLE"), "Role");
        assert_eq!(canonical_name("_LEADING"), "-Leading");
        assert_eq!(canonical_name(""), "");
        assert_eq!(canonical_name("A _B"), "A--B");
    }

    #[test]
    fn case_mapping_is_ascii_only() {
        assert_eq!(canonical_name("ÉCOLE_ß"), "École-ß");
        assert_eq!(canonical_name("élan_VITAL"), "élan-Vital");
        assert_eq!(transport_key("École-ß", "HTTP_"), "HTTP_ÉCOLE_ß");
    }

    #[test]
    fn whitespace_starts_a_word() {
        assert_eq!(canonical_name("A\tB"), "A\tB");
        assert_eq!(canonical_name("X_LINE\nBREAK"), "X-Line\nBreak");
    }

    #[test]
    fn canonical_names_round_trip_through_transport_keys() {
        for name in ["User-Agent", "P13n-Geo-Conn-Speed", "Audience-Set", "Vary"] {
            let key = transport_key(name, "HTTP_");
            let stripped = key.strip_prefix("HTTP_").unwrap();
            assert_eq!(canonical_name(stripped), name);
        }
        assert_eq!(transport_key("User-Agent", "HTTP_"), "HTTP_USER_AGENT");
    }

    #[test]
    fn later_duplicate_wins() {
        let store = HeaderStore::from_source(
            vec![("HTTP_ROLE", "Editor"), ("HTTP_Role", "Administrator")],
            "HTTP_",
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Role"), Some("Administrator"));
    }

    #[test]
    fn lookup_is_exact() {
        let store = HeaderStore::from_source([("HTTP_USER_AGENT", "curl")], "HTTP_");
        assert_eq!(store.get("User-Agent"), Some("curl"));
        assert_eq!(store.get("user-agent"), None);
        assert_eq!(store.get("USER_AGENT"), None);
    }

    #[test]
    fn custom_prefix() {
        let store = HeaderStore::from_source(
            [("X_EDGE_ROLE", "Administrator"), ("HTTP_ROLE", "Editor")],
            "X_EDGE_",
        );
        assert_eq!(store.iter().collect::<Vec<_>>(), vec![("Role", "Administrator")]);
    }
}
