use derive_more::From;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{headers::VARY, HeaderData};

/// Separator between entries of a `Vary` header value.
const VARY_SEPARATOR: &str = ", ";

/// Key of a [`VaryList`] entry: a position for plain header names, or a name for keyed entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub enum VaryKey {
    /// Position of a plain entry.
    Index(usize),
    /// Name of a keyed entry.
    Name(String),
}

impl From<&str> for VaryKey {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

/// Ordered, keyed content of a `Vary` header.
///
/// A list whose keys are exactly `0..len` serializes as a JSON array, anything else as a JSON
/// object with stringified keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaryList {
    entries: Vec<(VaryKey, String)>,
}

impl VaryList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a raw `Vary` header value into indexed entries. An empty value yields an empty list.
    pub fn from_header_value(value: &str) -> Self {
        if value.is_empty() {
            return Self::new();
        }
        Self {
            entries: value
                .split(VARY_SEPARATOR)
                .enumerate()
                .map(|(i, name)| (VaryKey::Index(i), name.to_owned()))
                .collect(),
        }
    }

    /// Append a value under the next free index.
    pub fn push(&mut self, value: impl Into<String>) {
        let next = self
            .entries
            .iter()
            .filter_map(|(key, _)| match key {
                VaryKey::Index(i) => Some(i + 1),
                VaryKey::Name(_) => None,
            })
            .max()
            .unwrap_or(0);
        self.entries.push((VaryKey::Index(next), value.into()));
    }

    /// Key-preserving union: entries whose key is already present are ignored, new keys are
    /// appended in order.
    pub fn union(&mut self, other: impl IntoIterator<Item = (VaryKey, String)>) {
        for (key, value) in other {
            if !self.contains_key(&key) {
                self.entries.push((key, value));
            }
        }
    }

    /// Whether an entry with `key` exists.
    pub fn contains_key(&self, key: &VaryKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Value stored under `key`.
    pub fn get(&self, key: impl Into<VaryKey>) -> Option<&str> {
        let key = key.into();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values in order, without their keys.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    /// `(key, value)` entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&VaryKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Whether keys are exactly `0..len`, in order.
    pub fn is_sequential(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (key, _))| *key == VaryKey::Index(i))
    }

    /// Render the values as a `Vary` response header value.
    ///
    /// ```
    /// # use p13n_headers::VaryList;
    /// let mut vary = VaryList::from_header_value("Accept-Encoding");
    /// vary.push("P13n-Interest");
    /// assert_eq!(vary.to_header_value(), "Accept-Encoding, P13n-Interest");
    /// ```
    pub fn to_header_value(&self) -> String {
        self.values().collect::<Vec<_>>().join(VARY_SEPARATOR)
    }
}

impl Serialize for VaryList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_sequential() {
            return serializer.collect_seq(self.values());
        }
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            match key {
                VaryKey::Index(i) => map.serialize_entry(&i.to_string(), value)?,
                VaryKey::Name(name) => map.serialize_entry(name, value)?,
            }
        }
        map.end()
    }
}

/// Variance keys to add to the `Vary` header.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum VaryKeys {
    /// A single header name, appended.
    Key(String),
    /// Keyed entries, merged with key-preserving union.
    Keyed(Vec<(VaryKey, String)>),
}

impl From<&str> for VaryKeys {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for VaryKeys
where
    K: Into<VaryKey>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self::Keyed(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// `{"vary": ...}` wrapper returned by [`HeaderData::add_vary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaryHeader {
    /// Composed `Vary` entries.
    pub vary: VaryList,
}

impl HeaderData {
    /// Add variance keys to the request's `Vary` header.
    ///
    /// ```
    /// # use p13n_headers::HeaderData;
    /// let data = HeaderData::new([("HTTP_VARY", "Accept-Encoding")]);
    /// let header = data.add_vary("P13n-Geo-Country-Code");
    /// assert_eq!(header.vary.to_header_value(), "Accept-Encoding, P13n-Geo-Country-Code");
    /// ```
    pub fn add_vary(&self, keys: impl Into<VaryKeys>) -> VaryHeader {
        let mut vary = VaryList::from_header_value(self.get_header(VARY));

        match keys.into() {
            VaryKeys::Key(key) => vary.push(key),
            VaryKeys::Keyed(entries) => vary.union(entries),
        }

        log::trace!(target: "p13n", vary:serde = vary; "composed vary header");

        VaryHeader { vary }
    }
}
