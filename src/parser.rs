use std::collections::HashMap;

use derive_more::From;
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::{headers, HeaderData};

/// Delimiter between list items and between audience segments.
const LIST_DELIMITER: char = '|';
/// Delimiter between key and value within an audience segment.
const PAIR_DELIMITER: char = ':';

/// A header value interpreted according to the grammar of its header.
///
/// Serializes untagged: a string, an array or an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, From)]
#[serde(untagged)]
pub enum ParsedValue {
    /// A single decoded value.
    Scalar(String),
    /// Pipe-delimited items, trimmed. Empty items and duplicates are kept.
    List(Vec<String>),
    /// `key:value` pairs. A deprecated `Audience` map also carries pair-less segments as a
    /// [`ParsedValue::List`] keyed by the header name itself.
    Map(HashMap<String, ParsedValue>),
}

impl From<&str> for ParsedValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl ParsedValue {
    /// Empty scalar, list or map.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::List(l) => l.is_empty(),
            Self::Map(m) => m.is_empty(),
        }
    }

    /// Returns `true` if the value is a [`ParsedValue::Scalar`].
    pub fn is_scalar(&self) -> bool {
        self.as_str().is_some()
    }
    /// Returns the scalar value, or `None` for lists and maps.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if the value is a [`ParsedValue::List`].
    pub fn is_list(&self) -> bool {
        self.as_list().is_some()
    }
    /// Returns the list items, or `None` for scalars and maps.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns `true` if the value is a [`ParsedValue::Map`].
    pub fn is_map(&self) -> bool {
        self.as_map().is_some()
    }
    /// Returns the map entries, or `None` for scalars and lists.
    pub fn as_map(&self) -> Option<&HashMap<String, ParsedValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Look up a key in a map value. Returns `None` for scalars and lists.
    pub fn get(&self, key: &str) -> Option<&ParsedValue> {
        self.as_map().and_then(|m| m.get(key))
    }
}

impl HeaderData {
    /// Parse a header by canonical name.
    ///
    /// ```
    /// # use p13n_headers::{HeaderData, ParsedValue};
    /// let data = HeaderData::new([("HTTP_P13N_INTEREST", "Rust|Edge%20Computing")]);
    /// assert_eq!(
    ///     data.parse_header("P13n-Interest"),
    ///     ParsedValue::List(vec!["Rust".into(), "Edge Computing".into()]),
    /// );
    /// ```
    pub fn parse_header(&self, name: &str) -> ParsedValue {
        let value = parse_value(name, self.get_header(name));
        log::trace!(target: "p13n", name, value:serde = value; "parsed header");
        value
    }
}

/// Interpret a raw header value using the grammar selected by `name`.
///
/// - `Audience` and `Audience-Set` are split into `key:value` pairs.
/// - `Interest`, `P13n-Interest` and any value containing `|` are split into a trimmed list.
/// - Everything else is a percent-decoded scalar.
///
/// An empty raw value yields an empty list for the interest headers and an empty scalar for any
/// other header.
pub fn parse_value(name: &str, raw: &str) -> ParsedValue {
    if raw.is_empty() {
        return if headers::is_interest(name) {
            ParsedValue::List(Vec::new())
        } else {
            ParsedValue::Scalar(String::new())
        };
    }

    let decoded = percent_decode_str(raw).decode_utf8_lossy();

    if headers::is_audience(name) {
        return parse_audience(name, &decoded);
    }

    if headers::is_interest(name) || decoded.contains(LIST_DELIMITER) {
        return ParsedValue::List(
            decoded
                .split(LIST_DELIMITER)
                .map(|item| item.trim().to_owned())
                .collect(),
        );
    }

    ParsedValue::Scalar(decoded.into_owned())
}

fn parse_audience(name: &str, decoded: &str) -> ParsedValue {
    let mut map = HashMap::new();

    for segment in decoded.split(LIST_DELIMITER).filter(|s| !s.is_empty()) {
        match segment.split_once(PAIR_DELIMITER) {
            Some((key, value)) => {
                map.insert(key.to_owned(), ParsedValue::Scalar(value.to_owned()));
            }
            None => match map
                .entry(name.to_owned())
                .or_insert_with(|| ParsedValue::List(Vec::new()))
            {
                ParsedValue::List(list) => list.push(segment.to_owned()),
                other => *other = ParsedValue::List(vec![segment.to_owned()]),
            },
        }
    }

    ParsedValue::Map(map)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::HeaderData;

    use super::{parse_value, ParsedValue};

    fn list(items: &[&str]) -> ParsedValue {
        ParsedValue::List(items.iter().map(|&s| s.to_owned()).collect())
    }

    #[test]
    fn missing_header() {
        let data = HeaderData::new([("HTTP_ROLE", "Administrator")]);

        assert_eq!(data.parse_header("header key not found"), "".into());
        assert_eq!(data.parse_header("Audience"), "".into());
        assert_eq!(data.parse_header("Interest"), list(&[]));
        assert_eq!(data.parse_header("P13n-Interest"), list(&[]));
        assert!(data.parse_header("Interest").is_empty());
    }

    #[test]
    fn interest() {
        let value = parse_value(
            "Interest",
            "Carl Sagan|Richard Feynman||For Science!|With%20A Percent20",
        );
        assert_eq!(
            value,
            list(&[
                "Carl Sagan",
                "Richard Feynman",
                "",
                "For Science!",
                "With A Percent20"
            ])
        );
    }

    #[test]
    fn interest_trims_items_but_keeps_duplicates() {
        let value = parse_value("P13n-Interest", " Jane Goodall | Jane Goodall|Edith Clark%20");
        assert_eq!(value, list(&["Jane Goodall", "Jane Goodall", "Edith Clark"]));
    }

    #[test]
    fn interest_without_delimiter_is_still_a_list() {
        assert_eq!(parse_value("Interest", "Marie Curie"), list(&["Marie Curie"]));
    }

    #[test]
    fn audience_set() {
        let value = parse_value("Audience-Set", "country:US|city:Salt Lake City|region:UT");
        assert_eq!(
            value,
            ParsedValue::Map(HashMap::from([
                ("country".to_owned(), "US".into()),
                ("city".to_owned(), "Salt Lake City".into()),
                ("region".to_owned(), "UT".into()),
            ]))
        );
    }

    #[test]
    fn audience_collects_pairless_segments() {
        let value = parse_value(
            "Audience",
            "Parents|Children||Age:47|Name:RobLoach|Name:AnnaMykhailova",
        );

        assert_eq!(value.get("Audience"), Some(&list(&["Parents", "Children"])));
        assert_eq!(value.get("Age"), Some(&"47".into()));
        assert_eq!(value.get("Name"), Some(&"AnnaMykhailova".into()));
        assert_eq!(value.as_map().map(HashMap::len), Some(3));
    }

    #[test]
    fn audience_splits_on_first_colon_only() {
        let value = parse_value("Audience", "geo:us|url:https://example.com");
        assert_eq!(value.get("geo"), Some(&"us".into()));
        assert_eq!(value.get("url"), Some(&"https://example.com".into()));
    }

    #[test]
    fn audience_with_only_delimiters_is_empty() {
        let value = parse_value("Audience-Set", "|||");
        assert!(value.is_map());
        assert!(value.is_empty());
    }

    #[test]
    fn audience_pair_named_like_header_is_overwritten_by_segments() {
        let value = parse_value("Audience", "Audience:x|Parents");
        assert_eq!(value.get("Audience"), Some(&list(&["Parents"])));

        let value = parse_value("Audience", "Parents|Audience:x");
        assert_eq!(value.get("Audience"), Some(&"x".into()));
    }

    #[test]
    fn audience_is_decoded_before_splitting() {
        let value = parse_value("Audience-Set", "city%3ASalt%20Lake%20City%7Cregion%3AUT");
        assert_eq!(value.get("city"), Some(&"Salt Lake City".into()));
        assert_eq!(value.get("region"), Some(&"UT".into()));
    }

    #[test]
    fn scalar_is_decoded() {
        assert_eq!(
            parse_value("User-Agent", "Should just return the value"),
            "Should just return the value".into()
        );
        assert_eq!(parse_value("X-Name", "Rob%20Loach"), "Rob Loach".into());
        assert_eq!(parse_value("X-Math", "1+1:2"), "1+1:2".into());
    }

    #[test]
    fn plus_is_not_a_space() {
        assert_eq!(parse_value("X-Query", "a+b"), "a+b".into());
        assert_eq!(
            parse_value("Interest", "Rock+Roll|Jazz%2BBlues"),
            list(&["Rock+Roll", "Jazz+Blues"])
        );
        assert_eq!(
            parse_value("Audience-Set", "genre:rock+roll").get("genre"),
            Some(&"rock+roll".into())
        );
    }

    #[test]
    fn decodes_exactly_once() {
        assert_eq!(parse_value("X-Encoded", "100%2525"), "100%25".into());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(parse_value("X-Bytes", "a%FFb"), "a\u{FFFD}b".into());
    }

    // Known edge case: any header whose value carries a literal `|` is read as a list.
    #[test]
    fn scalar_with_delimiter_becomes_list() {
        assert_eq!(
            parse_value("User-Agent", "Mozilla | compatible"),
            list(&["Mozilla", "compatible"])
        );
        assert_eq!(parse_value("X-Encoded-Pipe", "a%7Cb"), list(&["a", "b"]));
    }

    #[test]
    fn leading_delimiter_still_splits() {
        assert_eq!(parse_value("X-Tags", "|first"), list(&["", "first"]));
        assert_eq!(parse_value("X-Tags", "|"), list(&["", ""]));
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(
            serde_json::to_value(list(&["a", "b"])).unwrap(),
            serde_json::json!(["a", "b"])
        );
        assert_eq!(
            serde_json::to_value(parse_value("Audience", "Parents|Age:47")).unwrap(),
            serde_json::json!({"Audience": ["Parents"], "Age": "47"})
        );
        assert_eq!(
            serde_json::to_value(ParsedValue::from("US")).unwrap(),
            serde_json::json!("US")
        );
    }
}
