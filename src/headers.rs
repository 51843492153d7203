//! Canonical names of the headers the edge network sets.

/// Region or state code, e.g. `UT`.
pub const GEO_REGION: &str = "P13n-Geo-Region";
/// ISO country code, e.g. `US`.
pub const GEO_COUNTRY_CODE: &str = "P13n-Geo-Country-Code";
/// Country name.
pub const GEO_COUNTRY_NAME: &str = "P13n-Geo-Country-Name";
/// Continent code, e.g. `NA`.
pub const GEO_CONTINENT_CODE: &str = "P13n-Geo-Continent-Code";
/// City name.
pub const GEO_CITY: &str = "P13n-Geo-City";
/// Connection type, e.g. `wifi`.
pub const GEO_CONNECTION_TYPE: &str = "P13n-Geo-Conn-Type";
/// Connection speed, e.g. `broadband`.
pub const GEO_CONNECTION_SPEED: &str = "P13n-Geo-Conn-Speed";

/// Pipe-delimited interest tags.
pub const INTEREST: &str = "P13n-Interest";

/// Deprecated: mix of pair-less segments and `key:value` pairs.
pub const AUDIENCE: &str = "Audience";
/// Deprecated: `key:value` pairs.
pub const AUDIENCE_SET: &str = "Audience-Set";
/// Deprecated predecessor of [`INTEREST`].
pub const DEPRECATED_INTEREST: &str = "Interest";

/// Role of the visitor. Parsed but not otherwise interpreted.
pub const ROLE: &str = "Role";

/// Request `Vary` header, the starting point of [`crate::HeaderData::add_vary`].
pub const VARY: &str = "Vary";

/// Headers collected into a personalization object by default, in declared order.
pub const PERSONALIZATION_HEADERS: [&str; 12] = [
    GEO_REGION,
    GEO_COUNTRY_CODE,
    GEO_COUNTRY_NAME,
    GEO_CONTINENT_CODE,
    GEO_CITY,
    GEO_CONNECTION_TYPE,
    GEO_CONNECTION_SPEED,
    INTEREST,
    AUDIENCE,
    AUDIENCE_SET,
    DEPRECATED_INTEREST,
    ROLE,
];

pub(crate) fn is_audience(name: &str) -> bool {
    name == AUDIENCE || name == AUDIENCE_SET
}

pub(crate) fn is_interest(name: &str) -> bool {
    name == INTEREST || name == DEPRECATED_INTEREST
}
