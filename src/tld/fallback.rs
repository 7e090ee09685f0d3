//! Compiled-in fallback TLD list.
//!
//! A minimal subset of the IANA registry used when the live list cannot be
//! fetched. Uppercase, matching the wire format of
//! <https://data.iana.org/TLD/tlds-alpha-by-domain.txt>.

/// Fallback TLD labels.
pub(crate) const FALLBACK_TLDS: &[&str] = &[
    "AERO", "AI", "APP", "ARPA", "ASIA", "AT", "AU", "BE", "BIZ", "BR", "CA", "CC", "CH", "CL",
    "CN", "CO", "COM", "CZ", "DE", "DEV", "DK", "EDU", "ES", "EU", "FI", "FR", "GOV", "GR", "HK",
    "ID", "IE", "IN", "INFO", "INT", "IO", "IR", "IT", "JP", "KR", "ME", "MIL", "MOBI", "MX",
    "NAME", "NET", "NL", "NO", "NZ", "ONLINE", "ORG", "PL", "PRO", "PT", "RO", "RU", "SE", "SG",
    "SH", "SITE", "SK", "TECH", "TR", "TV", "TW", "UA", "UK", "US", "VN", "XYZ", "ZA",
];
