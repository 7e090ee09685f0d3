//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the crate,
//! including network timeouts, TLS policy lists, and syntax limits.

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;
/// TLD registry fetch timeout in seconds
pub const TLD_FETCH_TIMEOUT_SECS: u64 = 10;

/// Maximum URL length (2048 characters) to prevent DoS via extremely
/// long URLs. Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// FQDN syntax limits (RFC 1035 / RFC 2181)
/// Maximum total FQDN length in characters
pub const MAX_FQDN_LENGTH: usize = 255;
/// Maximum length of a single FQDN label in characters
pub const MAX_LABEL_LENGTH: usize = 63;

/// Cipher suite name fragments that disqualify a connection outright.
pub const BLACKLIST_CIPHER_TERMS: [&str; 3] = ["ANON", "EXPORT", "NULL"];

/// Hash algorithm suffixes accepted in a negotiated cipher suite name.
/// Anything outside the SHA-2 family (SHA1, MD5) is rejected.
pub const WHITELIST_HASH_SUFFIXES: [&str; 3] = ["SHA256", "SHA384", "SHA512"];

/// Control characters rejected anywhere in a raw URL (CRLF injection).
pub const BLACKLIST_CONTROL_CHARACTERS: [char; 2] = ['\n', '\r'];

/// Live source for the TLD registry.
pub const TLD_LIVE_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

/// Default port used when an https URL carries no explicit port.
pub const DEFAULT_HTTPS_PORT: &str = "443";
/// Default port used when any other scheme carries no explicit port.
pub const DEFAULT_HTTP_PORT: &str = "80";
