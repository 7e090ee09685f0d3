//! Syntax and label validators.
//!
//! Pure predicates over decomposed URL components. Each predicate checks one
//! property and fails with its own [`ErrorKind`]; none of them performs I/O.

use crate::config::{
    BLACKLIST_CONTROL_CHARACTERS, MAX_FQDN_LENGTH, MAX_LABEL_LENGTH,
};
use crate::error_handling::{ErrorKind, ValidationError};
use crate::tld::TldRegistry;

/// Checks that the raw URL starts with an allowed scheme prefix.
///
/// Only `https://` is accepted by default; `http://` is additionally accepted
/// when `allow_http` is set. The check runs on the raw string, so a bare host
/// that only gained a scheme through decomposition's default prefix still
/// fails here.
pub fn has_allowed_scheme(raw_url: &str, allow_http: bool) -> Result<(), ValidationError> {
    let lowered = raw_url.to_ascii_lowercase();
    if lowered.starts_with("https://") || (allow_http && lowered.starts_with("http://")) {
        Ok(())
    } else {
        Err(ValidationError::new(
            ErrorKind::SchemeError,
            "invalid protocol scheme prefix",
        ))
    }
}

/// Checks that the URL carries no userinfo.
///
/// Embedded credentials are rejected unconditionally; they are both an
/// injection and a credential-leak vector, so there is no override option.
pub fn has_no_basic_auth(userinfo: &str) -> Result<(), ValidationError> {
    if userinfo.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(
            ErrorKind::AuthError,
            "basic auth is not supported",
        ))
    }
}

/// Checks that the raw URL contains no CR or LF anywhere.
///
/// Defends against log and header injection through CRLF sequences.
pub fn has_no_control_character(raw_url: &str) -> Result<(), ValidationError> {
    if raw_url.contains(&BLACKLIST_CONTROL_CHARACTERS[..]) {
        Err(ValidationError::new(
            ErrorKind::ControlCharError,
            "unsupported control characters found",
        ))
    } else {
        Ok(())
    }
}

/// Checks FQDN charset, dot count, and total length.
///
/// The FQDN must consist solely of `[a-zA-Z0-9.-]`, contain at least one dot
/// (waived for `localhost` when allowed), and be at most 255 characters.
pub fn has_valid_fqdn_syntax(fqdn: &str, allow_localhost: bool) -> Result<(), ValidationError> {
    let is_localhost = allow_localhost && fqdn.eq_ignore_ascii_case("localhost");
    let charset_ok = !fqdn.is_empty()
        && fqdn
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if charset_ok && (is_localhost || fqdn.contains('.')) && fqdn.len() <= MAX_FQDN_LENGTH {
        Ok(())
    } else {
        Err(ValidationError::new(
            ErrorKind::FqdnSyntaxError,
            "require rfc3986-compliant FQDN of at most 255 chars",
        ))
    }
}

/// Checks every FQDN label for edge characters and length.
///
/// Each label must start and end with an alphanumeric character and be at
/// most 63 characters. An empty label (consecutive dots, leading or trailing
/// dot) fails closed.
pub fn has_valid_fqdn_label(fqdn: &str) -> Result<(), ValidationError> {
    for label in fqdn.split('.') {
        let edges_ok = label
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
            && label
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric());
        if !edges_ok || label.len() > MAX_LABEL_LENGTH {
            return Err(ValidationError::new(
                ErrorKind::FqdnLabelError,
                "require labels that start/end alphanumeric and are at most 63 chars",
            ));
        }
    }
    Ok(())
}

/// Checks authority charset and port range.
///
/// The authority must consist solely of `[a-zA-Z0-9.:-]` and the effective
/// port must parse as a non-zero 16-bit integer. Runs after the basic-auth
/// check, so a well-behaved caller never reaches it with an `@` present; one
/// anyway fails the charset closed.
pub fn has_valid_authority_syntax(authority: &str, port: &str) -> Result<(), ValidationError> {
    let charset_ok = !authority.is_empty()
        && authority
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == ':');
    let port_ok = matches!(port.parse::<u16>(), Ok(p) if p != 0);
    if charset_ok && port_ok {
        Ok(())
    } else {
        Err(ValidationError::new(
            ErrorKind::AuthoritySyntaxError,
            "require rfc3986-compliant authority and a port in 1..=65535",
        ))
    }
}

/// Checks that the final FQDN label is a registered TLD.
///
/// Skipped for `localhost` when allowed (a bare hostname has no TLD).
pub fn has_valid_tld(
    fqdn: &str,
    allow_localhost: bool,
    registry: &TldRegistry,
) -> Result<(), ValidationError> {
    if allow_localhost && fqdn.eq_ignore_ascii_case("localhost") {
        return Ok(());
    }
    let last_label = fqdn.rsplit('.').next().unwrap_or(fqdn);
    if registry.contains(last_label) {
        Ok(())
    } else {
        Err(ValidationError::new(
            ErrorKind::TldError,
            "invalid top-level domain",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TldRegistry {
        TldRegistry::from_labels(["com", "org", "net"])
    }

    #[test]
    fn test_has_allowed_scheme_https() {
        assert!(has_allowed_scheme("https://example.com/p?k=v#s", false).is_ok());
        assert!(has_allowed_scheme("HTTPS://example.com", false).is_ok());
    }

    #[test]
    fn test_has_allowed_scheme_http_requires_option() {
        let err = has_allowed_scheme("http://example.com", false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::SchemeError);
        assert!(has_allowed_scheme("http://example.com", true).is_ok());
    }

    #[test]
    fn test_has_allowed_scheme_bare_host_fails_even_with_http_allowed() {
        let err = has_allowed_scheme("example.com", true).unwrap_err();
        assert_eq!(err.kind, ErrorKind::SchemeError);
    }

    #[test]
    fn test_has_no_basic_auth() {
        assert!(has_no_basic_auth("").is_ok());
        let err = has_no_basic_auth("user:pass").unwrap_err();
        assert_eq!(err.kind, ErrorKind::AuthError);
    }

    #[test]
    fn test_has_no_control_character() {
        assert!(has_no_control_character("https://example.com/p?k=v#s").is_ok());
        let err = has_no_control_character("https://example.com/pa\nth?k=va\rl").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ControlCharError);
    }

    #[test]
    fn test_has_valid_fqdn_syntax() {
        assert!(has_valid_fqdn_syntax("example.com", false).is_ok());
        assert!(has_valid_fqdn_syntax("sub-1.example.com", false).is_ok());
    }

    #[test]
    fn test_has_valid_fqdn_syntax_requires_dot() {
        let err = has_valid_fqdn_syntax("examplecom", false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::FqdnSyntaxError);
    }

    #[test]
    fn test_has_valid_fqdn_syntax_rejects_bad_charset() {
        assert!(has_valid_fqdn_syntax("exa_mple.com", false).is_err());
        assert!(has_valid_fqdn_syntax("examp:le.com", false).is_err());
        assert!(has_valid_fqdn_syntax("", false).is_err());
    }

    #[test]
    fn test_has_valid_fqdn_syntax_rejects_overlong() {
        let fqdn = format!("{}.example.com", "1234567890.".repeat(25));
        assert!(fqdn.len() > 255);
        let err = has_valid_fqdn_syntax(&fqdn, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::FqdnSyntaxError);
    }

    #[test]
    fn test_has_valid_fqdn_syntax_localhost() {
        assert!(has_valid_fqdn_syntax("localhost", true).is_ok());
        assert!(has_valid_fqdn_syntax("localhost", false).is_err());
    }

    #[test]
    fn test_has_valid_fqdn_label() {
        assert!(has_valid_fqdn_label("example.com").is_ok());
        assert!(has_valid_fqdn_label(&format!("{}.example.com", "a".repeat(63))).is_ok());
    }

    #[test]
    fn test_has_valid_fqdn_label_rejects_hyphen_edges() {
        assert_eq!(
            has_valid_fqdn_label("-host.example.com").unwrap_err().kind,
            ErrorKind::FqdnLabelError
        );
        assert_eq!(
            has_valid_fqdn_label("host-.example.com").unwrap_err().kind,
            ErrorKind::FqdnLabelError
        );
    }

    #[test]
    fn test_has_valid_fqdn_label_rejects_overlong_label() {
        let fqdn = format!("{}.example.com", "a".repeat(64));
        assert!(has_valid_fqdn_label(&fqdn).is_err());
    }

    #[test]
    fn test_has_valid_fqdn_label_empty_label_fails_closed() {
        // Consecutive dots must not panic on the empty label between them.
        assert!(has_valid_fqdn_label("example..com").is_err());
        assert!(has_valid_fqdn_label(".example.com").is_err());
        assert!(has_valid_fqdn_label("example.com.").is_err());
    }

    #[test]
    fn test_has_valid_authority_syntax() {
        assert!(has_valid_authority_syntax("example.com", "443").is_ok());
        assert!(has_valid_authority_syntax("example.com:8042", "8042").is_ok());
    }

    #[test]
    fn test_has_valid_authority_syntax_rejects_bad_port() {
        assert_eq!(
            has_valid_authority_syntax("example.com", "0").unwrap_err().kind,
            ErrorKind::AuthoritySyntaxError
        );
        assert!(has_valid_authority_syntax("example.com", "65536").is_err());
        assert!(has_valid_authority_syntax("example.com", "port").is_err());
    }

    #[test]
    fn test_has_valid_authority_syntax_rejects_userinfo_charset() {
        assert!(has_valid_authority_syntax("user:pass@example.com", "443").is_err());
    }

    #[test]
    fn test_has_valid_tld() {
        assert!(has_valid_tld("host.example.com", false, &registry()).is_ok());
        assert_eq!(
            has_valid_tld("host.example.x0m", false, &registry())
                .unwrap_err()
                .kind,
            ErrorKind::TldError
        );
    }

    #[test]
    fn test_has_valid_tld_localhost_skip() {
        assert!(has_valid_tld("localhost", true, &registry()).is_ok());
        assert!(has_valid_tld("localhost", false, &registry()).is_err());
    }
}
