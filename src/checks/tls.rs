//! TLS configuration and certificate inspection.
//!
//! Connects to the host, performs a verifying TLS handshake, and checks the
//! negotiated parameters against security policy:
//! - cipher suite name free of blacklisted terms
//! - SHA-2 family hash in the cipher suite
//! - protocol version in the allowed set
//! - peer certificate not expired
//!
//! Uses `tokio-rustls` for the handshake and `x509-parser` for certificate
//! parsing. Transport failures (timeout, refusal, handshake rejection) are
//! converted to typed validation errors, never propagated as panics; an
//! unreachable host is an expected, recoverable-by-rejection outcome.

use std::sync::Arc;
use std::time::Duration;

use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::{
    EvalOptions, BLACKLIST_CIPHER_TERMS, TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS,
    WHITELIST_HASH_SUFFIXES,
};
use crate::decompose::UrlComponents;
use crate::error_handling::{ErrorKind, ValidationError};

/// Negotiated TLS parameters, produced by the handshake and consumed
/// immediately by the policy checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherAssessment {
    /// Negotiated cipher suite name (e.g. `TLS13_AES_256_GCM_SHA384`)
    pub cipher_name: String,
    /// Negotiated protocol version (e.g. `TLSv1.3`)
    pub protocol_version: String,
}

/// Facts extracted from the peer certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateFacts {
    /// Certificate expiry as a UNIX timestamp
    pub not_after: i64,
}

/// Inspects the TLS configuration of the URL's host against security policy.
///
/// Skipped entirely for plain-http URLs when `allow_http` is set, and for
/// `localhost` when `allow_localhost` is set.
///
/// # Errors
///
/// `ConnectionError` for transport-level failures (connect/handshake failure
/// or timeout), and the specific policy kinds for negotiated-parameter and
/// certificate violations.
pub async fn has_valid_tls(
    components: &UrlComponents,
    options: &EvalOptions,
) -> Result<(), ValidationError> {
    if components.scheme == "http" && options.allow_http {
        return Ok(());
    }
    if options.allow_localhost && components.fqdn.eq_ignore_ascii_case("localhost") {
        return Ok(());
    }

    let fqdn = components.fqdn.clone();
    let port: u16 = components.port.parse().map_err(|_| {
        ValidationError::new(
            ErrorKind::ConnectionError,
            format!("invalid port {:?}", components.port),
        )
    })?;

    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    // Handshake floor is TLS 1.2; the negotiated version is policy-checked
    // below so a 1.2-only host surfaces as a protocol rejection instead of
    // an opaque handshake failure.
    let config = ClientConfig::builder_with_protocol_versions(&[
        &rustls::version::TLS13,
        &rustls::version::TLS12,
    ])
    .with_root_certificates(root_store)
    .with_no_client_auth();

    let server_name = ServerName::try_from(fqdn.clone()).map_err(|e| {
        ValidationError::new(
            ErrorKind::ConnectionError,
            format!("invalid server name {fqdn:?}: {e}"),
        )
    })?;

    let sock = match tokio::time::timeout(
        Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        TcpStream::connect((fqdn.as_str(), port)),
    )
    .await
    {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => {
            return Err(ValidationError::new(
                ErrorKind::ConnectionError,
                format!("failed to connect to {fqdn}:{port}: {e}"),
            ));
        }
        Err(_) => {
            return Err(ValidationError::new(
                ErrorKind::ConnectionError,
                format!("TCP connection timeout for {fqdn}:{port} ({TCP_CONNECT_TIMEOUT_SECS}s)"),
            ));
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    let tls_stream = match tokio::time::timeout(
        Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        connector.connect(server_name, sock),
    )
    .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            return Err(ValidationError::new(
                ErrorKind::ConnectionError,
                format!("TLS handshake failed for {fqdn}: {e}"),
            ));
        }
        Err(_) => {
            return Err(ValidationError::new(
                ErrorKind::ConnectionError,
                format!("TLS handshake timeout for {fqdn} ({TLS_HANDSHAKE_TIMEOUT_SECS}s)"),
            ));
        }
    };

    let conn = tls_stream.get_ref().1;

    let assessment = CipherAssessment {
        cipher_name: conn
            .negotiated_cipher_suite()
            .map(|cs| format!("{:?}", cs.suite()))
            .unwrap_or_default(),
        protocol_version: conn
            .protocol_version()
            .map(protocol_version_name)
            .unwrap_or_default(),
    };
    has_no_blacklisted_cipher(&assessment)?;
    has_strong_hash(&assessment)?;
    has_allowed_protocol(&assessment, options.allow_weaker_tls)?;

    let facts = extract_certificate_facts(conn)?;
    has_unexpired_certificate(&facts, chrono::Utc::now().timestamp())?;

    log::debug!(
        "TLS inspection passed for {fqdn}: {} / {}",
        assessment.cipher_name,
        assessment.protocol_version
    );
    Ok(())
}

/// Maps a rustls protocol version to its conventional display name.
fn protocol_version_name(version: rustls::ProtocolVersion) -> String {
    match version {
        rustls::ProtocolVersion::TLSv1_3 => "TLSv1.3".to_string(),
        rustls::ProtocolVersion::TLSv1_2 => "TLSv1.2".to_string(),
        other => format!("{other:?}"),
    }
}

/// Rejects cipher suites whose name contains a blacklisted term.
pub(crate) fn has_no_blacklisted_cipher(
    assessment: &CipherAssessment,
) -> Result<(), ValidationError> {
    if assessment.cipher_name.is_empty() {
        return Err(ValidationError::new(
            ErrorKind::WeakCipherError,
            "no cipher suite negotiated",
        ));
    }
    let upper = assessment.cipher_name.to_ascii_uppercase();
    for term in BLACKLIST_CIPHER_TERMS {
        if upper.contains(term) {
            return Err(ValidationError::new(
                ErrorKind::WeakCipherError,
                format!("cipher suite {} contains {term}", assessment.cipher_name),
            ));
        }
    }
    Ok(())
}

/// Rejects cipher suites whose hash component is outside the SHA-2 family.
pub(crate) fn has_strong_hash(assessment: &CipherAssessment) -> Result<(), ValidationError> {
    let upper = assessment.cipher_name.to_ascii_uppercase();
    if WHITELIST_HASH_SUFFIXES
        .iter()
        .any(|suffix| upper.ends_with(suffix))
    {
        Ok(())
    } else {
        Err(ValidationError::new(
            ErrorKind::WeakHashError,
            format!(
                "cipher suite {} does not use a strong hashing algorithm",
                assessment.cipher_name
            ),
        ))
    }
}

/// Rejects protocol versions outside the allowed set.
///
/// TLS 1.3 is always accepted; TLS 1.2 only when `allow_weaker_tls` is set.
pub(crate) fn has_allowed_protocol(
    assessment: &CipherAssessment,
    allow_weaker_tls: bool,
) -> Result<(), ValidationError> {
    let version = assessment.protocol_version.as_str();
    if version == "TLSv1.3" || (allow_weaker_tls && version == "TLSv1.2") {
        Ok(())
    } else {
        Err(ValidationError::new(
            ErrorKind::WeakProtocolError,
            format!("negotiated protocol {version:?} is not allowed"),
        ))
    }
}

/// Extracts expiry facts from the connection's peer certificate.
fn extract_certificate_facts(
    conn: &rustls::ClientConnection,
) -> Result<CertificateFacts, ValidationError> {
    let certs = conn.peer_certificates().ok_or_else(|| {
        ValidationError::new(ErrorKind::CertificateInvalidError, "no peer certificate")
    })?;
    let cert_der = certs.first().ok_or_else(|| {
        ValidationError::new(ErrorKind::CertificateInvalidError, "empty certificate chain")
    })?;
    let (_, cert) = x509_parser::parse_x509_certificate(cert_der.as_ref()).map_err(|e| {
        ValidationError::new(
            ErrorKind::CertificateInvalidError,
            format!("cannot parse peer certificate: {e}"),
        )
    })?;
    Ok(CertificateFacts {
        not_after: cert.validity().not_after.timestamp(),
    })
}

/// Rejects certificates whose expiry is not in the future.
pub(crate) fn has_unexpired_certificate(
    facts: &CertificateFacts,
    now: i64,
) -> Result<(), ValidationError> {
    if facts.not_after > now {
        Ok(())
    } else {
        Err(ValidationError::new(
            ErrorKind::CertificateExpiredError,
            "peer certificate has expired",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(cipher: &str, protocol: &str) -> CipherAssessment {
        CipherAssessment {
            cipher_name: cipher.to_string(),
            protocol_version: protocol.to_string(),
        }
    }

    #[test]
    fn test_strong_tls13_suite_passes_policy() {
        let a = assessment("TLS13_AES_256_GCM_SHA384", "TLSv1.3");
        assert!(has_no_blacklisted_cipher(&a).is_ok());
        assert!(has_strong_hash(&a).is_ok());
        assert!(has_allowed_protocol(&a, false).is_ok());
    }

    #[test]
    fn test_missing_cipher_rejected() {
        let a = assessment("", "TLSv1.3");
        assert_eq!(
            has_no_blacklisted_cipher(&a).unwrap_err().kind,
            ErrorKind::WeakCipherError
        );
    }

    #[test]
    fn test_blacklisted_cipher_terms_rejected() {
        for cipher in [
            "TLS_NULL_SHA256",
            "TLS_RSA_EXPORT_WITH_RC4_40_MD5",
            "TLS_DH_anon_WITH_AES_128_CBC_SHA256",
        ] {
            let a = assessment(cipher, "TLSv1.3");
            assert_eq!(
                has_no_blacklisted_cipher(&a).unwrap_err().kind,
                ErrorKind::WeakCipherError,
                "{cipher} should be blacklisted"
            );
        }
    }

    #[test]
    fn test_weak_hash_rejected() {
        let a = assessment("TLS_AES_256_GCM_SHA1", "TLSv1.3");
        assert_eq!(has_strong_hash(&a).unwrap_err().kind, ErrorKind::WeakHashError);
        // All SHA-2 family suffixes pass.
        for cipher in [
            "TLS13_AES_128_GCM_SHA256",
            "TLS13_AES_256_GCM_SHA384",
            "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA512",
        ] {
            assert!(has_strong_hash(&assessment(cipher, "TLSv1.3")).is_ok());
        }
    }

    #[test]
    fn test_protocol_whitelist() {
        let tls12 = assessment("TLS_AES_128_GCM_SHA256", "TLSv1.2");
        assert_eq!(
            has_allowed_protocol(&tls12, false).unwrap_err().kind,
            ErrorKind::WeakProtocolError
        );
        assert!(has_allowed_protocol(&tls12, true).is_ok());

        let tls10 = assessment("TLS_AES_128_GCM_SHA256", "TLSv1.0");
        assert!(has_allowed_protocol(&tls10, true).is_err());
    }

    #[test]
    fn test_certificate_expiry() {
        let now = 1_700_000_000;
        let valid = CertificateFacts {
            not_after: now + 86_400,
        };
        assert!(has_unexpired_certificate(&valid, now).is_ok());

        let expired = CertificateFacts {
            not_after: now - 86_400,
        };
        assert_eq!(
            has_unexpired_certificate(&expired, now).unwrap_err().kind,
            ErrorKind::CertificateExpiredError
        );

        // Expiring exactly now fails closed.
        let boundary = CertificateFacts { not_after: now };
        assert!(has_unexpired_certificate(&boundary, now).is_err());
    }

    #[tokio::test]
    async fn test_tls_skipped_for_allowed_http() {
        let components = crate::decompose::decompose("http://example.com/").unwrap();
        let options = EvalOptions {
            allow_http: true,
            ..Default::default()
        };
        assert!(has_valid_tls(&components, &options).await.is_ok());
    }

    #[tokio::test]
    async fn test_tls_skipped_for_allowed_localhost() {
        let components = crate::decompose::decompose("https://localhost/").unwrap();
        let options = EvalOptions {
            allow_localhost: true,
            ..Default::default()
        };
        assert!(has_valid_tls(&components, &options).await.is_ok());
    }

    #[tokio::test]
    async fn test_tls_connection_refused_is_nonfatal() {
        crate::initialization::init_crypto_provider();
        // RFC 5737 TEST-NET address: connect fails fast or times out; either
        // way the result is a typed rejection, not a panic.
        let components = crate::decompose::decompose("https://192.0.2.1/").unwrap();
        let err = has_valid_tls(&components, &EvalOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ConnectionError);
    }
}
