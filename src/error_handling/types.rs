//! Error type definitions.
//!
//! Every validation check signals failure with a [`ValidationError`] carrying
//! a specific [`ErrorKind`]. The evaluator is the only place these are
//! converted into a boolean verdict.

use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// The category of a URL validation failure.
///
/// Each check in the evaluation chain owns exactly one kind, so a failure's
/// kind identifies which check rejected the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// The string could not be parsed as a URL at all
    MalformedUrl,
    /// Scheme is not in the allowed set
    SchemeError,
    /// URL embeds basic-auth credentials
    AuthError,
    /// URL contains a CR or LF character
    ControlCharError,
    /// FQDN violates charset, dot, or length rules
    FqdnSyntaxError,
    /// An FQDN label violates edge-character or length rules
    FqdnLabelError,
    /// Authority violates charset rules or the port is out of range
    AuthoritySyntaxError,
    /// The final FQDN label is not a registered TLD
    TldError,
    /// DNS resolution failed or returned no addresses
    ResolutionError,
    /// A resolved address is not publicly routable
    RoutabilityError,
    /// TCP connect or TLS handshake failed or timed out
    ConnectionError,
    /// Negotiated cipher suite contains a blacklisted term
    WeakCipherError,
    /// Negotiated cipher suite does not use a SHA-2 family hash
    WeakHashError,
    /// Negotiated protocol version is not in the allowed set
    WeakProtocolError,
    /// Peer certificate has expired
    CertificateExpiredError,
    /// Peer certificate is missing or unparseable
    CertificateInvalidError,
}

impl ErrorKind {
    /// Returns a short identifier for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedUrl => "malformed URL",
            ErrorKind::SchemeError => "scheme error",
            ErrorKind::AuthError => "basic-auth error",
            ErrorKind::ControlCharError => "control character error",
            ErrorKind::FqdnSyntaxError => "FQDN syntax error",
            ErrorKind::FqdnLabelError => "FQDN label error",
            ErrorKind::AuthoritySyntaxError => "authority syntax error",
            ErrorKind::TldError => "TLD error",
            ErrorKind::ResolutionError => "DNS resolution error",
            ErrorKind::RoutabilityError => "routability error",
            ErrorKind::ConnectionError => "connection error",
            ErrorKind::WeakCipherError => "weak cipher",
            ErrorKind::WeakHashError => "weak hash algorithm",
            ErrorKind::WeakProtocolError => "weak protocol version",
            ErrorKind::CertificateExpiredError => "expired certificate",
            ErrorKind::CertificateInvalidError => "invalid certificate",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed URL validation failure.
///
/// Carries the failing check's [`ErrorKind`] and a human-readable reason.
/// Checks return this through `Result`; nothing below the evaluator converts
/// it to a boolean or swallows it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    /// Which check rejected the URL
    pub kind: ErrorKind,
    /// Human-readable reason for the rejection
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            kind,
            message: message.into(),
        }
    }
}
