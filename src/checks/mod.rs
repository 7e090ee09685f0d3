//! Validation predicates.
//!
//! The individual checks the evaluator chains together:
//! - `syntax` — pure string predicates over decomposed components
//! - `network` — DNS resolution and public-routability
//! - `tls` — TLS handshake, negotiated-parameter policy, certificate expiry

pub mod network;
pub mod syntax;
pub mod tls;
