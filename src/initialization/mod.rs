//! Process initialization and resource setup.
//!
//! Constructors for the shared resources an evaluation needs:
//! - logger (plain or JSON format)
//! - DNS resolver with bounded timeouts
//! - rustls crypto provider
//! - HTTP client for the TLD registry refresh

mod logger;
mod resolver;

use std::time::Duration;

use rustls::crypto::{ring::default_provider, CryptoProvider};

use crate::config::TLD_FETCH_TIMEOUT_SECS;

pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the crypto provider for TLS operations.
///
/// Must be called before any TLS connections are established. Reinstalling
/// is harmless, so the result is ignored.
pub fn init_crypto_provider() {
    let _ = CryptoProvider::install_default(default_provider());
}

/// Initializes the HTTP client used to refresh the TLD registry.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_tld_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(TLD_FETCH_TIMEOUT_SECS))
        .build()
}
