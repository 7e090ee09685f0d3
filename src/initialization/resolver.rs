//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_TIMEOUT_SECS;

/// Initializes the DNS resolver used by the routability check.
///
/// Aggressive timeout and reduced attempts keep a slow or unresponsive DNS
/// server from stalling an evaluation; `ndots = 0` prevents search-domain
/// appending so the FQDN is resolved exactly as given.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = 2;
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}
