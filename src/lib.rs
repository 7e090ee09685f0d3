//! url_sentry library: defensive URL validation and sanitization
//!
//! Given an arbitrary user-supplied URL string, this library decides whether
//! it is safe to fetch — syntactically well-formed, free of injection
//! vectors, resolving only to publicly routable addresses, and served over a
//! strong TLS configuration — and independently produces a canonicalized,
//! percent-encoded form of the URL for downstream use.
//!
//! # Example
//!
//! ```no_run
//! use url_sentry::{evaluate_url, sanitize_url, EvalOptions};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let verdict = evaluate_url("https://example.com/search?q=a", EvalOptions::default()).await;
//! println!("safe to fetch: {verdict}");
//!
//! let clean = sanitize_url("https://example.com/a b?q='x'");
//! assert_eq!(clean, "https://example.com/a%20b?q=%27x%27");
//! # }
//! ```
//!
//! Evaluation needs a Tokio runtime (DNS resolution and the TLS handshake
//! are async, each bounded by an explicit timeout); sanitization is a pure
//! synchronous transformation.

#![warn(missing_docs)]

mod checks;
pub mod config;
mod decompose;
mod error_handling;
mod evaluate;
pub mod initialization;
mod sanitize;
mod tld;

// Re-export public API
pub use config::{Config, EvalOptions, LogFormat, LogLevel};
pub use decompose::{decompose, UrlComponents};
pub use error_handling::{ErrorKind, ValidationError, ValidationStats};
pub use evaluate::{evaluate_url, Evaluator};
pub use sanitize::sanitize_url;
pub use tld::TldRegistry;
