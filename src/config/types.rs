//! Configuration types and CLI options.
//!
//! This module defines the evaluation policy options, logging enums, and the
//! command-line configuration struct.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Policy options controlling how permissive URL evaluation is.
///
/// Every flag defaults to the safe (restrictive) value. Flags only ever widen
/// what is accepted; there is no option to disable a check entirely apart from
/// the documented skip conditions (e.g. TLS is skipped for plain-http URLs
/// when `allow_http` is set).
///
/// # Examples
///
/// ```
/// use url_sentry::EvalOptions;
///
/// let strict = EvalOptions::default();
/// assert!(!strict.allow_http);
///
/// let dev = EvalOptions {
///     allow_http: true,
///     allow_localhost: true,
///     ..Default::default()
/// };
/// # let _ = dev;
/// ```
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// Accept `http://` URLs in addition to `https://`
    pub allow_http: bool,
    /// Accept the bare hostname `localhost` (skips TLD, routability, and TLS checks)
    pub allow_localhost: bool,
    /// Accept hosts resolving to RFC 1918 / unique-local addresses
    pub allow_private_ip: bool,
    /// Accept hosts resolving to loopback addresses
    pub allow_loopback_ip: bool,
    /// Accept TLS 1.2 in addition to TLS 1.3
    pub allow_weaker_tls: bool,
    /// Log the specific rejection reason when a URL fails evaluation
    pub enable_log: bool,
}

/// Command-line configuration.
#[derive(Debug, Parser)]
#[command(
    name = "url_sentry",
    about = "Evaluate URLs for safety (syntax, DNS routability, TLS policy) or sanitize them."
)]
pub struct Config {
    /// URLs to process; omit to read from --file
    pub urls: Vec<String>,

    /// File with one URL per line ("-" for stdin; blank lines and # comments skipped)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Sanitize URLs instead of evaluating them
    #[arg(long)]
    pub sanitize: bool,

    /// Fetch the live IANA TLD list instead of using the built-in fallback
    #[arg(long)]
    pub refresh_tlds: bool,

    /// Accept http:// URLs in addition to https://
    #[arg(long)]
    pub allow_http: bool,

    /// Accept the bare hostname "localhost"
    #[arg(long)]
    pub allow_localhost: bool,

    /// Accept hosts resolving to private-range addresses
    #[arg(long)]
    pub allow_private_ip: bool,

    /// Accept hosts resolving to loopback addresses
    #[arg(long)]
    pub allow_loopback_ip: bool,

    /// Accept TLS 1.2 in addition to TLS 1.3
    #[arg(long)]
    pub allow_weaker_tls: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// Extracts the evaluation policy from the CLI flags.
    ///
    /// Rejection-reason logging is always enabled for the CLI; the binary is a
    /// diagnostic tool and the log level already gates the output.
    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            allow_http: self.allow_http,
            allow_localhost: self.allow_localhost,
            allow_private_ip: self.allow_private_ip,
            allow_loopback_ip: self.allow_loopback_ip,
            allow_weaker_tls: self.allow_weaker_tls,
            enable_log: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_eval_options_safe_defaults() {
        let options = EvalOptions::default();
        assert!(!options.allow_http);
        assert!(!options.allow_localhost);
        assert!(!options.allow_private_ip);
        assert!(!options.allow_loopback_ip);
        assert!(!options.allow_weaker_tls);
        assert!(!options.enable_log);
    }

    #[test]
    fn test_config_flags_map_to_options() {
        let config = Config::parse_from([
            "url_sentry",
            "https://example.com",
            "--allow-http",
            "--allow-weaker-tls",
        ]);
        let options = config.eval_options();
        assert!(options.allow_http);
        assert!(options.allow_weaker_tls);
        assert!(!options.allow_localhost);
        assert!(options.enable_log);
    }
}
