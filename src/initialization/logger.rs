//! Logger initialization.
//!
//! Configures `env_logger` with custom formatting. Supports a plain text
//! format (with colors) and a JSON format for structured logging.

use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

use crate::config::LogFormat;

/// Initializes the logger with the specified level and format.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter overrides it. This allows `RUST_LOG=debug`
/// for quick debugging while still supporting explicit control via
/// `--log-level`.
///
/// # Errors
///
/// Returns the underlying `SetLoggerError` if a logger was already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // Suppress hickory UDP client stream warnings about malformed DNS
    // messages; they are expected on truncated responses and handled
    // gracefully by the resolver.
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("url_sentry", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };
                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() instead of init() so tests can call this repeatedly.
    builder.try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_does_not_panic() {
        // Only the first initialization in the process succeeds; later calls
        // error, and both outcomes are acceptable here.
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let _ = init_logger_with(LevelFilter::Debug, LogFormat::Json);
    }
}
