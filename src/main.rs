//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_sentry` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading URLs from arguments, a file, or stdin
//! - User-facing output and exit code
//!
//! All validation and sanitization logic lives in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use tokio::io::{AsyncBufReadExt, BufReader};

use url_sentry::config::MAX_URL_LENGTH;
use url_sentry::initialization::{init_crypto_provider, init_logger_with, init_resolver, init_tld_client};
use url_sentry::{sanitize_url, Config, Evaluator, TldRegistry, ValidationStats};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    init_crypto_provider();

    let urls = collect_urls(&config).await?;
    if urls.is_empty() {
        eprintln!("url_sentry: no URLs given (pass URLs as arguments or via --file)");
        process::exit(2);
    }

    if config.sanitize {
        for url in &urls {
            println!("{}", sanitize_url(url));
        }
        return Ok(());
    }

    let tlds = if config.refresh_tlds {
        let client = init_tld_client().context("Failed to initialize HTTP client")?;
        TldRegistry::fetch(&client).await
    } else {
        TldRegistry::fallback()
    };

    let evaluator = Evaluator::new(config.eval_options(), tlds, init_resolver());
    let stats = ValidationStats::new();
    let mut rejected = 0usize;

    for url in &urls {
        match evaluator.evaluate_detailed(url).await {
            Ok(()) => println!("{url}\tvalid"),
            Err(e) => {
                rejected += 1;
                stats.record(e.kind);
                log::warn!("rejected {url:?}: {e}");
                println!("{url}\tinvalid");
            }
        }
    }

    stats.print_summary();
    if rejected > 0 {
        process::exit(1);
    }
    Ok(())
}

/// Gathers input URLs from positional arguments and/or `--file`.
///
/// File input follows the usual list conventions: one URL per line, blank
/// lines and `#` comments skipped, `-` meaning stdin. Overlong lines are
/// skipped with a warning rather than evaluated.
async fn collect_urls(config: &Config) -> Result<Vec<String>> {
    let mut urls = config.urls.clone();

    if let Some(path) = &config.file {
        let mut lines = if path.as_os_str() == "-" {
            BufReader::new(Box::new(tokio::io::stdin()) as Box<dyn tokio::io::AsyncRead + Unpin>)
                .lines()
        } else {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            BufReader::new(Box::new(file) as Box<dyn tokio::io::AsyncRead + Unpin>).lines()
        };

        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.len() > MAX_URL_LENGTH {
                log::warn!(
                    "Skipping URL exceeding maximum length ({} > {}): {}...",
                    trimmed.len(),
                    MAX_URL_LENGTH,
                    &trimmed[..50.min(trimmed.len())]
                );
                continue;
            }
            urls.push(trimmed.to_string());
        }
    }

    Ok(urls)
}
