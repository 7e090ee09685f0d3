//! TLD registry.
//!
//! Owns the set of valid top-level domains the TLD membership check consults.
//! The set is refreshed from the live IANA list at startup or on demand and
//! falls back to a compiled-in subset when the live source is unreachable.
//! The registry is passed into the evaluator explicitly; there is no global
//! state, so tests can inject a deterministic set.

mod fallback;

use std::collections::HashSet;

use crate::config::TLD_LIVE_URL;

/// A set of valid top-level domain labels.
///
/// Labels are stored uppercase (the IANA wire format); membership checks
/// upper-case their input, so lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct TldRegistry {
    tlds: HashSet<String>,
}

impl TldRegistry {
    /// Builds a registry from arbitrary labels, upper-casing each.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TldRegistry {
            tlds: labels
                .into_iter()
                .map(|l| l.as_ref().to_ascii_uppercase())
                .collect(),
        }
    }

    /// Builds a registry from the compiled-in fallback list.
    pub fn fallback() -> Self {
        Self::from_labels(fallback::FALLBACK_TLDS.iter().copied())
    }

    /// Fetches the live IANA TLD list, falling back to the compiled-in set.
    ///
    /// The wire format is one label per line with a leading `#` comment line.
    /// Any transport failure, non-success status, or an implausibly small
    /// result falls back (with a warning) rather than erroring: an empty
    /// registry would reject every URL.
    pub async fn fetch(client: &reqwest::Client) -> Self {
        match Self::fetch_live(client).await {
            Ok(registry) => {
                log::info!("Loaded {} TLDs from {}", registry.len(), TLD_LIVE_URL);
                registry
            }
            Err(e) => {
                log::warn!(
                    "Failed to fetch TLD list from {}: {}. Using fallback list.",
                    TLD_LIVE_URL,
                    e
                );
                Self::fallback()
            }
        }
    }

    async fn fetch_live(client: &reqwest::Client) -> Result<Self, anyhow::Error> {
        let body = client
            .get(TLD_LIVE_URL)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let registry = Self::from_labels(
            body.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        );
        // A plausible registry has hundreds of entries; a near-empty one
        // means the source served something unexpected.
        if registry.len() < fallback::FALLBACK_TLDS.len() {
            anyhow::bail!("live TLD list implausibly small ({} entries)", registry.len());
        }
        Ok(registry)
    }

    /// Returns whether a label (any case) is a registered TLD.
    pub fn contains(&self, label: &str) -> bool {
        self.tlds.contains(&label.to_ascii_uppercase())
    }

    /// Returns the number of registered TLDs.
    pub fn len(&self) -> usize {
        self.tlds.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }
}
