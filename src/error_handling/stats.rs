//! Validation statistics tracking.
//!
//! Thread-safe per-kind counters for rejected URLs, used by the CLI to print
//! a failure breakdown after a batch run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorKind;

/// Thread-safe rejection statistics tracker.
///
/// Counts rejections per [`ErrorKind`] using atomic counters, allowing
/// concurrent access from multiple tasks. All kinds are initialized to zero
/// on creation, so incrementing never allocates.
pub struct ValidationStats {
    failures: HashMap<ErrorKind, AtomicUsize>,
}

impl ValidationStats {
    /// Creates a tracker with a zeroed counter for every [`ErrorKind`].
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in ErrorKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        ValidationStats { failures }
    }

    /// Increments the counter for a rejection kind.
    ///
    /// All kinds are pre-populated in `new()`; a missing entry indicates an
    /// initialization bug, which is logged rather than panicking.
    pub fn record(&self, kind: ErrorKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record rejection for {:?} which is not in the map. \
                 This indicates a bug in ValidationStats initialization.",
                kind
            );
        }
    }

    /// Returns the rejection count for one kind.
    pub fn count(&self, kind: ErrorKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Returns the total number of recorded rejections.
    pub fn total(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    /// Logs a breakdown of all non-zero rejection counters.
    pub fn print_summary(&self) {
        let total = self.total();
        if total == 0 {
            return;
        }
        log::info!("Rejection breakdown ({} total):", total);
        for kind in ErrorKind::iter() {
            let count = self.count(kind);
            if count > 0 {
                log::info!("  {}: {}", kind, count);
            }
        }
    }
}

impl Default for ValidationStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = ValidationStats::new();
        assert_eq!(stats.total(), 0);
        for kind in ErrorKind::iter() {
            assert_eq!(stats.count(kind), 0);
        }
    }

    #[test]
    fn test_record_increments_only_that_kind() {
        let stats = ValidationStats::new();
        stats.record(ErrorKind::TldError);
        stats.record(ErrorKind::TldError);
        stats.record(ErrorKind::SchemeError);
        assert_eq!(stats.count(ErrorKind::TldError), 2);
        assert_eq!(stats.count(ErrorKind::SchemeError), 1);
        assert_eq!(stats.count(ErrorKind::AuthError), 0);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_record_is_thread_safe() {
        use std::sync::Arc;

        let stats = Arc::new(ValidationStats::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let stats = Arc::clone(&stats);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    stats.record(ErrorKind::RoutabilityError);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.count(ErrorKind::RoutabilityError), 800);
    }
}
