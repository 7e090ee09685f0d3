//! Error types and rejection statistics.
//!
//! This module defines the validation error taxonomy and the thread-safe
//! statistics tracker used for batch runs.

mod stats;
mod types;

pub use stats::ValidationStats;
pub use types::{ErrorKind, ValidationError};
