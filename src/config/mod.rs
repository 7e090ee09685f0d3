//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, policy lists, syntax limits)
//! - Evaluation policy options
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, EvalOptions, LogFormat, LogLevel};
