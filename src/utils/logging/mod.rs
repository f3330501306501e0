//! Logging utilities
//!
//! This module provides logger setup and standardized log lines.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{init_logging, log_session_complete};
