//! Logging utilities
//!
//! This module provides logger initialization and standardized logging
//! functions for registry sessions.

use std::time::Duration;

/// Initialize `env_logger`
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// everything down to debug when `verbose` is set. Interactive sessions
/// already print their own confirmations, so info lines stay hidden by default.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Log the end of a session with consistent format
///
/// # Arguments
/// * `persons` - Number of records in the registry
/// * `events` - Number of journal events recorded
/// * `elapsed` - Optional session duration
pub fn log_session_complete(persons: usize, events: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!(
            "Session finished with {persons} persons and {events} journal events in {duration:?}"
        );
    } else {
        log::info!("Session finished with {persons} persons and {events} journal events");
    }
}
