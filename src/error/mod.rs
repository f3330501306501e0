//! Error handling for the `PersonRegistry`.

use std::io;

use crate::models::PersonHandle;

/// Errors reported by registry operations
///
/// Every variant is recoverable: an operation that returns an error leaves the
/// registry exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// No person is indexed under the identifier
    #[error("Person with identifier {0} not found")]
    NotFound(String),

    /// The handle does not point into this registry's arena
    #[error("Unknown person handle {0}")]
    UnknownHandle(PersonHandle),

    /// The person's surname list is full
    #[error("Surname limit of {capacity} reached for person {identifier}")]
    CapacityExceeded {
        /// Identifier of the person whose list is full
        identifier: String,
        /// Configured surname capacity
        capacity: usize,
    },

    /// The identifier is already indexed
    #[error("Identifier {0} is already registered")]
    DuplicateIdentifier(String),

    /// Identifiers must contain at least one character
    #[error("Identifier must not be empty")]
    EmptyIdentifier,

    /// A bounded string field is longer than the configured maximum
    #[error("{field} is {actual} characters long, the maximum is {max}")]
    FieldTooLong {
        /// Name of the offending field
        field: &'static str,
        /// Configured maximum length in characters
        max: usize,
        /// Length of the rejected value in characters
        actual: usize,
    },

    /// The parent link would make a person their own ancestor
    #[error("Linking {parent} as parent of {person} would create a cycle")]
    CyclicLineage {
        /// Identifier of the person being linked
        person: String,
        /// Identifier of the proposed parent
        parent: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegisterError {
    /// Whether the error means the requested record does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::UnknownHandle(_))
    }
}

/// Result type for `PersonRegistry` operations
pub type Result<T> = std::result::Result<T, RegisterError>;
