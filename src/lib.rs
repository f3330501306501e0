//! An in-memory genealogy register keyed by national identification number,
//! with parent/child links, surname lists and derived generation indexes.

pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod utils;

// Re-export the most common types for easier use
pub use common::traits::ModelCollection;
pub use config::{DuplicatePolicy, RegisterConfig};
pub use error::{RegisterError, Result};
pub use models::{ParentRole, Person, PersonHandle};
pub use registry::{EventKind, Journal, PersonRecord, PersonRegistry, RegistryEvent, RegistrySnapshot};
