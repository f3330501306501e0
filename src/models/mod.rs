//! Domain models for the genealogy register
//!
//! This module contains the `Person` entity and the small value types that
//! tie persons together inside a `PersonRegistry`.

pub mod person;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use person::{Person, Surnames};
pub use traits::EntityModel;
pub use types::{ParentRole, PersonHandle};
