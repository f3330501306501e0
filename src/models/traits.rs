//! Trait definitions for domain models

use std::hash::Hash;

/// A trait that all domain models must implement.
///
/// The `EntityModel` trait provides identifier access so that models can be
/// stored and retrieved through the collection traits.
pub trait EntityModel: Clone + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;

    /// Create a unique key string representation of the identifier
    fn key(&self) -> String;
}
