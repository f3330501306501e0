//! Standardized collection traits
//!
//! This module defines traits for collections of domain models, providing
//! a unified interface for getting, listing and filtering records.

use crate::models::traits::EntityModel;

/// Core trait for model collections
///
/// Collections own their models and hand out shared references, so callers
/// cannot change derived attributes behind the collection's back.
pub trait ModelCollection<T: EntityModel>: std::fmt::Debug {
    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<&T>;

    /// Get all models in the collection
    fn all(&self) -> Vec<&T>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool;

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }
}
