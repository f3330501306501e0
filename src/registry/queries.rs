//! Full-scan queries over the registry
//!
//! Results come back in creation order. Records shadowed by an overwritten
//! identifier are still part of every scan.

use std::collections::BTreeMap;

use super::PersonRegistry;
use crate::common::traits::ModelCollection;
use crate::models::Person;

impl PersonRegistry {
    /// List every record
    #[must_use]
    pub fn list_all(&self) -> Vec<&Person> {
        self.all()
    }

    /// List persons carrying `surname` (case-sensitive exact match)
    #[must_use]
    pub fn list_by_surname(&self, surname: &str) -> Vec<&Person> {
        self.filter(|person| person.has_surname(surname))
    }

    /// List persons carrying `surname` in a specific generation
    #[must_use]
    pub fn list_by_surname_and_generation(&self, surname: &str, generation: u32) -> Vec<&Person> {
        self.filter(|person| person.generation_index == generation && person.has_surname(surname))
    }

    /// Group persons carrying `surname` by generation
    ///
    /// Every generation from 0 up to `max_listed_generation` has an entry,
    /// empty when nobody matches. Deeper generations are left out.
    #[must_use]
    pub fn list_by_surname_per_generation(&self, surname: &str) -> BTreeMap<u32, Vec<&Person>> {
        let max_generation = self.config.max_listed_generation;
        let mut groups: BTreeMap<u32, Vec<&Person>> =
            (0..=max_generation).map(|g| (g, Vec::new())).collect();

        for person in self.list_by_surname(surname) {
            if let Some(group) = groups.get_mut(&person.generation_index) {
                group.push(person);
            }
        }
        groups
    }
}
