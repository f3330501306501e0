//! Serializable views of registry records
//!
//! Parent handles are resolved to identifiers so the output stands on its own.

use serde::Serialize;

use super::PersonRegistry;
use crate::error::Result;
use crate::models::Person;

/// Flat, self-contained copy of one person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRecord {
    /// National identification number
    pub identifier: String,
    /// Given name
    pub name: String,
    /// Surnames in insertion order
    pub surnames: Vec<String>,
    /// Father's identifier, if linked
    pub father: Option<String>,
    /// Mother's identifier, if linked
    pub mother: Option<String>,
    /// Derived generation index
    pub generation: u32,
}

/// Ordered list of person records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    /// Records in the order they were selected
    pub persons: Vec<PersonRecord>,
}

impl RegistrySnapshot {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PersonRegistry {
    /// Build a record for one person
    #[must_use]
    pub fn record(&self, person: &Person) -> PersonRecord {
        PersonRecord {
            identifier: person.identifier.clone(),
            name: person.name.clone(),
            surnames: person.surnames.to_vec(),
            father: self.father_of(person).map(|p| p.identifier.clone()),
            mother: self.mother_of(person).map(|p| p.identifier.clone()),
            generation: person.generation_index,
        }
    }

    /// Build a snapshot of a selection of persons
    #[must_use]
    pub fn snapshot_of(&self, persons: &[&Person]) -> RegistrySnapshot {
        RegistrySnapshot {
            persons: persons.iter().map(|person| self.record(person)).collect(),
        }
    }

    /// Build a snapshot of every record
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.snapshot_of(&self.list_all())
    }
}
