//! Person registry
//!
//! The registry owns every `Person` in an arena and indexes the arena by
//! identifier. Parent links are arena handles, so records can reference each
//! other without shared ownership. Records are never removed, which keeps
//! every handle valid for the registry's whole life.

pub mod journal;
pub mod lineage;
pub mod queries;
pub mod snapshot;

pub use journal::{EventKind, Journal, RegistryEvent};
pub use snapshot::{PersonRecord, RegistrySnapshot};

use rustc_hash::FxHashMap;

use crate::common::traits::ModelCollection;
use crate::config::{DuplicatePolicy, RegisterConfig};
use crate::error::{RegisterError, Result};
use crate::models::{Person, PersonHandle};

/// In-memory genealogy register keyed by identifier
#[derive(Debug)]
pub struct PersonRegistry {
    /// Active configuration
    config: RegisterConfig,
    /// Every record ever created, in creation order
    persons: Vec<Person>,
    /// Identifier to arena position
    index: FxHashMap<String, PersonHandle>,
    /// Mutation journal
    journal: Journal,
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonRegistry {
    /// Create an empty registry with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegisterConfig::default())
    }

    /// Create an empty registry with a custom configuration
    #[must_use]
    pub fn with_config(config: RegisterConfig) -> Self {
        let journal = Journal::new(config.journal);
        Self {
            config,
            persons: Vec::new(),
            index: FxHashMap::default(),
            journal,
        }
    }

    /// Get the active configuration
    #[must_use]
    pub const fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Get the mutation journal
    #[must_use]
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Number of records in the arena, including records shadowed by an
    /// overwritten identifier
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether the registry holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Get a person by handle
    #[must_use]
    pub fn get(&self, handle: PersonHandle) -> Option<&Person> {
        self.persons.get(handle.index())
    }

    /// Resolve an identifier to a handle
    #[must_use]
    pub fn handle_of(&self, identifier: &str) -> Option<PersonHandle> {
        self.index.get(identifier).copied()
    }

    /// Look up a person by identifier
    ///
    /// Returns `None` when no person is indexed under `identifier`; the empty
    /// identifier never matches.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&Person> {
        self.handle_of(identifier).and_then(|handle| self.get(handle))
    }

    /// Get a person's father record
    #[must_use]
    pub fn father_of(&self, person: &Person) -> Option<&Person> {
        person.father.and_then(|handle| self.get(handle))
    }

    /// Get a person's mother record
    #[must_use]
    pub fn mother_of(&self, person: &Person) -> Option<&Person> {
        person.mother.and_then(|handle| self.get(handle))
    }

    /// Create a person
    ///
    /// Parent identifiers that are `None`, empty or not registered leave the
    /// corresponding link absent. The generation index is derived from the
    /// resolved parents.
    ///
    /// # Errors
    /// * `EmptyIdentifier` / `FieldTooLong` when a field is out of bounds
    /// * `DuplicateIdentifier` when the identifier exists and the policy is
    ///   `DuplicatePolicy::Reject`
    pub fn create(
        &mut self,
        name: &str,
        identifier: &str,
        father_identifier: Option<&str>,
        mother_identifier: Option<&str>,
    ) -> Result<PersonHandle> {
        self.check_identifier(identifier)?;
        check_length("name", name, self.config.max_name_len)?;

        if let Some(existing) = self.handle_of(identifier) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    log::warn!("Refusing to create {identifier}: identifier already registered");
                    return Err(RegisterError::DuplicateIdentifier(identifier.to_string()));
                }
                DuplicatePolicy::Overwrite => {
                    log::warn!(
                        "Identifier {identifier} re-created; record {existing} is no longer indexed"
                    );
                }
            }
        }

        let father = father_identifier.and_then(|id| self.handle_of(id));
        let mother = mother_identifier.and_then(|id| self.handle_of(id));

        let handle = PersonHandle::new(self.persons.len());
        let mut person = Person::new(handle, identifier.to_string(), name.to_string());
        person.father = father;
        person.mother = mother;
        person.generation_index = self.generation_from(father, mother);
        let generation = person.generation_index;

        self.persons.push(person);
        self.index.insert(identifier.to_string(), handle);
        self.journal.append(EventKind::Created {
            identifier: identifier.to_string(),
            generation,
        });

        log::info!("Person {name} with identifier {identifier} created (generation {generation})");
        Ok(handle)
    }

    /// Append a surname to a person
    ///
    /// # Errors
    /// * `CapacityExceeded` when the surname list is full; nothing changes
    /// * `FieldTooLong` when the surname is longer than `max_name_len`
    /// * `UnknownHandle` when `handle` is not from this registry
    pub fn append_surname(&mut self, handle: PersonHandle, surname: &str) -> Result<()> {
        check_length("surname", surname, self.config.max_name_len)?;
        let capacity = self.config.surname_capacity;
        let person = self.person_mut(handle)?;

        if person.surnames.len() >= capacity {
            log::warn!("Surname limit reached for {}", person.identifier);
            return Err(RegisterError::CapacityExceeded {
                identifier: person.identifier.clone(),
                capacity,
            });
        }

        person.surnames.push(surname.to_string());
        let identifier = person.identifier.clone();
        log::info!("Surname '{surname}' added to person {identifier}");

        self.journal.append(EventKind::SurnameAppended {
            identifier,
            surname: surname.to_string(),
        });
        Ok(())
    }

    pub(crate) fn person_mut(&mut self, handle: PersonHandle) -> Result<&mut Person> {
        self.persons
            .get_mut(handle.index())
            .ok_or(RegisterError::UnknownHandle(handle))
    }

    fn check_identifier(&self, identifier: &str) -> Result<()> {
        if identifier.is_empty() {
            return Err(RegisterError::EmptyIdentifier);
        }
        check_length("identifier", identifier, self.config.max_identifier_len)
    }
}

/// Check a bounded string field, counting characters rather than bytes
fn check_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(RegisterError::FieldTooLong { field, max, actual });
    }
    Ok(())
}

impl ModelCollection<Person> for PersonRegistry {
    fn get(&self, id: &String) -> Option<&Person> {
        self.lookup(id)
    }

    fn all(&self) -> Vec<&Person> {
        self.persons.iter().collect()
    }

    fn count(&self) -> usize {
        self.persons.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<&Person>
    where
        F: Fn(&Person) -> bool,
    {
        self.persons.iter().filter(|person| predicate(person)).collect()
    }
}
