//! Person entity model
//!
//! A `Person` is the only record kept by the register. Parent links are weak
//! back-references expressed as arena handles; the registry owns every record.

use smallvec::SmallVec;

use crate::models::traits::EntityModel;
use crate::models::types::{ParentRole, PersonHandle};

/// Ordered surname list, kept inline for the common short case
pub type Surnames = SmallVec<[String; 4]>;

/// A person registered under a national identification number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Handle of this record in the owning registry
    pub handle: PersonHandle,
    /// National identification number
    pub identifier: String,
    /// Given name
    pub name: String,
    /// Surnames in insertion order, duplicates allowed
    pub surnames: Surnames,
    /// Father link, if known
    pub father: Option<PersonHandle>,
    /// Mother link, if known
    pub mother: Option<PersonHandle>,
    /// Depth below the oldest known ancestor, derived from the parent links
    pub generation_index: u32,
}

impl Person {
    pub(crate) fn new(handle: PersonHandle, identifier: String, name: String) -> Self {
        Self {
            handle,
            identifier,
            name,
            surnames: Surnames::new(),
            father: None,
            mother: None,
            generation_index: 0,
        }
    }

    /// Get the parent link for a role
    #[must_use]
    pub const fn parent(&self, role: ParentRole) -> Option<PersonHandle> {
        match role {
            ParentRole::Father => self.father,
            ParentRole::Mother => self.mother,
        }
    }

    pub(crate) fn set_parent(&mut self, role: ParentRole, handle: Option<PersonHandle>) {
        match role {
            ParentRole::Father => self.father = handle,
            ParentRole::Mother => self.mother = handle,
        }
    }

    /// Check whether any surname equals `surname` exactly
    #[must_use]
    pub fn has_surname(&self, surname: &str) -> bool {
        self.surnames.iter().any(|s| s == surname)
    }

    /// Check whether `handle` is this person's father or mother
    #[must_use]
    pub fn is_child_of(&self, handle: PersonHandle) -> bool {
        self.father == Some(handle) || self.mother == Some(handle)
    }

    /// Check whether neither parent is known
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.father.is_none() && self.mother.is_none()
    }
}

impl EntityModel for Person {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.identifier
    }

    fn key(&self) -> String {
        self.identifier.clone()
    }
}
