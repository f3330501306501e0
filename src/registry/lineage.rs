//! Parent links and generation maintenance
//!
//! A person's generation is one more than the deeper of their parents, or 0
//! with no known parent. Whenever a link changes, the new value is pushed down
//! to every descendant so the rule holds across the whole registry.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::PersonRegistry;
use super::journal::EventKind;
use crate::common::traits::ModelCollection;
use crate::error::{RegisterError, Result};
use crate::models::{ParentRole, Person, PersonHandle};

impl PersonRegistry {
    /// Set or replace a person's father
    ///
    /// # Errors
    /// * `NotFound` when `father_identifier` is not registered; nothing changes
    /// * `CyclicLineage` when the father is the person or one of their descendants
    pub fn set_father(&mut self, handle: PersonHandle, father_identifier: &str) -> Result<()> {
        self.set_parent(handle, ParentRole::Father, father_identifier)
    }

    /// Set or replace a person's mother
    ///
    /// # Errors
    /// Same as [`PersonRegistry::set_father`].
    pub fn set_mother(&mut self, handle: PersonHandle, mother_identifier: &str) -> Result<()> {
        self.set_parent(handle, ParentRole::Mother, mother_identifier)
    }

    /// Set or replace one parent link and refresh generations
    ///
    /// Setting the link to the parent it already points at is a no-op.
    pub fn set_parent(
        &mut self,
        handle: PersonHandle,
        role: ParentRole,
        parent_identifier: &str,
    ) -> Result<()> {
        let person = self.get(handle).ok_or(RegisterError::UnknownHandle(handle))?;
        let Some(parent) = self.handle_of(parent_identifier) else {
            log::warn!("Person with identifier {parent_identifier} not found");
            return Err(RegisterError::NotFound(parent_identifier.to_string()));
        };

        if person.parent(role) == Some(parent) {
            return Ok(());
        }
        if self.is_ancestor_or_self(handle, parent) {
            log::warn!(
                "Refusing to link {parent_identifier} as {role} of {}",
                person.identifier
            );
            return Err(RegisterError::CyclicLineage {
                person: person.identifier.clone(),
                parent: parent_identifier.to_string(),
            });
        }

        let identifier = person.identifier.clone();
        self.person_mut(handle)?.set_parent(role, Some(parent));
        log::info!("{role} of {identifier} set to {parent_identifier}");
        self.journal.append(EventKind::ParentSet {
            identifier,
            role,
            parent: parent_identifier.to_string(),
        });

        self.refresh_generations(handle);
        Ok(())
    }

    /// List the children of the person registered under `identifier`
    ///
    /// Children are matched by record, so after an identifier is overwritten
    /// only the children of the indexed record are returned.
    ///
    /// # Errors
    /// `NotFound` when the identifier is not registered.
    pub fn list_children(&self, identifier: &str) -> Result<Vec<&Person>> {
        let parent = self
            .handle_of(identifier)
            .ok_or_else(|| RegisterError::NotFound(identifier.to_string()))?;
        Ok(self.filter(|person| person.is_child_of(parent)))
    }

    /// Generation implied by a pair of parent links
    pub(crate) fn generation_from(
        &self,
        father: Option<PersonHandle>,
        mother: Option<PersonHandle>,
    ) -> u32 {
        [father, mother]
            .into_iter()
            .flatten()
            .filter_map(|handle| self.get(handle))
            .map(|parent| parent.generation_index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Whether `ancestor` is `person` itself or reachable through parent links
    fn is_ancestor_or_self(&self, ancestor: PersonHandle, person: PersonHandle) -> bool {
        let mut visited = FxHashSet::default();
        let mut pending = vec![person];

        while let Some(current) = pending.pop() {
            if current == ancestor {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(record) = self.get(current) {
                pending.extend(record.father);
                pending.extend(record.mother);
            }
        }
        false
    }

    /// Recompute the generation of `start` and every descendant whose value
    /// depends on it
    fn refresh_generations(&mut self, start: PersonHandle) {
        let mut queue = VecDeque::from([start]);

        while let Some(handle) = queue.pop_front() {
            let Some(person) = self.get(handle) else {
                continue;
            };
            let previous = person.generation_index;
            let generation = self.generation_from(person.father, person.mother);
            if generation == previous {
                continue;
            }

            let identifier = person.identifier.clone();
            self.persons[handle.index()].generation_index = generation;
            log::debug!("Generation of {identifier} changed from {previous} to {generation}");
            self.journal.append(EventKind::GenerationChanged {
                identifier,
                from: previous,
                to: generation,
            });

            queue.extend(
                self.persons
                    .iter()
                    .filter(|child| child.is_child_of(handle))
                    .map(|child| child.handle),
            );
        }
    }
}
