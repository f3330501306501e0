//! Mutation journal
//!
//! Every successful mutation of a registry appends one event. Sequence numbers
//! start at 1 and are never reused.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::models::ParentRole;

/// What changed in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// A person was created
    Created {
        /// Identifier of the new person
        identifier: String,
        /// Generation computed at creation
        generation: u32,
    },
    /// A surname was appended
    SurnameAppended {
        /// Identifier of the person
        identifier: String,
        /// The appended surname
        surname: String,
    },
    /// A parent link was set or changed
    ParentSet {
        /// Identifier of the child
        identifier: String,
        /// Which link changed
        role: ParentRole,
        /// Identifier of the new parent
        parent: String,
    },
    /// A generation index was recomputed to a different value
    GenerationChanged {
        /// Identifier of the person
        identifier: String,
        /// Previous generation
        from: u32,
        /// New generation
        to: u32,
    },
}

/// A journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEvent {
    /// Position in the journal, starting at 1
    pub sequence: u64,
    /// When the mutation was applied
    pub recorded_at: DateTime<Utc>,
    /// The mutation itself
    #[serde(flatten)]
    pub kind: EventKind,
}

/// Append-only list of registry events
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Vec<RegistryEvent>,
    enabled: bool,
}

impl Journal {
    /// Create an empty journal
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self {
            events: Vec::new(),
            enabled,
        }
    }

    /// Whether events are being recorded
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn append(&mut self, kind: EventKind) {
        if !self.enabled {
            return;
        }
        let event = RegistryEvent {
            sequence: self.events.len() as u64 + 1,
            recorded_at: Utc::now(),
            kind,
        };
        log::debug!("Journal #{}: {:?}", event.sequence, event.kind);
        self.events.push(event);
    }

    /// All recorded events in order
    #[must_use]
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// Number of recorded events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Render the journal as one JSON object per line
    pub fn to_json_lines(&self) -> Result<String> {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}
