//! Configuration for the `PersonRegistry`.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RegisterError, Result};

/// How `create` treats an identifier that is already registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateIdentifier` and leave the registry untouched
    #[default]
    Reject,
    /// Index the new record under the identifier; the previous record stays
    /// in the arena and is only reachable through full scans
    Overwrite,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// Configuration for the `PersonRegistry`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Maximum number of surnames per person
    pub surname_capacity: usize,
    /// Maximum identifier length in characters
    pub max_identifier_len: usize,
    /// Maximum length of names and surnames in characters
    pub max_name_len: usize,
    /// Behaviour when an identifier is created twice
    pub duplicate_policy: DuplicatePolicy,
    /// Highest generation covered by per-generation surname listings
    pub max_listed_generation: u32,
    /// Record every mutation in the registry journal
    pub journal: bool,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            surname_capacity: 10,
            max_identifier_len: 11,
            max_name_len: 49,
            duplicate_policy: DuplicatePolicy::Reject,
            max_listed_generation: 10,
            journal: true,
        }
    }
}

impl RegisterConfig {
    /// Load a configuration from a JSON file
    ///
    /// Fields missing from the file keep their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded registry configuration from {}", path.display());
        Ok(config)
    }

    /// Check that every bound is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_identifier_len == 0 {
            return Err(RegisterError::Config(
                "max_identifier_len must be at least 1".to_string(),
            ));
        }
        if self.max_name_len == 0 {
            return Err(RegisterError::Config(
                "max_name_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the surname capacity
    #[must_use]
    pub fn with_surname_capacity(mut self, capacity: usize) -> Self {
        self.surname_capacity = capacity;
        self
    }

    /// Set the duplicate identifier policy
    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Enable or disable the mutation journal
    #[must_use]
    pub fn with_journal(mut self, enabled: bool) -> Self {
        self.journal = enabled;
        self
    }
}

impl fmt::Display for RegisterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Register Configuration:")?;
        writeln!(f, "  Surname Capacity: {}", self.surname_capacity)?;
        writeln!(f, "  Max Identifier Length: {}", self.max_identifier_len)?;
        writeln!(f, "  Max Name Length: {}", self.max_name_len)?;
        writeln!(f, "  Duplicate Policy: {}", self.duplicate_policy)?;
        writeln!(f, "  Max Listed Generation: {}", self.max_listed_generation)?;
        writeln!(f, "  Journal: {}", self.journal)?;
        Ok(())
    }
}
