//! Value types shared by the person model and the registry

use std::fmt;

use serde::Serialize;

/// Stable index of a person inside one registry's arena
///
/// Handles are only meaningful for the registry that issued them. They stay
/// valid for the registry's whole life because records are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonHandle(u32);

impl PersonHandle {
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the record in the arena
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PersonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which parent link an operation touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentRole {
    /// The father link
    Father,
    /// The mother link
    Mother,
}

impl fmt::Display for ParentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Father => write!(f, "father"),
            Self::Mother => write!(f, "mother"),
        }
    }
}
