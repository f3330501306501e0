//! Text and JSON rendering of registry results

use std::collections::BTreeMap;
use std::io::Write;

use itertools::Itertools;

use crate::error::Result;
use crate::models::Person;
use crate::registry::{PersonRecord, PersonRegistry};

/// Separator printed after every block of output
pub const SEPARATOR: &str = "------------";

/// How listings are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text blocks
    #[default]
    Text,
    /// Pretty-printed JSON snapshots
    Json,
}

/// Write the full description of one person
pub fn write_person<W: Write>(out: &mut W, registry: &PersonRegistry, person: &Person) -> Result<()> {
    writeln!(out, "Name: {}", person.name)?;
    writeln!(out, "Identifier: {}", person.identifier)?;
    writeln!(out, "Surnames: {}", person.surnames.iter().join(" "))?;
    writeln!(out, "Generation: {}", person.generation_index)?;
    if let Some(father) = registry.father_of(person) {
        writeln!(out, "Father: {}", father.name)?;
    }
    if let Some(mother) = registry.mother_of(person) {
        writeln!(out, "Mother: {}", mother.name)?;
    }
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Write a selection of persons as a JSON snapshot
pub fn write_json<W: Write>(out: &mut W, registry: &PersonRegistry, persons: &[&Person]) -> Result<()> {
    writeln!(out, "{}", registry.snapshot_of(persons).to_json()?)?;
    Ok(())
}

/// Write per-generation groups as a JSON object keyed by generation
pub fn write_generation_groups_json<W: Write>(
    out: &mut W,
    registry: &PersonRegistry,
    groups: &BTreeMap<u32, Vec<&Person>>,
) -> Result<()> {
    let records: BTreeMap<u32, Vec<PersonRecord>> = groups
        .iter()
        .map(|(generation, persons)| {
            (*generation, persons.iter().map(|p| registry.record(p)).collect())
        })
        .collect();
    writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
    Ok(())
}
