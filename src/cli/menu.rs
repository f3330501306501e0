//! Interactive menu loop
//!
//! Reads a numbered choice and the tokens each command needs, calls the
//! registry and renders the outcome. Registry errors are reported and the
//! loop keeps going; only I/O failures end the session early.

use std::io::{BufRead, Write};

use anyhow::Result;

use super::input::TokenReader;
use super::render::{self, OutputFormat, SEPARATOR};
use crate::models::{ParentRole, Person};
use crate::registry::PersonRegistry;

/// Token meaning "parent not known" when creating a person
pub const UNKNOWN_PARENT: &str = "0";

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Create a person
    CreatePerson,
    /// Append a surname to a person
    AddSurname,
    /// Set or replace a parent link
    SetParent,
    /// Show one person
    ShowPerson,
    /// List persons by surname
    ListBySurname,
    /// List persons by surname in one generation
    ListBySurnameAndGeneration,
    /// List persons by surname for every generation
    ListBySurnamePerGeneration,
    /// List the children of a person
    ListChildren,
    /// List every person
    ListAll,
    /// Leave the menu
    Exit,
}

impl MenuChoice {
    /// Parse a menu number
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let choice = match token.parse::<u8>().ok()? {
            1 => Self::CreatePerson,
            2 => Self::AddSurname,
            3 => Self::SetParent,
            4 => Self::ShowPerson,
            5 => Self::ListBySurname,
            6 => Self::ListBySurnameAndGeneration,
            7 => Self::ListBySurnamePerGeneration,
            8 => Self::ListChildren,
            9 => Self::ListAll,
            10 => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

const MENU_TEXT: &str = "\nMenu:\n\
1. Create person\n\
2. Add surname to person\n\
3. Add/update father or mother\n\
4. Show person by identifier\n\
5. List persons by surname\n\
6. List persons by surname and generation\n\
7. List persons by surname in every generation\n\
8. List children\n\
9. List all persons\n\
10. Exit\n\
Choose an option: ";

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven dispatcher over any reader/writer pair
#[derive(Debug)]
pub struct Menu<R, W> {
    input: TokenReader<R>,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu reading from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            format: OutputFormat::Text,
        }
    }

    /// Set the listing format
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Give back the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the exit option or end of input
    pub fn run(&mut self, registry: &mut PersonRegistry) -> Result<()> {
        loop {
            write!(self.output, "{MENU_TEXT}")?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                break;
            };
            let flow = match MenuChoice::parse(&token) {
                Some(choice) => self.dispatch(choice, registry)?,
                None => {
                    writeln!(self.output, "Invalid option, try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, registry: &mut PersonRegistry) -> Result<Flow> {
        log::debug!("Menu choice {choice:?}");
        match choice {
            MenuChoice::CreatePerson => self.create_person(registry),
            MenuChoice::AddSurname => self.add_surname(registry),
            MenuChoice::SetParent => self.set_parent(registry),
            MenuChoice::ShowPerson => self.show_person(registry),
            MenuChoice::ListBySurname => self.list_by_surname(registry),
            MenuChoice::ListBySurnameAndGeneration => self.list_by_surname_and_generation(registry),
            MenuChoice::ListBySurnamePerGeneration => self.list_by_surname_per_generation(registry),
            MenuChoice::ListChildren => self.list_children(registry),
            MenuChoice::ListAll => self.list_all(registry),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    /// Print a prompt and read one token
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(self.input.next_token()?)
    }

    fn not_found(&mut self, identifier: &str) -> Result<Flow> {
        writeln!(self.output, "Person with identifier {identifier} not found.")?;
        Ok(Flow::Continue)
    }

    fn create_person(&mut self, registry: &mut PersonRegistry) -> Result<Flow> {
        let Some(name) = self.prompt("Enter the person's name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(identifier) = self.prompt("Enter the identifier (digits only): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(father) = self.prompt("Enter the father's identifier (or '0' if unknown): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(mother) = self.prompt("Enter the mother's identifier (or '0' if unknown): ")? else {
            return Ok(Flow::Exit);
        };

        let father = (father != UNKNOWN_PARENT).then_some(father.as_str());
        let mother = (mother != UNKNOWN_PARENT).then_some(mother.as_str());

        match registry.create(&name, &identifier, father, mother) {
            Ok(_) => writeln!(
                self.output,
                "Person {name} with identifier {identifier} created."
            )?,
            Err(err) => writeln!(self.output, "{err}.")?,
        }
        Ok(Flow::Continue)
    }

    fn add_surname(&mut self, registry: &mut PersonRegistry) -> Result<Flow> {
        let Some(identifier) = self.prompt("Enter the identifier of the person: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(handle) = registry.handle_of(&identifier) else {
            return self.not_found(&identifier);
        };
        let Some(surname) = self.prompt("Enter the surname to add: ")? else {
            return Ok(Flow::Exit);
        };

        match registry.append_surname(handle, &surname) {
            Ok(()) => {
                let name = registry.get(handle).map_or("", |p| p.name.as_str());
                writeln!(self.output, "Surname '{surname}' added to {name}.")?;
            }
            Err(err) => writeln!(self.output, "{err}.")?,
        }
        Ok(Flow::Continue)
    }

    fn set_parent(&mut self, registry: &mut PersonRegistry) -> Result<Flow> {
        let Some(identifier) = self.prompt("Enter the identifier of the person: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(handle) = registry.handle_of(&identifier) else {
            return self.not_found(&identifier);
        };
        let Some(option) = self.prompt("1. Add/update father\n2. Add/update mother\n")? else {
            return Ok(Flow::Exit);
        };
        let role = match option.as_str() {
            "1" => ParentRole::Father,
            "2" => ParentRole::Mother,
            _ => {
                writeln!(self.output, "Invalid option.")?;
                return Ok(Flow::Continue);
            }
        };
        let Some(parent) = self.prompt(&format!("Enter the {role}'s identifier: "))? else {
            return Ok(Flow::Exit);
        };

        match registry.set_parent(handle, role, &parent) {
            Ok(()) => {
                let name = registry.lookup(&parent).map_or("", |p| p.name.as_str());
                writeln!(self.output, "{} {name} added/updated.", capitalize(role))?;
            }
            Err(err) => writeln!(self.output, "{err}.")?,
        }
        Ok(Flow::Continue)
    }

    fn show_person(&mut self, registry: &PersonRegistry) -> Result<Flow> {
        let Some(identifier) = self.prompt("Enter the identifier to look up: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(person) = registry.lookup(&identifier) else {
            return self.not_found(&identifier);
        };
        match self.format {
            OutputFormat::Text => render::write_person(&mut self.output, registry, person)?,
            OutputFormat::Json => render::write_json(&mut self.output, registry, &[person])?,
        }
        Ok(Flow::Continue)
    }

    fn list_by_surname(&mut self, registry: &PersonRegistry) -> Result<Flow> {
        let Some(surname) = self.prompt("Enter the surname to list: ")? else {
            return Ok(Flow::Exit);
        };
        let persons = registry.list_by_surname(&surname);
        match self.format {
            OutputFormat::Text => {
                writeln!(self.output, "Persons with surname '{surname}':")?;
                self.write_names(&persons, &format!("No person found with surname '{surname}'."))?;
            }
            OutputFormat::Json => render::write_json(&mut self.output, registry, &persons)?,
        }
        Ok(Flow::Continue)
    }

    fn list_by_surname_and_generation(&mut self, registry: &PersonRegistry) -> Result<Flow> {
        let Some(surname) = self.prompt("Enter the surname to list: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(generation) = self.prompt("Enter the generation to list: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(generation) = generation.parse::<u32>() else {
            writeln!(self.output, "Invalid generation '{generation}'.")?;
            return Ok(Flow::Continue);
        };

        let persons = registry.list_by_surname_and_generation(&surname, generation);
        match self.format {
            OutputFormat::Text => self.write_generation(&surname, generation, &persons)?,
            OutputFormat::Json => render::write_json(&mut self.output, registry, &persons)?,
        }
        Ok(Flow::Continue)
    }

    fn list_by_surname_per_generation(&mut self, registry: &PersonRegistry) -> Result<Flow> {
        let Some(surname) = self.prompt("Enter the surname to list: ")? else {
            return Ok(Flow::Exit);
        };
        let groups = registry.list_by_surname_per_generation(&surname);
        match self.format {
            OutputFormat::Text => {
                for (generation, persons) in &groups {
                    self.write_generation(&surname, *generation, persons)?;
                }
            }
            OutputFormat::Json => {
                render::write_generation_groups_json(&mut self.output, registry, &groups)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list_children(&mut self, registry: &PersonRegistry) -> Result<Flow> {
        let Some(identifier) = self.prompt("Enter the identifier to list children of: ")? else {
            return Ok(Flow::Exit);
        };
        let (Some(parent), Ok(children)) =
            (registry.lookup(&identifier), registry.list_children(&identifier))
        else {
            return self.not_found(&identifier);
        };

        match self.format {
            OutputFormat::Text => {
                writeln!(self.output, "Children of {} ({}):", parent.name, parent.identifier)?;
                if children.is_empty() {
                    writeln!(self.output, "No children found for {}.", parent.name)?;
                }
                for child in &children {
                    writeln!(self.output, "Name: {}, Identifier: {}", child.name, child.identifier)?;
                }
                writeln!(self.output, "{SEPARATOR}")?;
            }
            OutputFormat::Json => render::write_json(&mut self.output, registry, &children)?,
        }
        Ok(Flow::Continue)
    }

    fn list_all(&mut self, registry: &PersonRegistry) -> Result<Flow> {
        let persons = registry.list_all();
        match self.format {
            OutputFormat::Text => {
                writeln!(self.output, "Complete listing of all persons:")?;
                for person in persons {
                    render::write_person(&mut self.output, registry, person)?;
                }
            }
            OutputFormat::Json => render::write_json(&mut self.output, registry, &persons)?,
        }
        Ok(Flow::Continue)
    }

    fn write_generation(&mut self, surname: &str, generation: u32, persons: &[&Person]) -> Result<()> {
        writeln!(
            self.output,
            "Persons with surname '{surname}' in generation {generation}:"
        )?;
        self.write_names(
            persons,
            &format!("No person found with surname '{surname}' in generation {generation}."),
        )
    }

    fn write_names(&mut self, persons: &[&Person], empty_message: &str) -> Result<()> {
        if persons.is_empty() {
            writeln!(self.output, "{empty_message}")?;
        }
        for person in persons {
            writeln!(self.output, "Name: {}", person.name)?;
        }
        writeln!(self.output, "{SEPARATOR}")?;
        Ok(())
    }
}

fn capitalize(role: ParentRole) -> &'static str {
    match role {
        ParentRole::Father => "Father",
        ParentRole::Mother => "Mother",
    }
}
