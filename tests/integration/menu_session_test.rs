//! End-to-end menu sessions driven from in-memory scripts

use std::io::Cursor;

use family_register::cli::{Menu, OutputFormat};
use family_register::{EventKind, PersonRegistry};

fn run_session(script: &str, format: OutputFormat) -> (PersonRegistry, String) {
    let mut registry = PersonRegistry::new();
    let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::new()).with_format(format);
    menu.run(&mut registry).unwrap();
    let output = String::from_utf8(menu.into_output()).unwrap();
    (registry, output)
}

const FAMILY_SCRIPT: &str = "\
1 Antonio 111 0 0
1 Beatriz 222 111 0
1 Carla 333 0 0
2 222 Silva
2 111 Silva
3 222 2 333
";

#[test]
fn test_family_session() {
    let script = format!("{FAMILY_SCRIPT}4 222\n8 111\n10\n");
    let (registry, output) = run_session(&script, OutputFormat::Text);

    assert!(output.contains("Person Beatriz with identifier 222 created."));
    assert!(output.contains("Surname 'Silva' added to Beatriz."));
    assert!(output.contains("Mother Carla added/updated."));
    assert!(output.contains(
        "Name: Beatriz\nIdentifier: 222\nSurnames: Silva\nGeneration: 1\nFather: Antonio\nMother: Carla\n"
    ));
    assert!(output.contains("Children of Antonio (111):\nName: Beatriz, Identifier: 222\n"));

    let beatriz = registry.lookup("222").unwrap();
    assert_eq!(beatriz.generation_index, 1);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_errors_are_reported_and_session_continues() {
    let script = "1 Ana 111 0 0\n1 Outra 111 0 0\n2 999\n3 111 1 999\n8 555\n9\n10\n";
    let (registry, output) = run_session(script, OutputFormat::Text);

    assert!(output.contains("Identifier 111 is already registered."));
    assert!(output.contains("Person with identifier 999 not found."));
    assert!(output.contains("Person with identifier 555 not found."));
    assert!(output.contains("Complete listing of all persons:\nName: Ana\n"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_surname_listings() {
    let script = format!("{FAMILY_SCRIPT}5 Silva\n6 Silva 1\n6 Silva x\n5 Costa\n7 Silva\n10\n");
    let (_, output) = run_session(&script, OutputFormat::Text);

    assert!(output.contains("Persons with surname 'Silva':\nName: Antonio\nName: Beatriz\n"));
    assert!(output.contains("Persons with surname 'Silva' in generation 1:\nName: Beatriz\n"));
    assert!(output.contains("Invalid generation 'x'."));
    assert!(output.contains("No person found with surname 'Costa'."));
    assert!(output.contains("No person found with surname 'Silva' in generation 10."));
    assert!(output.contains("Persons with surname 'Silva' in generation 0:\nName: Antonio\n"));
}

#[test]
fn test_surname_capacity_message() {
    let mut script = String::from("1 Ana 111 0 0\n");
    for i in 0..11 {
        script.push_str(&format!("2 111 S{i}\n"));
    }
    script.push_str("10\n");
    let (registry, output) = run_session(&script, OutputFormat::Text);

    assert!(output.contains("Surname limit of 10 reached for person 111."));
    assert_eq!(registry.lookup("111").unwrap().surnames.len(), 10);
}

#[test]
fn test_json_listing() {
    let script = format!("{FAMILY_SCRIPT}9\n10\n");
    let (_, output) = run_session(&script, OutputFormat::Json);

    let start = output.find("{\n").unwrap();
    let end = output.rfind("}\n").unwrap() + 1;
    let value: serde_json::Value = serde_json::from_str(&output[start..end]).unwrap();

    let persons = value["persons"].as_array().unwrap();
    assert_eq!(persons.len(), 3);
    assert_eq!(persons[1]["identifier"], "222");
    assert_eq!(persons[1]["father"], "111");
    assert_eq!(persons[1]["mother"], "333");
    assert_eq!(persons[1]["generation"], 1);
}

#[test]
fn test_end_of_input_ends_session() {
    let (registry, output) = run_session("1 Ana 111", OutputFormat::Text);

    assert!(output.ends_with("Exiting...\n"));
    assert!(registry.is_empty());
}

#[test]
fn test_session_journal() {
    let (registry, _) = run_session(&format!("{FAMILY_SCRIPT}10\n"), OutputFormat::Text);

    let kinds: Vec<&EventKind> = registry.journal().events().iter().map(|e| &e.kind).collect();
    assert_eq!(kinds.len(), 6);
    assert!(matches!(kinds[5], EventKind::ParentSet { parent, .. } if parent == "333"));

    let lines = registry.journal().to_json_lines().unwrap();
    assert_eq!(lines.lines().count(), 6);
}
