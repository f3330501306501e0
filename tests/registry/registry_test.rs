//! Tests for record creation, lookup and surname handling
//!
//! This module exercises the public `PersonRegistry` API the way the menu
//! dispatcher uses it.

use family_register::{
    DuplicatePolicy, ModelCollection, PersonRegistry, RegisterConfig, RegisterError,
};

#[test]
fn test_lookup_returns_created_person() {
    let mut registry = PersonRegistry::new();
    registry.create("Helena", "12345678901", None, None).unwrap();
    registry.create("Otavio", "10987654321", None, None).unwrap();

    let person = registry.lookup("10987654321").unwrap();
    assert_eq!(person.identifier, "10987654321");
    assert_eq!(person.name, "Otavio");
    assert!(registry.contains(&"12345678901".to_string()));
    assert!(!registry.contains(&"99999999999".to_string()));
}

#[test]
fn test_ten_surnames_then_capacity_exceeded() {
    let mut registry = PersonRegistry::new();
    let handle = registry.create("Helena", "111", None, None).unwrap();
    let surnames: Vec<String> = (1..=10).map(|i| format!("Nome{i}")).collect();

    for surname in &surnames {
        registry.append_surname(handle, surname).unwrap();
    }
    let stored: Vec<String> = registry.get(handle).unwrap().surnames.to_vec();
    assert_eq!(stored, surnames);

    let err = registry.append_surname(handle, "Nome11").unwrap_err();
    assert!(matches!(
        err,
        RegisterError::CapacityExceeded { ref identifier, capacity: 10 } if identifier == "111"
    ));
    assert_eq!(registry.get(handle).unwrap().surnames.to_vec(), surnames);
}

#[test]
fn test_duplicate_surnames_are_kept() {
    let mut registry = PersonRegistry::new();
    let handle = registry.create("Helena", "111", None, None).unwrap();
    registry.append_surname(handle, "Silva").unwrap();
    registry.append_surname(handle, "Silva").unwrap();

    assert_eq!(registry.get(handle).unwrap().surnames.len(), 2);
    assert_eq!(registry.list_by_surname("Silva").len(), 1);
}

#[test]
fn test_custom_surname_capacity() {
    let config = RegisterConfig::default().with_surname_capacity(2);
    let mut registry = PersonRegistry::with_config(config);
    let handle = registry.create("Helena", "111", None, None).unwrap();

    registry.append_surname(handle, "A").unwrap();
    registry.append_surname(handle, "B").unwrap();
    assert!(matches!(
        registry.append_surname(handle, "C"),
        Err(RegisterError::CapacityExceeded { capacity: 2, .. })
    ));
}

#[test]
fn test_missing_surname_gives_empty_list() {
    let mut registry = PersonRegistry::new();
    let handle = registry.create("Helena", "111", None, None).unwrap();
    registry.append_surname(handle, "Souza").unwrap();

    assert!(registry.list_by_surname("Silva").is_empty());
    assert!(registry.list_by_surname_and_generation("Silva", 0).is_empty());
}

#[test]
fn test_overwritten_record_only_visible_in_scans() {
    let config = RegisterConfig::default().with_duplicate_policy(DuplicatePolicy::Overwrite);
    let mut registry = PersonRegistry::with_config(config);
    let old = registry.create("Primeira", "111", None, None).unwrap();
    registry.append_surname(old, "Silva").unwrap();
    registry.create("Segunda", "111", None, None).unwrap();

    assert_eq!(registry.lookup("111").unwrap().name, "Segunda");
    let all: Vec<&str> = registry.list_all().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(all, vec!["Primeira", "Segunda"]);
    assert_eq!(registry.list_by_surname("Silva")[0].handle, old);
}

#[test]
fn test_rejected_create_records_no_event() {
    let mut registry = PersonRegistry::new();
    registry.create("Helena", "111", None, None).unwrap();
    assert!(registry.create("Helena", "111", None, None).is_err());

    assert_eq!(registry.journal().len(), 1);
    assert_eq!(registry.len(), 1);
}
