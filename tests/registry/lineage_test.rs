//! Tests for parent links, generation indexes and children listings

use family_register::{ModelCollection, PersonHandle, PersonRegistry, RegisterError};

fn handles(persons: &[&family_register::Person]) -> Vec<PersonHandle> {
    persons.iter().map(|p| p.handle).collect()
}

#[test]
fn test_three_generation_scenario() {
    let mut registry = PersonRegistry::new();
    let a = registry.create("A", "111", Some(""), Some("")).unwrap();
    let b = registry.create("B", "222", Some("111"), Some("")).unwrap();
    let c = registry.create("C", "333", Some("222"), Some("")).unwrap();

    assert_eq!(registry.get(a).unwrap().generation_index, 0);
    assert_eq!(registry.get(b).unwrap().generation_index, 1);
    assert_eq!(registry.get(c).unwrap().generation_index, 2);

    assert_eq!(handles(&registry.list_children("111").unwrap()), vec![b]);
    assert_eq!(handles(&registry.list_children("222").unwrap()), vec![c]);
}

#[test]
fn test_children_through_either_parent() {
    let mut registry = PersonRegistry::new();
    registry.create("Pai", "111", None, None).unwrap();
    registry.create("Mae", "222", None, None).unwrap();
    let first = registry.create("Primeiro", "333", Some("111"), Some("222")).unwrap();
    let second = registry.create("Segundo", "444", None, Some("222")).unwrap();

    assert_eq!(handles(&registry.list_children("111").unwrap()), vec![first]);
    assert_eq!(handles(&registry.list_children("222").unwrap()), vec![first, second]);
}

#[test]
fn test_list_children_of_unknown_identifier() {
    let registry = PersonRegistry::new();
    assert!(matches!(
        registry.list_children("999"),
        Err(RegisterError::NotFound(ref id)) if id == "999"
    ));
}

#[test]
fn test_parent_created_later_can_be_linked() {
    let mut registry = PersonRegistry::new();
    let child = registry.create("Filha", "222", Some("111"), None).unwrap();
    assert!(registry.get(child).unwrap().father.is_none());

    registry.create("Pai", "111", None, None).unwrap();
    assert!(registry.get(child).unwrap().father.is_none());

    registry.set_father(child, "111").unwrap();
    let person = registry.get(child).unwrap();
    assert_eq!(registry.father_of(person).unwrap().name, "Pai");
    assert_eq!(person.generation_index, 1);
}

#[test]
fn test_set_father_unknown_keeps_link_and_generation() {
    let mut registry = PersonRegistry::new();
    registry.create("Pai", "111", None, None).unwrap();
    let child = registry.create("Filho", "222", Some("111"), None).unwrap();
    let father = registry.get(child).unwrap().father;

    assert!(matches!(
        registry.set_father(child, "999"),
        Err(RegisterError::NotFound(_))
    ));
    assert_eq!(registry.get(child).unwrap().father, father);
    assert_eq!(registry.get(child).unwrap().generation_index, 1);
}

#[test]
fn test_replacing_father_lowers_generation() {
    let mut registry = PersonRegistry::new();
    registry.create("Avo", "111", None, None).unwrap();
    registry.create("Tio", "222", Some("111"), None).unwrap();
    registry.create("Outro", "333", None, None).unwrap();
    let child = registry.create("Crianca", "444", Some("222"), None).unwrap();
    assert_eq!(registry.get(child).unwrap().generation_index, 2);

    registry.set_father(child, "333").unwrap();
    assert_eq!(registry.get(child).unwrap().generation_index, 1);
}

#[test]
fn test_set_mother_uses_current_father() {
    let mut registry = PersonRegistry::new();
    registry.create("Avo", "111", None, None).unwrap();
    registry.create("Pai", "222", Some("111"), None).unwrap();
    registry.create("Mae", "333", None, None).unwrap();
    let child = registry.create("Filho", "444", Some("222"), None).unwrap();

    registry.set_mother(child, "333").unwrap();
    let person = registry.get(child).unwrap();
    assert_eq!(person.generation_index, 2);
    assert_eq!(registry.mother_of(person).unwrap().name, "Mae");
}

#[test]
fn test_generation_invariant_holds_after_mixed_updates() {
    let mut registry = PersonRegistry::new();
    let ids = ["100", "101", "102", "103", "104", "105"];
    let people: Vec<PersonHandle> = ids
        .iter()
        .map(|id| registry.create("P", id, None, None).unwrap())
        .collect();

    registry.set_father(people[1], "100").unwrap();
    registry.set_mother(people[2], "101").unwrap();
    registry.set_father(people[3], "102").unwrap();
    registry.set_mother(people[3], "104").unwrap();
    registry.set_father(people[4], "105").unwrap();
    registry.set_father(people[0], "105").unwrap();
    assert!(registry.set_father(people[5], "103").is_err());

    for person in registry.all() {
        let expected = [registry.father_of(person), registry.mother_of(person)]
            .into_iter()
            .flatten()
            .map(|parent| parent.generation_index + 1)
            .max()
            .unwrap_or(0);
        assert_eq!(person.generation_index, expected, "{}", person.identifier);
    }
    assert_eq!(registry.get(people[3]).unwrap().generation_index, 4);
}
