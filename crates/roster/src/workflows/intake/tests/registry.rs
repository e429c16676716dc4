use super::common::*;
use crate::workflows::intake::registry::{RegistryError, UserRegistry};

#[test]
fn add_then_remove_round_trips() {
    let mut registry = UserRegistry::new();
    let record = ana();

    registry.add(record.clone()).expect("first add succeeds");
    let matches = registry
        .list()
        .iter()
        .filter(|stored| **stored == record)
        .count();
    assert_eq!(matches, 1);

    let removed = registry.remove(&record.email);
    assert_eq!(removed, Some(record.clone()));
    assert!(!registry.list().contains(&record));
    assert!(registry.is_empty());
}

#[test]
fn removing_unknown_email_is_a_no_op() {
    let mut registry = UserRegistry::new();
    registry.add(ana()).expect("add succeeds");
    let before = registry.list().to_vec();

    assert_eq!(registry.remove("nobody@ex.com"), None);
    assert_eq!(registry.list(), before.as_slice());

    registry.remove("ana@ex.com");
    assert_eq!(registry.remove("ana@ex.com"), None);
    assert!(registry.is_empty());
}

#[test]
fn duplicate_email_is_refused_without_mutation() {
    let mut registry = UserRegistry::new();
    registry.add(ana()).expect("add succeeds");

    let mut impostor = candidate("ana@ex.com", "1980-05-05", "2010-01-01");
    impostor.first_name = "Other".to_string();

    match registry.add(impostor) {
        Err(RegistryError::DuplicateEmail { email }) => assert_eq!(email, "ana@ex.com"),
        other => panic!("expected duplicate email error, got {other:?}"),
    }
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get("ana@ex.com").map(|record| record.first_name.as_str()),
        Some("Ana")
    );
}

#[test]
fn list_preserves_insertion_order() {
    let mut registry = UserRegistry::new();
    for email in ["c@ex.com", "a@ex.com", "b@ex.com"] {
        registry
            .add(candidate(email, "1990-01-01", "2020-01-01"))
            .expect("add succeeds");
    }
    registry.remove("a@ex.com");

    let emails: Vec<&str> = registry
        .list()
        .iter()
        .map(|record| record.email.as_str())
        .collect();
    assert_eq!(emails, vec!["c@ex.com", "b@ex.com"]);
    assert!(registry.contains("b@ex.com"));
}
