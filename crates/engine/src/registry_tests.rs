// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    hello_world = { builtin::HELLO_WORLD_ID, builtin::HELLO_WORLD },
    example = { builtin::EXAMPLE_ID, builtin::EXAMPLE },
)]
fn builtin_resolves_registered_source(id: &str, expected: &str) {
    let registry = StaticRegistry::builtin();
    assert_eq!(registry.lookup(&ProgramId::new(id)), Some(expected));
}

#[test]
fn unregistered_identifier_is_none() {
    let registry = StaticRegistry::builtin();
    assert_eq!(registry.lookup(&ProgramId::new("unknown/x.py")), None);
}

#[test]
fn lookup_is_idempotent() {
    let registry = StaticRegistry::builtin();
    let id = ProgramId::new(builtin::HELLO_WORLD_ID);
    assert_eq!(registry.lookup(&id), registry.lookup(&id));
}

#[test]
fn from_table_registers_every_entry() {
    let table = [
        ("a.py".to_string(), "print(1)".to_string()),
        ("b.py".to_string(), "print(2)".to_string()),
    ]
    .into_iter()
    .collect();

    let registry = StaticRegistry::from_table(table);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.lookup(&ProgramId::new("a.py")), Some("print(1)"));
    assert_eq!(registry.lookup(&ProgramId::new("b.py")), Some("print(2)"));
}

#[test]
fn insert_overwrites_existing_source() {
    let mut registry = StaticRegistry::new();
    registry.insert("a.py", "old");
    registry.insert("a.py", "new");
    assert_eq!(registry.lookup(&ProgramId::new("a.py")), Some("new"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn empty_registry_resolves_nothing() {
    let registry = StaticRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.lookup(&ProgramId::new("a.py")), None);
}
