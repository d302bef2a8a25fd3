// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Program registry: identifier → source text lookup.

use std::collections::HashMap;

use runpad_core::ProgramId;

/// Lookup from program identifiers to registered source text.
///
/// Pure and synchronous: no side effects, and resolving the same
/// identifier twice returns identical source. A static table is one
/// valid implementation, a dynamic store is another — callers must not
/// assume either.
pub trait ProgramRegistry: Send + Sync {
    fn lookup(&self, id: &ProgramId) -> Option<&str>;
}

/// Programs registered out of the box.
pub mod builtin {
    pub const HELLO_WORLD_ID: &str = "day1/hello_world.py";
    pub const HELLO_WORLD: &str =
        "print('Day 1 Program Ran Successfully!')\nprint('Total: ' + str(2 + 2))";

    pub const EXAMPLE_ID: &str = "day2/example.py";
    pub const EXAMPLE: &str = "x = 3\nif x > 5:\n    print('The logic is correct.')\nelse:\n    raise Exception('Test Failure')\nprint('Done.')";
}

/// In-memory registry backed by a map loaded at startup.
#[derive(Debug, Default, Clone)]
pub struct StaticRegistry {
    programs: HashMap<ProgramId, String>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in example snippets.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(builtin::HELLO_WORLD_ID, builtin::HELLO_WORLD);
        registry.insert(builtin::EXAMPLE_ID, builtin::EXAMPLE);
        registry
    }

    /// Registry seeded from an identifier → source table.
    pub fn from_table(table: HashMap<String, String>) -> Self {
        let programs = table
            .into_iter()
            .map(|(id, source)| (ProgramId::from(id), source))
            .collect();
        Self { programs }
    }

    pub fn insert(&mut self, id: impl Into<ProgramId>, source: impl Into<String>) {
        self.programs.insert(id.into(), source.into());
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl ProgramRegistry for StaticRegistry {
    fn lookup(&self, id: &ProgramId) -> Option<&str> {
        self.programs.get(id).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
