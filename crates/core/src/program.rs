// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Program identifier newtype.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Opaque identifier naming a registered program.
///
/// Always supplied by the caller, never generated by the service. The
/// value is treated as an opaque key — path-looking identifiers like
/// `day1/hello_world.py` carry no filesystem meaning here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(SmolStr);

impl ProgramId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProgramId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProgramId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ProgramId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProgramId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProgramId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::borrow::Borrow<str> for ProgramId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
