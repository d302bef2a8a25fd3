// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classified result of one execution attempt.

use serde::{Deserialize, Serialize};

/// Classification of an execution attempt.
///
/// Serialized variant names (`"Success"` / `"Failure"`) are the wire
/// strings clients match on — do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Success,
    Failure,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RunStatus::Success => "Success",
            RunStatus::Failure => "Failure",
        })
    }
}

/// The result of running one program: a status plus everything the
/// program printed (on success) or a diagnostic (on failure).
///
/// Invariant: `output` is always a finite string, trimmed of leading
/// and trailing whitespace at construction. The constructors below are
/// the only way to build an outcome, so the invariant holds everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub status: RunStatus,
    pub output: String,
}

impl ExecutionOutcome {
    /// Normal completion: `captured` is the program's stdout.
    pub fn success(captured: impl AsRef<str>) -> Self {
        Self {
            status: RunStatus::Success,
            output: captured.as_ref().trim().to_string(),
        }
    }

    /// Fault with no prior output: `diagnostic` describes the fault
    /// (type and trace).
    pub fn failure(diagnostic: impl AsRef<str>) -> Self {
        Self {
            status: RunStatus::Failure,
            output: diagnostic.as_ref().trim().to_string(),
        }
    }

    /// Fault after partial output: whatever the program printed before
    /// the fault is preserved, followed by the diagnostic.
    pub fn failure_with_partial(partial: impl AsRef<str>, diagnostic: impl AsRef<str>) -> Self {
        let partial = partial.as_ref().trim();
        let diagnostic = diagnostic.as_ref().trim();
        if partial.is_empty() {
            return Self::failure(diagnostic);
        }
        Self {
            status: RunStatus::Failure,
            output: format!("{partial}\n{diagnostic}"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
