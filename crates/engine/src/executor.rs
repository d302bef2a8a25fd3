// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution engine: run source text, classify the result.

use std::sync::Arc;

use runpad_core::ExecutionOutcome;

use crate::interpreter::{Interpreter, RunCapture};

/// Runs source text through the interpreter and classifies the result.
///
/// This is the single point where untrusted-program faults are
/// contained: `execute` never propagates an error past its boundary.
/// Every fault — a raising program, a dead interpreter, an expired
/// deadline — becomes a `Failure` outcome with a diagnostic.
pub struct ExecutionEngine {
    interpreter: Arc<dyn Interpreter>,
}

impl ExecutionEngine {
    pub fn new(interpreter: Arc<dyn Interpreter>) -> Self {
        Self { interpreter }
    }

    /// Execute one program to completion. Exactly one attempt, no retry.
    ///
    /// Partial stdout captured before a fault is preserved ahead of the
    /// diagnostic, not discarded.
    pub async fn execute(&self, source: &str) -> ExecutionOutcome {
        let start = std::time::Instant::now();
        let outcome = match self.interpreter.run(source).await {
            Ok(RunCapture { stdout, fault: None }) => ExecutionOutcome::success(stdout),
            Ok(RunCapture { stdout, fault: Some(diagnostic) }) => {
                ExecutionOutcome::failure_with_partial(stdout, diagnostic)
            }
            Err(e) => ExecutionOutcome::failure(format!("interpreter error: {e}")),
        };
        tracing::info!(
            status = %outcome.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "execution finished"
        );
        outcome
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
