// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request pipeline: Resolve → Execute → Audit → report.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use runpad_core::{ProgramId, RunStatus};

use crate::executor::ExecutionEngine;
use crate::interpreter::Interpreter;
use crate::recorder::{AuditRecorder, AuditStore, RecordResult};
use crate::registry::ProgramRegistry;

/// Delimits the audit-failure notice appended to a report's output.
pub const AUDIT_FAILURE_DELIMITER: &str = "--- AUDIT LOGGING ERROR ---";

/// Errors that surface to the caller as request-level failures.
///
/// A program that faults during execution is NOT an error here — that
/// is a successfully handled failing program, reported in the
/// [`RunReport`] status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("Program not found: {0}")]
    NotFound(ProgramId),
}

/// Shaped result of one run, ready for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub status: RunStatus,
    pub program: ProgramId,
    pub output: String,
}

/// Sequences one request through the pipeline.
///
/// One pass per request: no retries, no branching back. The audit
/// write always happens after the outcome is fully determined, and a
/// persistence failure only annotates the output — the execution
/// result itself is never discarded.
pub struct RunPipeline {
    registry: Arc<dyn ProgramRegistry>,
    engine: ExecutionEngine,
    recorder: AuditRecorder,
}

impl RunPipeline {
    pub fn new(
        registry: Arc<dyn ProgramRegistry>,
        interpreter: Arc<dyn Interpreter>,
        store: Arc<dyn AuditStore>,
    ) -> Self {
        Self {
            registry,
            engine: ExecutionEngine::new(interpreter),
            recorder: AuditRecorder::new(store),
        }
    }

    pub async fn run(&self, id: &ProgramId) -> Result<RunReport, RunError> {
        let source = self
            .registry
            .lookup(id)
            .ok_or_else(|| RunError::NotFound(id.clone()))?;

        let outcome = self.engine.execute(source).await;

        let mut output = outcome.output.clone();
        match self.recorder.record(id, &outcome).await {
            RecordResult::Recorded(_) => {}
            RecordResult::PersistFailed(reason) => {
                output = format!(
                    "{output}\n\n{AUDIT_FAILURE_DELIMITER}\nCould not record run: {reason}"
                );
            }
        }

        tracing::info!(program = %id, status = %outcome.status, "run complete");
        Ok(RunReport {
            status: outcome.status,
            program: id.clone(),
            output,
        })
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
