// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Audit recorder: best-effort persistence of execution outcomes.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use runpad_core::{AuditRecord, Clock, ExecutionOutcome, ProgramId};
use runpad_storage::AuditLog;

/// Errors from the audit store collaborator.
#[derive(Debug, Error)]
pub enum AuditStoreError {
    #[error("audit write failed: {0}")]
    WriteFailed(String),
}

/// Port trait for the append-only audit store.
///
/// One call issues exactly one write. The store assigns the record
/// timestamp at write time; callers never supply one.
#[async_trait]
pub trait AuditStore: Send + Sync {
    async fn record(
        &self,
        id: &ProgramId,
        outcome: &ExecutionOutcome,
    ) -> Result<AuditRecord, AuditStoreError>;
}

/// Result of one recording attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordResult {
    Recorded(AuditRecord),
    PersistFailed(String),
}

/// Writes outcomes to the audit store without ever raising.
///
/// A persistence failure is degraded to [`RecordResult::PersistFailed`]
/// so audit durability is never a precondition for answering the
/// caller. One best-effort write per execution — no retry, no queue.
pub struct AuditRecorder {
    store: Arc<dyn AuditStore>,
}

impl AuditRecorder {
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self { store }
    }

    pub async fn record(&self, id: &ProgramId, outcome: &ExecutionOutcome) -> RecordResult {
        match self.store.record(id, outcome).await {
            Ok(record) => RecordResult::Recorded(record),
            Err(e) => {
                tracing::warn!(program = %id, error = %e, "audit write failed");
                RecordResult::PersistFailed(e.to_string())
            }
        }
    }
}

/// Audit store backed by the on-disk [`AuditLog`].
///
/// Timestamps come from the store's own clock at write time, so records
/// never inherit clock skew from the requesting component.
pub struct LogAuditStore<C: Clock> {
    log: Arc<Mutex<AuditLog>>,
    clock: C,
}

impl<C: Clock> LogAuditStore<C> {
    pub fn new(log: Arc<Mutex<AuditLog>>, clock: C) -> Self {
        Self { log, clock }
    }
}

#[async_trait]
impl<C: Clock + 'static> AuditStore for LogAuditStore<C> {
    async fn record(
        &self,
        id: &ProgramId,
        outcome: &ExecutionOutcome,
    ) -> Result<AuditRecord, AuditStoreError> {
        let recorded_at_ms = self.clock.epoch_ms();
        let recorded_at = chrono::DateTime::from_timestamp_millis(recorded_at_ms as i64)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default();
        let record = AuditRecord {
            program_id: id.clone(),
            recorded_at_ms,
            recorded_at,
            status: outcome.status,
            output: outcome.output.clone(),
        };
        self.log
            .lock()
            .append(&record)
            .map_err(|e| AuditStoreError::WriteFailed(e.to_string()))?;
        Ok(record)
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{AuditRecord, AuditStore, AuditStoreError, ExecutionOutcome, ProgramId};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct FakeAuditStoreState {
        records: Vec<AuditRecord>,
        fail_with: Option<String>,
    }

    /// Fake audit store for testing: records writes in memory and can
    /// be primed to fail.
    #[derive(Clone)]
    pub struct FakeAuditStore {
        inner: Arc<Mutex<FakeAuditStoreState>>,
    }

    impl FakeAuditStore {
        pub fn new() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeAuditStoreState {
                    records: Vec::new(),
                    fail_with: None,
                })),
            }
        }

        /// Make every subsequent write fail with `reason`.
        pub fn fail_with(&self, reason: impl Into<String>) {
            self.inner.lock().fail_with = Some(reason.into());
        }

        /// Records written so far, in order.
        pub fn records(&self) -> Vec<AuditRecord> {
            self.inner.lock().records.clone()
        }
    }

    impl Default for FakeAuditStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl AuditStore for FakeAuditStore {
        async fn record(
            &self,
            id: &ProgramId,
            outcome: &ExecutionOutcome,
        ) -> Result<AuditRecord, AuditStoreError> {
            let mut state = self.inner.lock();
            if let Some(reason) = &state.fail_with {
                return Err(AuditStoreError::WriteFailed(reason.clone()));
            }
            let record = AuditRecord {
                program_id: id.clone(),
                recorded_at_ms: 1_000_000,
                recorded_at: "1970-01-01T00:16:40+00:00".to_string(),
                status: outcome.status,
                output: outcome.output.clone(),
            };
            state.records.push(record.clone());
            Ok(record)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAuditStore;

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
