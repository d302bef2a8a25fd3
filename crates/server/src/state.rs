// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared handler context.

use std::sync::Arc;

use parking_lot::Mutex;
use runpad_engine::RunPipeline;
use runpad_storage::AuditLog;

/// Shared context for all request handlers.
pub struct AppState {
    pub pipeline: RunPipeline,
    /// Same log the pipeline's audit store writes to; handlers read it
    /// for the run-history endpoint.
    pub audit_log: Arc<Mutex<AuditLog>>,
}

impl AppState {
    pub fn new(pipeline: RunPipeline, audit_log: Arc<Mutex<AuditLog>>) -> Arc<Self> {
        Arc::new(Self { pipeline, audit_log })
    }
}
