// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable audit record of one execution attempt.

use crate::outcome::RunStatus;
use crate::program::ProgramId;
use serde::{Deserialize, Serialize};

/// One line in the append-only audit log.
///
/// Created exactly once per execution attempt, immediately after the
/// outcome is known. The timestamp is assigned by the audit store at
/// write time, not by the caller, so records from different components
/// never disagree on clock. Records are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub program_id: ProgramId,
    /// Store-assigned write time, milliseconds since the Unix epoch.
    pub recorded_at_ms: u64,
    /// RFC 3339 rendering of `recorded_at_ms`.
    pub recorded_at: String,
    pub status: RunStatus,
    pub output: String,
}
