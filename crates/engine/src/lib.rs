// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! runpad-engine: the execution-and-audit pipeline.
//!
//! One request flows linearly through three components: the resolver
//! maps a program identifier to source text, the execution engine runs
//! that source in an isolated interpreter under output capture, and the
//! audit recorder writes the classified outcome to the append-only
//! audit store. A persistence failure annotates the result; it never
//! destroys it.

pub mod executor;
pub mod interpreter;
pub mod pipeline;
pub mod recorder;
pub mod registry;
pub mod subprocess;

pub use executor::ExecutionEngine;
pub use interpreter::{Interpreter, InterpreterError, RunCapture};
pub use pipeline::{RunError, RunPipeline, RunReport, AUDIT_FAILURE_DELIMITER};
pub use recorder::{AuditRecorder, AuditStore, AuditStoreError, LogAuditStore, RecordResult};
pub use registry::{builtin, ProgramRegistry, StaticRegistry};
pub use subprocess::SubprocessInterpreter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use interpreter::FakeInterpreter;
#[cfg(any(test, feature = "test-support"))]
pub use recorder::FakeAuditStore;
