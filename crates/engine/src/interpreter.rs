// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sandboxed interpreter port.
//!
//! The engine depends on this trait, not on a concrete interpreter.
//! Drivers: [`crate::SubprocessInterpreter`] (one process per
//! execution) and `FakeInterpreter` for tests.

use async_trait::async_trait;
use thiserror::Error;

/// Raw capture from one interpreter run.
///
/// `stdout` is everything the program printed before completing or
/// faulting — the capture sink is owned by this one execution, so
/// concurrent runs never share a stream. `fault` is the rendered
/// diagnostic (fault type plus trace) when the program raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCapture {
    pub stdout: String,
    pub fault: Option<String>,
}

impl RunCapture {
    pub fn completed(stdout: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), fault: None }
    }

    pub fn faulted(stdout: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), fault: Some(diagnostic.into()) }
    }
}

/// Errors raised by the interpreter itself, as opposed to faults raised
/// by the program it runs (those are reported via [`RunCapture::fault`]).
#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("failed to launch interpreter '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("interpreter I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port trait for executing source text in an isolated interpreter.
///
/// One call is one execution attempt, run to completion (or deadline).
/// Implementations must capture the program's output stream for the
/// duration of the call only — no state may leak between runs.
#[async_trait]
pub trait Interpreter: Send + Sync {
    async fn run(&self, source: &str) -> Result<RunCapture, InterpreterError>;
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{Interpreter, InterpreterError, RunCapture};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct FakeInterpreterState {
        scripted: HashMap<String, RunCapture>,
        launch_error: Option<String>,
        calls: Vec<String>,
    }

    /// Fake interpreter for testing: returns scripted captures per
    /// source text and records every run.
    #[derive(Clone)]
    pub struct FakeInterpreter {
        inner: Arc<Mutex<FakeInterpreterState>>,
    }

    impl FakeInterpreter {
        pub fn new() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeInterpreterState {
                    scripted: HashMap::new(),
                    launch_error: None,
                    calls: Vec::new(),
                })),
            }
        }

        /// Script the capture returned when `source` is run.
        pub fn script(&self, source: impl Into<String>, capture: RunCapture) {
            self.inner.lock().scripted.insert(source.into(), capture);
        }

        /// Make every subsequent run fail with a launch error.
        pub fn fail_to_launch(&self, message: impl Into<String>) {
            self.inner.lock().launch_error = Some(message.into());
        }

        /// Source texts run so far, in order.
        pub fn calls(&self) -> Vec<String> {
            self.inner.lock().calls.clone()
        }
    }

    impl Default for FakeInterpreter {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Interpreter for FakeInterpreter {
        async fn run(&self, source: &str) -> Result<RunCapture, InterpreterError> {
            let mut state = self.inner.lock();
            state.calls.push(source.to_string());
            if let Some(message) = &state.launch_error {
                return Err(InterpreterError::Launch {
                    command: "fake".to_string(),
                    source: std::io::Error::other(message.clone()),
                });
            }
            Ok(state
                .scripted
                .get(source)
                .cloned()
                .unwrap_or_else(|| RunCapture::completed("")))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeInterpreter;
