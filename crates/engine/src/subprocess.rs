// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess-backed interpreter driver.
//!
//! Each execution spawns a fresh interpreter process, feeds the source
//! via stdin, and captures stdout/stderr through pipes owned by that
//! one run. Capture is therefore request-local by construction: two
//! concurrent executions can never observe each other's output.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::interpreter::{Interpreter, InterpreterError, RunCapture};

/// Default execution deadline. A runaway program is killed at the
/// deadline and reported as a timeout fault.
pub const DEFAULT_EXEC_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs source text by piping it to an interpreter command.
///
/// The default configuration targets `python3 -` (read the program from
/// stdin), matching the snippets the built-in registry carries.
#[derive(Debug, Clone)]
pub struct SubprocessInterpreter {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl SubprocessInterpreter {
    pub fn new(command: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout: DEFAULT_EXEC_TIMEOUT,
        }
    }

    /// Python interpreter reading the program from stdin.
    pub fn python(bin: impl Into<String>) -> Self {
        Self::new(bin, ["-"])
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Interpreter for SubprocessInterpreter {
    async fn run(&self, source: &str) -> Result<RunCapture, InterpreterError> {
        let mut process = tokio::process::Command::new(&self.command);
        process
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the wait future at the deadline must not leave
            // an orphaned interpreter behind.
            .kill_on_drop(true);

        let mut child = process.spawn().map_err(|source| InterpreterError::Launch {
            command: self.command.clone(),
            source,
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes()).await?;
            drop(stdin); // close pipe to signal EOF
        }

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    command = %self.command,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "execution deadline expired, interpreter killed"
                );
                return Ok(RunCapture::faulted(
                    String::new(),
                    format!(
                        "Timeout: execution exceeded the {}ms deadline and was terminated",
                        self.timeout.as_millis()
                    ),
                ));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(RunCapture::completed(stdout));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = if stderr.trim().is_empty() {
            format!(
                "interpreter exited with status {}",
                output.status.code().unwrap_or(-1)
            )
        } else {
            stderr.into_owned()
        };
        Ok(RunCapture::faulted(stdout, diagnostic))
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
