// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the server crate.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::ConfigError;

/// Default listen address when neither flag nor env is set.
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8700";

/// Listen address override (`RUNPAD_HTTP_ADDR`).
pub fn http_addr() -> Option<String> {
    std::env::var("RUNPAD_HTTP_ADDR").ok().filter(|s| !s.is_empty())
}

/// Resolve state directory: RUNPAD_STATE_DIR > XDG_STATE_HOME/runpad > ~/.local/state/runpad
pub fn state_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var("RUNPAD_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("runpad"));
    }
    let home = std::env::var("HOME").map_err(|_| ConfigError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local/state/runpad"))
}

/// Interpreter binary override (`RUNPAD_PYTHON_BIN`, default `python3`).
pub fn python_bin() -> String {
    std::env::var("RUNPAD_PYTHON_BIN")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "python3".to_string())
}

/// Execution deadline override (`RUNPAD_EXEC_TIMEOUT_MS`).
pub fn exec_timeout() -> Option<Duration> {
    std::env::var("RUNPAD_EXEC_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
