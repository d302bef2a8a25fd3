// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Program table loading.
//!
//! `programs.toml` maps identifiers to source text:
//!
//! ```toml
//! [programs]
//! "day1/hello_world.py" = "print('hello')"
//! ```
//!
//! The table is read once at startup; there is no dynamic reloading.

use std::collections::HashMap;
use std::path::Path;

use runpad_engine::StaticRegistry;
use serde::Deserialize;
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("no state directory: RUNPAD_STATE_DIR, XDG_STATE_HOME, and HOME are all unset")]
    NoStateDir,
}

#[derive(Debug, Deserialize)]
struct ProgramsFile {
    #[serde(default)]
    programs: HashMap<String, String>,
}

/// Load a registry from a `programs.toml` file.
pub fn load_programs(path: impl AsRef<Path>) -> Result<StaticRegistry, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let file: ProgramsFile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(StaticRegistry::from_table(file.programs))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
