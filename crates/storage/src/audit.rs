// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only audit log: one JSON record per line.
//!
//! Records are only ever appended, never rewritten or deleted. Each
//! append is flushed before returning so a record that was acknowledged
//! is on disk.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use runpad_core::AuditRecord;
use thiserror::Error;

/// Errors from audit log operations.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit log I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("audit record serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only log of [`AuditRecord`]s backed by a JSONL file.
pub struct AuditLog {
    path: PathBuf,
    writer: BufWriter<File>,
    appended: u64,
}

impl AuditLog {
    /// Open (or create) the log at `path`. Existing records are kept;
    /// new appends go to the end.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            appended: 0,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records appended through this handle.
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Append one record and flush it to disk.
    pub fn append(&mut self, record: &AuditRecord) -> Result<(), AuditError> {
        let line = serde_json::to_string(record)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.appended += 1;
        Ok(())
    }

    /// Read every record in the log, oldest first.
    ///
    /// Lines that fail to parse (a torn write from a crash mid-append)
    /// are skipped with a warning rather than failing the whole read.
    pub fn read_all(&self) -> Result<Vec<AuditRecord>, AuditError> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<AuditRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(line = line_no + 1, error = %e, "skipping corrupt audit record");
                }
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
