// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The journal abstraction
//!
//! A journal is a durable, ordered, append-only record store. Records are
//! immutable once written; the journal is only appended to and read from
//! the start. Record order on disk equals append order equals application
//! order.

use thiserror::Error;

use crate::record::Record;

/// Errors from reading or writing a journal
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: u64, reason: String },
    #[error("checksum mismatch at line {line}")]
    ChecksumMismatch { line: u64 },
}

/// Durable, ordered, append-only record store.
pub trait Journal {
    /// Iterator type produced by `read_all`.
    type ReadAll: Iterator<Item = Result<Record, JournalError>>;

    /// Read every record from the start, in write order.
    ///
    /// The iterator is lazy, forward-only, and finite. It is not
    /// restartable; call `read_all` again for a fresh read handle.
    fn read_all(&self) -> Result<Self::ReadAll, JournalError>;

    /// Durably store one record after all previously stored records.
    ///
    /// Assigns and returns the record's sequence number. The record is
    /// flushed before this method returns; no buffering spans calls.
    fn append(&mut self, kind: &str, body: serde_json::Value) -> Result<u64, JournalError>;

    /// Release underlying resources. Best-effort and idempotent; failures
    /// are logged, never raised.
    fn close(&mut self);
}
