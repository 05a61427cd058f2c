// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed journal
//!
//! Records are stored as one JSON object per line in an append-only file.
//! The write handle is opened lazily on first append and every append is
//! fsync'd before returning. Reads open an independent handle per call, so
//! a journal can be read while its write handle is open.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::journal::{Journal, JournalError};
use crate::record::Record;

/// Append-only journal stored as a JSON-lines file
#[derive(Debug)]
pub struct FileJournal {
    path: PathBuf,
    /// Write handle, opened on first append
    writer: Option<File>,
    /// Next sequence number, recovered from the file on first append
    next_sequence: Option<u64>,
}

impl FileJournal {
    /// Open a journal at the given path.
    ///
    /// Creates parent directories but not the file itself; the file is
    /// created on first append.
    pub fn open(path: &Path) -> Result<Self, JournalError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            writer: None,
            next_sequence: None,
        })
    }

    /// Get the path to the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scan the file to find the sequence number after the last record.
    ///
    /// A record that cannot be parsed or verified is an error: appending
    /// after unreadable history would silently fork it.
    fn scan_next_sequence(path: &Path) -> Result<u64, JournalError> {
        if !path.exists() {
            return Ok(0);
        }

        let reader = BufReader::new(File::open(path)?);
        let mut next = 0u64;
        let mut line_number = 0u64;

        for line in reader.lines() {
            let line = line?;
            line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let record = Record::from_line(trimmed).map_err(|e| JournalError::Malformed {
                line: line_number,
                reason: e.to_string(),
            })?;
            if !record.verify() {
                return Err(JournalError::ChecksumMismatch { line: line_number });
            }

            next = record.sequence + 1;
        }

        Ok(next)
    }
}

impl Journal for FileJournal {
    type ReadAll = FileRecords;

    fn read_all(&self) -> Result<FileRecords, JournalError> {
        FileRecords::open(&self.path)
    }

    fn append(&mut self, kind: &str, body: serde_json::Value) -> Result<u64, JournalError> {
        let sequence = match self.next_sequence {
            Some(next) => next,
            None => Self::scan_next_sequence(&self.path)?,
        };

        if self.writer.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            self.writer = Some(file);
        }
        let Some(file) = self.writer.as_mut() else {
            return Err(JournalError::Io(std::io::Error::other(
                "journal write handle unavailable",
            )));
        };

        let record = Record::new(sequence, kind, body);
        let line = record.to_line()?;

        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;

        // Durability boundary: the caller must not observe an unflushed append
        file.sync_all()?;

        self.next_sequence = Some(sequence + 1);
        Ok(sequence)
    }

    fn close(&mut self) {
        if let Some(file) = self.writer.take() {
            if let Err(e) = file.sync_all() {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to flush journal on close");
            }
        }
    }
}

impl Drop for FileJournal {
    fn drop(&mut self) {
        self.close();
    }
}

/// Iterator over the records of a journal file
pub struct FileRecords {
    reader: Option<BufReader<File>>,
    line_number: u64,
}

impl FileRecords {
    fn open(path: &Path) -> Result<Self, JournalError> {
        let reader = if path.exists() {
            Some(BufReader::new(File::open(path)?))
        } else {
            None
        };

        Ok(Self {
            reader,
            line_number: 0,
        })
    }
}

impl Iterator for FileRecords {
    type Item = Result<Record, JournalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;

        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_number += 1;

                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    let record = match Record::from_line(trimmed) {
                        Ok(r) => r,
                        Err(e) => {
                            return Some(Err(JournalError::Malformed {
                                line: self.line_number,
                                reason: e.to_string(),
                            }));
                        }
                    };

                    if !record.verify() {
                        return Some(Err(JournalError::ChecksumMismatch {
                            line: self.line_number,
                        }));
                    }

                    return Some(Ok(record));
                }
                Err(e) => return Some(Err(JournalError::Io(e))),
            }
        }
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
