// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the memory image runtime

use thiserror::Error;

use imago_core::CommandError;
use imago_journal::{CodecError, JournalError};

/// Errors from constructing or operating a memory image
#[derive(Debug, Error)]
pub enum ImageError {
    /// The system factory failed; the image cannot start.
    #[error("system bootstrap failed: {0}")]
    Bootstrap(#[source] CommandError),
    /// A journaled record could not be read, decoded, or re-executed; the
    /// image cannot start.
    #[error("replay failed at sequence {sequence}: {source}")]
    Replay {
        sequence: u64,
        #[source]
        source: ReplayError,
    },
    /// A command's own logic rejected the operation; the image remains
    /// usable and nothing was journaled.
    #[error("command rejected: {0}")]
    Rejected(#[from] CommandError),
    /// A transaction could not be encoded or a record decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// The durable medium could not be read or written.
    #[error(transparent)]
    Journal(#[from] JournalError),
}

/// Why replay of a single record failed
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("journal read: {0}")]
    Read(#[from] JournalError),
    #[error("record decode: {0}")]
    Decode(#[from] CodecError),
    #[error("transaction re-execution: {0}")]
    Execute(#[from] CommandError),
}
