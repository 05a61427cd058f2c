// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The memory image
//!
//! The image is the single source of truth for current state and the sole
//! authority for mutating it. The journal is a complete history: replaying
//! it from an empty system reproduces the live state exactly.
//!
//! Concurrency: system and journal sit behind one reader-writer lock.
//! A transaction holds the write lock across validation, execution, and
//! the journal append, so application order equals journal order. Queries
//! hold the read lock and run concurrently with each other.

use parking_lot::RwLock;

use imago_core::{CommandError, Query, Transaction};
use imago_journal::{Codec, Journal};

use crate::error::{ImageError, ReplayError};

/// In-memory system reconstructed from, and kept in lockstep with, a
/// durable journal of transactions
#[derive(Debug)]
pub struct MemoryImage<S, J, C> {
    inner: RwLock<Inner<S, J>>,
    codec: C,
}

#[derive(Debug)]
struct Inner<S, J> {
    system: S,
    journal: J,
}

impl<S, J, C> MemoryImage<S, J, C>
where
    J: Journal,
    C: Codec<S>,
{
    /// Open a memory image: create the empty system via `bootstrap`, then
    /// replay every journaled transaction in write order against it.
    ///
    /// Fails with `Bootstrap` if the factory fails and with `Replay` if
    /// any record cannot be read, decoded, or re-executed. A corrupt or
    /// inconsistent journal is never partially applied: construction
    /// aborts and no image is returned.
    pub fn open<F>(journal: J, codec: C, bootstrap: F) -> Result<Self, ImageError>
    where
        F: FnOnce() -> Result<S, CommandError>,
    {
        let mut system = bootstrap().map_err(ImageError::Bootstrap)?;

        let records = journal.read_all().map_err(|e| ImageError::Replay {
            sequence: 0,
            source: ReplayError::Read(e),
        })?;

        let mut next_sequence = 0u64;
        let mut replayed = 0u64;
        for result in records {
            let record = result.map_err(|e| ImageError::Replay {
                sequence: next_sequence,
                source: ReplayError::Read(e),
            })?;
            let sequence = record.sequence;

            let transaction = codec.decode(&record).map_err(|e| ImageError::Replay {
                sequence,
                source: ReplayError::Decode(e),
            })?;
            transaction
                .replay(&mut system)
                .map_err(|e| ImageError::Replay {
                    sequence,
                    source: ReplayError::Execute(e),
                })?;

            next_sequence = sequence + 1;
            replayed += 1;
        }

        tracing::info!(replayed, "memory image restored from journal");

        Ok(Self {
            inner: RwLock::new(Inner { system, journal }),
            codec,
        })
    }

    /// Execute a transaction and journal it.
    ///
    /// Validation, execution, encoding, and the durable append happen
    /// under one exclusive lock, so the mutation and its record are a
    /// single atomic unit with respect to other commands.
    ///
    /// A `Rejected` error means the transaction's own logic refused:
    /// nothing was journaled, and a validation failure additionally
    /// guarantees the system is untouched. A `Codec` or `Journal` error
    /// means the in-memory mutation succeeded but was not recorded; the
    /// divergence is reported to the caller, not repaired.
    pub fn execute<T>(&self, transaction: T) -> Result<T::Output, ImageError>
    where
        T: Transaction<S>,
    {
        let mut inner = self.inner.write();
        let Inner { system, journal } = &mut *inner;

        transaction.validate(system)?;
        let output = transaction.execute(system)?;

        let body = match self.codec.encode(&transaction) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(kind = T::KIND, error = %e, "transaction applied in memory but not journaled");
                return Err(e.into());
            }
        };
        match journal.append(T::KIND, body) {
            Ok(sequence) => {
                tracing::debug!(kind = T::KIND, sequence, "transaction journaled");
                Ok(output)
            }
            Err(e) => {
                tracing::warn!(kind = T::KIND, error = %e, "transaction applied in memory but not journaled");
                Err(e.into())
            }
        }
    }

    /// Evaluate a query against current state.
    ///
    /// Queries are never journaled. They see only fully-applied
    /// transaction state and run concurrently with other queries.
    pub fn query<Q>(&self, query: Q) -> Result<Q::Output, ImageError>
    where
        Q: Query<S>,
    {
        let inner = self.inner.read();
        query.execute(&inner.system).map_err(ImageError::Rejected)
    }

    /// Flush and release the journal. Best-effort and idempotent.
    pub fn close(&self) {
        self.inner.write().journal.close();
    }
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
