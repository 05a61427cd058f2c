// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command contracts executed against the in-memory system
//!
//! A system is an application-defined value mutated only through
//! transactions. Transactions are plain data values so they can be
//! journaled and replayed; queries read state and are never journaled.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CommandError;

/// A durable, replayable unit of work that may mutate the system.
///
/// Execution must be deterministic: given the same system state and the
/// same transaction value, replay must produce the same resulting state.
/// Implementations must not read wall-clock time, randomness, or external
/// I/O inside `execute`.
pub trait Transaction<S>: Serialize + DeserializeOwned + Send + 'static {
    /// Result produced on successful execution.
    type Output;

    /// Stable discriminator stored in each journal record.
    ///
    /// Must be unique among all transaction types registered with a codec;
    /// changing it orphans previously journaled records.
    const KIND: &'static str;

    /// Check preconditions against the current system without mutating it.
    ///
    /// Runs before `execute`; a failure here leaves the system untouched
    /// and nothing journaled.
    fn validate(&self, _system: &S) -> Result<(), CommandError> {
        Ok(())
    }

    /// Apply this transaction to the system.
    fn execute(&self, system: &mut S) -> Result<Self::Output, CommandError>;
}

/// A read-only unit of work against the system; never journaled.
///
/// Queries receive `&S`, so mutation is ruled out by the type system
/// rather than by convention.
pub trait Query<S> {
    /// Result produced on successful execution.
    type Output;

    /// Evaluate this query against the system.
    fn execute(&self, system: &S) -> Result<Self::Output, CommandError>;
}

/// Object-safe view of a transaction whose concrete type is known only to
/// the decoder that produced it.
///
/// During journal replay the engine sees records, not types; the codec
/// resolves each record's kind tag to the original transaction type and
/// returns it behind this trait. Replay re-runs validation and execution
/// and discards the output.
pub trait Replayable<S> {
    /// Re-apply this transaction to the system.
    fn replay(&self, system: &mut S) -> Result<(), CommandError>;
}

impl<S, T: Transaction<S>> Replayable<S> for T {
    fn replay(&self, system: &mut S) -> Result<(), CommandError> {
        self.validate(system)?;
        self.execute(system)?;
        Ok(())
    }
}

impl<S> std::fmt::Debug for dyn Replayable<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("dyn Replayable").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
