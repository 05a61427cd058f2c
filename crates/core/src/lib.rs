// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! imago-core: command model for the imago memory image engine
//!
//! This crate provides:
//! - The `Transaction` and `Query` contracts executed against a system
//! - The erased `Replayable` view used when rebuilding state from a journal
//! - The domain-level `CommandError` raised by command logic

pub mod command;
pub mod error;

pub use command::{Query, Replayable, Transaction};
pub use error::CommandError;
