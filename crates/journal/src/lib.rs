// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! imago-journal: durable journaling for imago memory images
//!
//! The journal is the source of truth: system state is derived by
//! replaying its records in write order.
//!
//! ```text
//! Transaction → Codec → Record → Journal::append → disk (one JSON line)
//!                                                       ↓
//!                            Journal::read_all → Codec::decode → replay
//! ```
//!
//! This crate provides:
//! - `Record`: self-describing, checksummed journal records
//! - `Journal`: the append-only store abstraction, with file-backed and
//!   in-memory implementations
//! - `Codec`: the encode/decode seam preserving concrete transaction
//!   type identity, with a registry-backed JSON implementation

pub mod codec;
pub mod file;
pub mod journal;
pub mod memory;
pub mod record;

pub use codec::{Codec, CodecError, JsonCodec};
pub use file::{FileJournal, FileRecords};
pub use journal::{Journal, JournalError};
pub use memory::MemoryJournal;
pub use record::Record;
