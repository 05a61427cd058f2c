// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! imago-engine: the memory image runtime
//!
//! A `MemoryImage` owns a single in-memory system value, a journal, and a
//! codec. Construction replays the journal to rebuild the system; after
//! that, every mutation passes through `execute`, which serializes
//! transaction application with the corresponding durable write.

pub mod error;
pub mod image;

pub use error::{ImageError, ReplayError};
pub use image::MemoryImage;
