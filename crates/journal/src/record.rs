// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journal record structure with checksum verification
//!
//! Each record carries a sequence number, the concrete transaction kind,
//! the transaction's serialized fields, and a CRC32 checksum so truncated
//! writes and bit flips are detected on read.

use serde::{Deserialize, Serialize};

/// A single record in the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Monotonically increasing sequence number
    pub sequence: u64,
    /// Discriminator naming the concrete transaction type
    pub kind: String,
    /// The transaction's serialized fields
    pub body: serde_json::Value,
    /// CRC32 checksum of the serialized body
    pub checksum: u32,
}

impl Record {
    /// Create a record with a computed checksum.
    pub fn new(sequence: u64, kind: impl Into<String>, body: serde_json::Value) -> Self {
        let checksum = Self::body_checksum(&body);
        Self {
            sequence,
            kind: kind.into(),
            body,
            checksum,
        }
    }

    /// Calculate the CRC32 checksum of a record body.
    ///
    /// serde_json renders object keys in sorted order, so the checksum is
    /// stable across a decode/encode round trip.
    fn body_checksum(body: &serde_json::Value) -> u32 {
        let json = serde_json::to_string(body).unwrap_or_else(|_| String::new());
        crc32fast::hash(json.as_bytes())
    }

    /// Verify the checksum matches the body.
    pub fn verify(&self) -> bool {
        self.checksum == Self::body_checksum(&self.body)
    }

    /// Serialize to newline-delimited JSON (one line).
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a single line of JSON.
    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
