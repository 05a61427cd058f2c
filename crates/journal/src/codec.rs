// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transaction codec
//!
//! The codec is the seam between typed transactions and durable records.
//! A record names its concrete transaction type in the `kind` field, and
//! decoding resolves that tag through an explicit registry: a kind that
//! was never registered is an error, not a dynamically loaded type.

use std::collections::HashMap;

use thiserror::Error;

use imago_core::{Replayable, Transaction};

use crate::record::Record;

/// Errors from encoding or decoding transactions
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unknown transaction kind: {0}")]
    UnknownKind(String),
    #[error("encode error for kind {kind}: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("decode error for kind {kind}: {source}")]
    Decode {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Bijective mapping between typed transactions and record bodies,
/// preserving concrete type identity across the durability boundary.
pub trait Codec<S> {
    /// Encode a transaction into a record body.
    fn encode<T: Transaction<S>>(&self, transaction: &T) -> Result<serde_json::Value, CodecError>;

    /// Decode a record back into the concrete transaction it was encoded
    /// from, behind the erased replay view.
    fn decode(&self, record: &Record) -> Result<Box<dyn Replayable<S>>, CodecError>;
}

type DecodeFn<S> = fn(serde_json::Value) -> Result<Box<dyn Replayable<S>>, serde_json::Error>;

fn decode_into<S, T: Transaction<S>>(
    body: serde_json::Value,
) -> Result<Box<dyn Replayable<S>>, serde_json::Error> {
    let transaction: T = serde_json::from_value(body)?;
    Ok(Box::new(transaction))
}

/// JSON codec with an explicit registry of known transaction kinds.
///
/// Both directions consult the registry: decoding an unregistered kind
/// fails, and so does encoding one, so a journal written through this
/// codec never contains a record it could not replay.
#[derive(Debug)]
pub struct JsonCodec<S> {
    decoders: HashMap<&'static str, DecodeFn<S>>,
}

impl<S> JsonCodec<S> {
    /// Create an empty codec.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register a transaction type under its `KIND` tag.
    pub fn register<T: Transaction<S>>(&mut self) {
        self.decoders.insert(T::KIND, decode_into::<S, T>);
    }

    /// Builder-style `register`.
    pub fn with<T: Transaction<S>>(mut self) -> Self {
        self.register::<T>();
        self
    }

    /// Whether a kind tag is registered.
    pub fn is_registered(&self, kind: &str) -> bool {
        self.decoders.contains_key(kind)
    }
}

impl<S> Default for JsonCodec<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Codec<S> for JsonCodec<S> {
    fn encode<T: Transaction<S>>(&self, transaction: &T) -> Result<serde_json::Value, CodecError> {
        if !self.decoders.contains_key(T::KIND) {
            return Err(CodecError::UnknownKind(T::KIND.to_string()));
        }

        serde_json::to_value(transaction).map_err(|source| CodecError::Encode {
            kind: T::KIND,
            source,
        })
    }

    fn decode(&self, record: &Record) -> Result<Box<dyn Replayable<S>>, CodecError> {
        let decode = self
            .decoders
            .get(record.kind.as_str())
            .ok_or_else(|| CodecError::UnknownKind(record.kind.clone()))?;

        decode(record.body.clone()).map_err(|source| CodecError::Decode {
            kind: record.kind.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
