// ABOUTME: Byte-oriented key-value persistence for Long Drive Log
// ABOUTME: Store trait with in-memory and JSON-file backends, plus value codecs

use std::path::PathBuf;
use thiserror::Error;

pub mod codec;
pub mod file_store;
pub mod store;

pub use codec::{Codec, CodecError, JsonCodec};
pub use file_store::FileStore;
pub use store::{KeyValueStore, MemoryStore};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed store file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported store file version: {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid payload for key '{key}': {source}")]
    InvalidPayload {
        key: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
