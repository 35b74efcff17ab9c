// ABOUTME: Value codecs turning typed settings into stored bytes and back
// ABOUTME: JSON via serde_json is the default encoding

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Empty payload")]
    Empty,

    #[error("Failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode value: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Converts values to and from the bytes kept in a [`KeyValueStore`](crate::KeyValueStore)
pub trait Codec {
    fn encode<V>(&self, value: &V) -> Result<Vec<u8>, CodecError>
    where
        V: Serialize + ?Sized;

    fn decode<V>(&self, bytes: &[u8]) -> Result<V, CodecError>
    where
        V: DeserializeOwned;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<V>(&self, value: &V) -> Result<Vec<u8>, CodecError>
    where
        V: Serialize + ?Sized,
    {
        serde_json::to_vec(value).map_err(CodecError::Encode)
    }

    fn decode<V>(&self, bytes: &[u8]) -> Result<V, CodecError>
    where
        V: DeserializeOwned,
    {
        if bytes.is_empty() {
            return Err(CodecError::Empty);
        }
        serde_json::from_slice(bytes).map_err(CodecError::Decode)
    }
}
