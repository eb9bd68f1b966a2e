//! The layer decoder contract shared by every record type.
//!
//! A record is built from its wire message in two steps: `prost` parses the bytes under the
//! layer's schema, then [`Decode::from_proto`] copies scalar fields and hands every nested
//! serialized message to the child record's own [`Decode::decode`].
//!
//! Empty input decodes to the default message, so every layer yields its zero-valued record
//! for zero-length bytes.

use prost::Message;

use crate::error::{FabricError, Result};

pub trait Decode: Sized {
    /// Wire schema for this layer
    type Proto: Message + Default;

    /// Layer name used in errors and trace events
    const LAYER: &'static str;

    fn from_proto(proto: Self::Proto) -> Result<Self>;

    fn decode(bytes: &[u8]) -> Result<Self> {
        let proto = Self::Proto::decode(bytes)
            .map_err(|source| FabricError::malformed_input(Self::LAYER, source))?;
        let record = Self::from_proto(proto)?;
        tracing::debug!(layer = Self::LAYER, len = bytes.len(), "decoded layer");
        Ok(record)
    }
}

/// Convert an optional embedded message, treating absence as the default message.
pub(crate) fn from_optional<T: Decode>(proto: Option<T::Proto>) -> Result<T> {
    T::from_proto(proto.unwrap_or_default())
}

/// Convert a repeated embedded message, preserving order.
pub(crate) fn from_repeated<T: Decode>(protos: Vec<T::Proto>) -> Result<Vec<T>> {
    protos.into_iter().map(T::from_proto).collect()
}
