//! Common headers shared by every Fabric payload.

use serde::Serialize;

use crate::decode::Decode;
use crate::error::Result;
use crate::identity::Identity;
use crate::proto::common::{self as pb, HeaderType};
use crate::proto::enum_name;
use crate::serde_utils::hex_bytes;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub channel_header: ChannelHeader,
    pub signature_header: SignatureHeader,
}

impl Decode for Header {
    type Proto = pb::Header;
    const LAYER: &'static str = "Header";

    fn from_proto(proto: pb::Header) -> Result<Self> {
        Ok(Header {
            channel_header: ChannelHeader::decode(&proto.channel_header)?,
            signature_header: SignatureHeader::decode(&proto.signature_header)?,
        })
    }
}

/// Seconds and nanoseconds since the Unix epoch, zero when unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl From<prost_types::Timestamp> for Timestamp {
    fn from(ts: prost_types::Timestamp) -> Self {
        Timestamp {
            seconds: ts.seconds,
            nanos: ts.nanos,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelHeader {
    /// Symbolic `HeaderType` name, or the decimal code when unknown
    #[serde(rename = "type")]
    pub header_type: String,
    pub version: i32,
    pub timestamp: Timestamp,
    pub channel_id: String,
    pub tx_id: String,
    pub epoch: u64,
    #[serde(serialize_with = "hex_bytes")]
    pub extension: Vec<u8>,
    #[serde(serialize_with = "hex_bytes")]
    pub tls_cert_hash: Vec<u8>,
}

impl Decode for ChannelHeader {
    type Proto = pb::ChannelHeader;
    const LAYER: &'static str = "ChannelHeader";

    fn from_proto(proto: pb::ChannelHeader) -> Result<Self> {
        let header = ChannelHeader {
            header_type: enum_name::<HeaderType>(proto.r#type),
            version: proto.version,
            timestamp: proto.timestamp.map(Timestamp::from).unwrap_or_default(),
            channel_id: proto.channel_id,
            tx_id: proto.tx_id,
            epoch: proto.epoch,
            extension: proto.extension,
            tls_cert_hash: proto.tls_cert_hash,
        };
        tracing::debug!(
            header_type = %header.header_type,
            channel_id = %header.channel_id,
            tx_id = %header.tx_id,
            "channel header"
        );
        Ok(header)
    }
}

/// Creator identity and replay nonce. Transaction actions reuse the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHeader {
    pub creator: Identity,
    #[serde(serialize_with = "hex_bytes")]
    pub nonce: Vec<u8>,
}

impl Decode for SignatureHeader {
    type Proto = pb::SignatureHeader;
    const LAYER: &'static str = "SignatureHeader";

    fn from_proto(proto: pb::SignatureHeader) -> Result<Self> {
        Ok(SignatureHeader {
            creator: Identity::decode(&proto.creator)?,
            nonce: proto.nonce,
        })
    }
}
