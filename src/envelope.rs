//! The outermost layers: processed transaction, envelope and payload.

use serde::Serialize;

use crate::decode::{from_optional, Decode};
use crate::error::Result;
use crate::header::Header;
use crate::proto::common as pb;
use crate::proto::enum_name;
use crate::proto::peer::{self as peer_pb, TxValidationCode};
use crate::serde_utils::hex_bytes;
use crate::transaction::Data;

/// A committed transaction together with the peer's validation verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedTransaction {
    /// Raw `TxValidationCode`, see [`ProcessedTransaction::validation_code_name`]
    pub validation_code: i32,
    pub transaction_envelope: TransactionEnvelope,
}

impl ProcessedTransaction {
    /// Symbolic validation code (`VALID`, `MVCC_READ_CONFLICT`, ...), decimal when unknown.
    pub fn validation_code_name(&self) -> String {
        enum_name::<TxValidationCode>(self.validation_code)
    }
}

impl Decode for ProcessedTransaction {
    type Proto = peer_pb::ProcessedTransaction;
    const LAYER: &'static str = "ProcessedTransaction";

    fn from_proto(proto: peer_pb::ProcessedTransaction) -> Result<Self> {
        let tx = ProcessedTransaction {
            validation_code: proto.validation_code,
            transaction_envelope: from_optional(proto.transaction_envelope)?,
        };
        tracing::debug!(
            validation_code = %tx.validation_code_name(),
            "processed transaction"
        );
        Ok(tx)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEnvelope {
    pub payload: Payload,
    /// Creator's signature over the payload bytes, never verified here
    #[serde(serialize_with = "hex_bytes")]
    pub signature: Vec<u8>,
}

impl Decode for TransactionEnvelope {
    type Proto = pb::Envelope;
    const LAYER: &'static str = "Envelope";

    fn from_proto(proto: pb::Envelope) -> Result<Self> {
        Ok(TransactionEnvelope {
            payload: Payload::decode(&proto.payload)?,
            signature: proto.signature,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub header: Header,
    pub data: Data,
}

impl Decode for Payload {
    type Proto = pb::Payload;
    const LAYER: &'static str = "Payload";

    fn from_proto(proto: pb::Payload) -> Result<Self> {
        Ok(Payload {
            header: from_optional(proto.header)?,
            data: Data::decode(&proto.data)?,
        })
    }
}
