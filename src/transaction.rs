//! Transaction data: the list of endorsed chaincode actions.

use serde::Serialize;

use crate::chaincode::{ChaincodeEndorsedAction, ChaincodeProposalPayload};
use crate::decode::{from_optional, from_repeated, Decode};
use crate::error::Result;
use crate::header::SignatureHeader;
use crate::proto::peer as pb;

/// Body of an endorser transaction payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    pub actions: Vec<TransactionAction>,
}

impl Decode for Data {
    type Proto = pb::Transaction;
    const LAYER: &'static str = "Transaction";

    fn from_proto(proto: pb::Transaction) -> Result<Self> {
        tracing::debug!(actions = proto.actions.len(), "transaction");
        Ok(Data {
            actions: from_repeated(proto.actions)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAction {
    pub header: SignatureHeader,
    pub payload: ChaincodeActionPayload,
}

impl Decode for TransactionAction {
    type Proto = pb::TransactionAction;
    const LAYER: &'static str = "TransactionAction";

    fn from_proto(proto: pb::TransactionAction) -> Result<Self> {
        Ok(TransactionAction {
            header: SignatureHeader::decode(&proto.header)?,
            payload: ChaincodeActionPayload::decode(&proto.payload)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaincodeActionPayload {
    pub proposal_payload: ChaincodeProposalPayload,
    pub endorsed_action: ChaincodeEndorsedAction,
}

impl Decode for ChaincodeActionPayload {
    type Proto = pb::ChaincodeActionPayload;
    const LAYER: &'static str = "ChaincodeActionPayload";

    fn from_proto(proto: pb::ChaincodeActionPayload) -> Result<Self> {
        Ok(ChaincodeActionPayload {
            proposal_payload: ChaincodeProposalPayload::decode(&proto.chaincode_proposal_payload)?,
            endorsed_action: from_optional(proto.action)?,
        })
    }
}
