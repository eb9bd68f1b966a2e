//! Chaincode proposal, endorsement and execution result records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::decode::{from_optional, from_repeated, Decode};
use crate::error::Result;
use crate::identity::Identity;
use crate::proto::enum_name;
use crate::proto::peer::{self as pb, chaincode_spec};
use crate::rwset::ReadWriteSet;
use crate::serde_utils::{hex_bytes, hex_bytes_map};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaincodeId {
    pub name: String,
    pub version: String,
    pub path: String,
}

impl Decode for ChaincodeId {
    type Proto = pb::ChaincodeId;
    const LAYER: &'static str = "ChaincodeID";

    fn from_proto(proto: pb::ChaincodeId) -> Result<Self> {
        Ok(ChaincodeId {
            name: proto.name,
            version: proto.version,
            path: proto.path,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaincodeInput {
    /// Invocation arguments decoded as UTF-8, invalid sequences replaced with U+FFFD
    pub args: Vec<String>,
    #[serde(serialize_with = "hex_bytes_map")]
    pub decorations: BTreeMap<String, Vec<u8>>,
    pub is_init: bool,
}

impl Decode for ChaincodeInput {
    type Proto = pb::ChaincodeInput;
    const LAYER: &'static str = "ChaincodeInput";

    fn from_proto(proto: pb::ChaincodeInput) -> Result<Self> {
        let args = proto
            .args
            .iter()
            .map(|arg| String::from_utf8_lossy(arg).into_owned())
            .collect();
        Ok(ChaincodeInput {
            args,
            decorations: proto.decorations.into_iter().collect(),
            is_init: proto.is_init,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaincodeSpec {
    /// Symbolic chaincode language (`GOLANG`, `NODE`, ...)
    #[serde(rename = "type")]
    pub chaincode_type: String,
    pub chaincode_id: ChaincodeId,
    pub input: ChaincodeInput,
    pub timeout: i32,
}

impl Decode for ChaincodeSpec {
    type Proto = pb::ChaincodeSpec;
    const LAYER: &'static str = "ChaincodeSpec";

    fn from_proto(proto: pb::ChaincodeSpec) -> Result<Self> {
        Ok(ChaincodeSpec {
            chaincode_type: enum_name::<chaincode_spec::Type>(proto.r#type),
            chaincode_id: from_optional(proto.chaincode_id)?,
            input: from_optional(proto.input)?,
            timeout: proto.timeout,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaincodeInvocationSpec {
    pub chaincode_spec: ChaincodeSpec,
}

impl Decode for ChaincodeInvocationSpec {
    type Proto = pb::ChaincodeInvocationSpec;
    const LAYER: &'static str = "ChaincodeInvocationSpec";

    fn from_proto(proto: pb::ChaincodeInvocationSpec) -> Result<Self> {
        let spec: ChaincodeSpec = from_optional(proto.chaincode_spec)?;
        tracing::debug!(
            chaincode = %spec.chaincode_id.name,
            args = spec.input.args.len(),
            "chaincode invocation"
        );
        Ok(ChaincodeInvocationSpec {
            chaincode_spec: spec,
        })
    }
}

/// The client's proposal as committed with the transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaincodeProposalPayload {
    pub input: ChaincodeInvocationSpec,
    /// Usually empty on the ledger, peers strip it before ordering
    #[serde(serialize_with = "hex_bytes_map")]
    pub transient_map: BTreeMap<String, Vec<u8>>,
}

impl Decode for ChaincodeProposalPayload {
    type Proto = pb::ChaincodeProposalPayload;
    const LAYER: &'static str = "ChaincodeProposalPayload";

    fn from_proto(proto: pb::ChaincodeProposalPayload) -> Result<Self> {
        Ok(ChaincodeProposalPayload {
            input: ChaincodeInvocationSpec::decode(&proto.input)?,
            transient_map: proto.transient_map.into_iter().collect(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaincodeEvent {
    pub chaincode_id: String,
    pub tx_id: String,
    pub event_name: String,
    #[serde(serialize_with = "hex_bytes")]
    pub payload: Vec<u8>,
}

impl Decode for ChaincodeEvent {
    type Proto = pb::ChaincodeEvent;
    const LAYER: &'static str = "ChaincodeEvent";

    fn from_proto(proto: pb::ChaincodeEvent) -> Result<Self> {
        Ok(ChaincodeEvent {
            chaincode_id: proto.chaincode_id,
            tx_id: proto.tx_id,
            event_name: proto.event_name,
            payload: proto.payload,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP-like status code, 200 on success
    pub status: i32,
    pub message: String,
    #[serde(serialize_with = "hex_bytes")]
    pub payload: Vec<u8>,
}

impl Decode for Response {
    type Proto = pb::Response;
    const LAYER: &'static str = "Response";

    fn from_proto(proto: pb::Response) -> Result<Self> {
        Ok(Response {
            status: proto.status,
            message: proto.message,
            payload: proto.payload,
        })
    }
}

/// What the chaincode did during simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaincodeAction {
    pub results: ReadWriteSet,
    pub events: ChaincodeEvent,
    pub response: Response,
    pub chaincode_id: ChaincodeId,
}

impl Decode for ChaincodeAction {
    type Proto = pb::ChaincodeAction;
    const LAYER: &'static str = "ChaincodeAction";

    fn from_proto(proto: pb::ChaincodeAction) -> Result<Self> {
        Ok(ChaincodeAction {
            results: ReadWriteSet::decode(&proto.results)?,
            events: ChaincodeEvent::decode(&proto.events)?,
            response: from_optional(proto.response)?,
            chaincode_id: from_optional(proto.chaincode_id)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalResponsePayload {
    #[serde(serialize_with = "hex_bytes")]
    pub proposal_hash: Vec<u8>,
    /// Decoded from the payload's `extension` bytes
    pub chaincode_action: ChaincodeAction,
}

impl Decode for ProposalResponsePayload {
    type Proto = pb::ProposalResponsePayload;
    const LAYER: &'static str = "ProposalResponsePayload";

    fn from_proto(proto: pb::ProposalResponsePayload) -> Result<Self> {
        Ok(ProposalResponsePayload {
            chaincode_action: ChaincodeAction::decode(&proto.extension)?,
            proposal_hash: proto.proposal_hash,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endorsement {
    pub endorser: Identity,
    #[serde(serialize_with = "hex_bytes")]
    pub signature: Vec<u8>,
}

impl Decode for Endorsement {
    type Proto = pb::Endorsement;
    const LAYER: &'static str = "Endorsement";

    fn from_proto(proto: pb::Endorsement) -> Result<Self> {
        Ok(Endorsement {
            endorser: Identity::decode(&proto.endorser)?,
            signature: proto.signature,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaincodeEndorsedAction {
    pub proposal_response_payload: ProposalResponsePayload,
    pub endorsements: Vec<Endorsement>,
}

impl Decode for ChaincodeEndorsedAction {
    type Proto = pb::ChaincodeEndorsedAction;
    const LAYER: &'static str = "ChaincodeEndorsedAction";

    fn from_proto(proto: pb::ChaincodeEndorsedAction) -> Result<Self> {
        let action = ChaincodeEndorsedAction {
            proposal_response_payload: ProposalResponsePayload::decode(
                &proto.proposal_response_payload,
            )?,
            endorsements: from_repeated(proto.endorsements)?,
        };
        tracing::debug!(endorsements = action.endorsements.len(), "endorsed action");
        Ok(action)
    }
}
