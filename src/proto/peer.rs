//! `peer` package: transactions, proposals and chaincode messages.

use std::collections::HashMap;

use prost::{Enumeration, Message};

use super::common::Envelope;
use super::EnumName;

/// A transaction as returned by the ledger query `GetTransactionByID`.
#[derive(Clone, PartialEq, Message)]
pub struct ProcessedTransaction {
    #[prost(message, optional, tag = "1")]
    pub transaction_envelope: Option<Envelope>,
    /// A `TxValidationCode` value
    #[prost(int32, tag = "2")]
    pub validation_code: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct Transaction {
    #[prost(message, repeated, tag = "1")]
    pub actions: Vec<TransactionAction>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TransactionAction {
    /// Marshalled `common::SignatureHeader`
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    /// Marshalled `ChaincodeActionPayload`
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeActionPayload {
    /// Marshalled `ChaincodeProposalPayload`
    #[prost(bytes = "vec", tag = "1")]
    pub chaincode_proposal_payload: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub action: Option<ChaincodeEndorsedAction>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeProposalPayload {
    /// Marshalled `ChaincodeInvocationSpec`
    #[prost(bytes = "vec", tag = "1")]
    pub input: Vec<u8>,
    #[prost(map = "string, bytes", tag = "2")]
    pub transient_map: HashMap<String, Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeInvocationSpec {
    #[prost(message, optional, tag = "1")]
    pub chaincode_spec: Option<ChaincodeSpec>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeSpec {
    #[prost(enumeration = "chaincode_spec::Type", tag = "1")]
    pub r#type: i32,
    #[prost(message, optional, tag = "2")]
    pub chaincode_id: Option<ChaincodeId>,
    #[prost(message, optional, tag = "3")]
    pub input: Option<ChaincodeInput>,
    #[prost(int32, tag = "4")]
    pub timeout: i32,
}

pub mod chaincode_spec {
    use super::{EnumName, Enumeration};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Undefined = 0,
        Golang = 1,
        Node = 2,
        Car = 3,
        Java = 4,
    }

    impl EnumName for Type {
        fn as_str_name(&self) -> &'static str {
            match self {
                Type::Undefined => "UNDEFINED",
                Type::Golang => "GOLANG",
                Type::Node => "NODE",
                Type::Car => "CAR",
                Type::Java => "JAVA",
            }
        }
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeId {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub version: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeInput {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub args: Vec<Vec<u8>>,
    #[prost(map = "string, bytes", tag = "2")]
    pub decorations: HashMap<String, Vec<u8>>,
    #[prost(bool, tag = "3")]
    pub is_init: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeEndorsedAction {
    /// Marshalled `ProposalResponsePayload`, the bytes each endorser signed
    #[prost(bytes = "vec", tag = "1")]
    pub proposal_response_payload: Vec<u8>,
    #[prost(message, repeated, tag = "2")]
    pub endorsements: Vec<Endorsement>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Endorsement {
    /// Marshalled `msp::SerializedIdentity`
    #[prost(bytes = "vec", tag = "1")]
    pub endorser: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ProposalResponsePayload {
    #[prost(bytes = "vec", tag = "1")]
    pub proposal_hash: Vec<u8>,
    /// Marshalled `ChaincodeAction` for endorser transactions
    #[prost(bytes = "vec", tag = "2")]
    pub extension: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeAction {
    /// Marshalled `rwset::TxReadWriteSet`
    #[prost(bytes = "vec", tag = "1")]
    pub results: Vec<u8>,
    /// Marshalled `ChaincodeEvent`
    #[prost(bytes = "vec", tag = "2")]
    pub events: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub response: Option<Response>,
    #[prost(message, optional, tag = "4")]
    pub chaincode_id: Option<ChaincodeId>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Response {
    #[prost(int32, tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeEvent {
    #[prost(string, tag = "1")]
    pub chaincode_id: String,
    #[prost(string, tag = "2")]
    pub tx_id: String,
    #[prost(string, tag = "3")]
    pub event_name: String,
    #[prost(bytes = "vec", tag = "4")]
    pub payload: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum TxValidationCode {
    Valid = 0,
    NilEnvelope = 1,
    BadPayload = 2,
    BadCommonHeader = 3,
    BadCreatorSignature = 4,
    InvalidEndorserTransaction = 5,
    InvalidConfigTransaction = 6,
    UnsupportedTxPayload = 7,
    BadProposalTxid = 8,
    DuplicateTxid = 9,
    EndorsementPolicyFailure = 10,
    MvccReadConflict = 11,
    PhantomReadConflict = 12,
    UnknownTxType = 13,
    TargetChainNotFound = 14,
    MarshalTxError = 15,
    NilTxaction = 16,
    ExpiredChaincode = 17,
    ChaincodeVersionConflict = 18,
    BadHeaderExtension = 19,
    BadChannelHeader = 20,
    BadResponsePayload = 21,
    BadRwset = 22,
    IllegalWriteset = 23,
    InvalidWriteset = 24,
    InvalidChaincode = 25,
    NotValidated = 254,
    InvalidOtherReason = 255,
}

impl EnumName for TxValidationCode {
    fn as_str_name(&self) -> &'static str {
        match self {
            TxValidationCode::Valid => "VALID",
            TxValidationCode::NilEnvelope => "NIL_ENVELOPE",
            TxValidationCode::BadPayload => "BAD_PAYLOAD",
            TxValidationCode::BadCommonHeader => "BAD_COMMON_HEADER",
            TxValidationCode::BadCreatorSignature => "BAD_CREATOR_SIGNATURE",
            TxValidationCode::InvalidEndorserTransaction => "INVALID_ENDORSER_TRANSACTION",
            TxValidationCode::InvalidConfigTransaction => "INVALID_CONFIG_TRANSACTION",
            TxValidationCode::UnsupportedTxPayload => "UNSUPPORTED_TX_PAYLOAD",
            TxValidationCode::BadProposalTxid => "BAD_PROPOSAL_TXID",
            TxValidationCode::DuplicateTxid => "DUPLICATE_TXID",
            TxValidationCode::EndorsementPolicyFailure => "ENDORSEMENT_POLICY_FAILURE",
            TxValidationCode::MvccReadConflict => "MVCC_READ_CONFLICT",
            TxValidationCode::PhantomReadConflict => "PHANTOM_READ_CONFLICT",
            TxValidationCode::UnknownTxType => "UNKNOWN_TX_TYPE",
            TxValidationCode::TargetChainNotFound => "TARGET_CHAIN_NOT_FOUND",
            TxValidationCode::MarshalTxError => "MARSHAL_TX_ERROR",
            TxValidationCode::NilTxaction => "NIL_TXACTION",
            TxValidationCode::ExpiredChaincode => "EXPIRED_CHAINCODE",
            TxValidationCode::ChaincodeVersionConflict => "CHAINCODE_VERSION_CONFLICT",
            TxValidationCode::BadHeaderExtension => "BAD_HEADER_EXTENSION",
            TxValidationCode::BadChannelHeader => "BAD_CHANNEL_HEADER",
            TxValidationCode::BadResponsePayload => "BAD_RESPONSE_PAYLOAD",
            TxValidationCode::BadRwset => "BAD_RWSET",
            TxValidationCode::IllegalWriteset => "ILLEGAL_WRITESET",
            TxValidationCode::InvalidWriteset => "INVALID_WRITESET",
            TxValidationCode::InvalidChaincode => "INVALID_CHAINCODE",
            TxValidationCode::NotValidated => "NOT_VALIDATED",
            TxValidationCode::InvalidOtherReason => "INVALID_OTHER_REASON",
        }
    }
}
