//! Fixtures shared by the unit tests: self-signed certificates and a fully nested transaction.

use std::collections::HashMap;

use prost::Message;
use rcgen::{
    date_time_ymd, BasicConstraints, CertificateParams, DistinguishedName, DnType, DnValue, IsCa,
    KeyPair, KeyUsagePurpose, SerialNumber,
};

use crate::proto::common::{self, HeaderType};
use crate::proto::kvrwset as kv;
use crate::proto::msp;
use crate::proto::peer::{self, chaincode_spec, TxValidationCode};
use crate::proto::rwset::{self, tx_read_write_set::DataModel};

fn certificate_params(entries: &[(DnType, &str)]) -> CertificateParams {
    let mut params = CertificateParams::default();
    let mut name = DistinguishedName::new();
    for (dn_type, value) in entries {
        name.push(dn_type.clone(), DnValue::Utf8String(value.to_string()));
    }
    params.distinguished_name = name;
    params.serial_number = Some(SerialNumber::from_slice(&[0x2a]));
    params.not_before = date_time_ymd(2024, 1, 1);
    params.not_after = date_time_ymd(2034, 1, 1);
    params
}

fn self_sign(params: CertificateParams) -> String {
    let key_pair = KeyPair::generate().expect("generate P-256 key");
    params
        .self_signed(&key_pair)
        .expect("self-sign certificate")
        .pem()
}

/// End-entity certificate with serial 42, valid 2024-01-01 to 2034-01-01, ECDSA P-256.
pub fn self_signed_pem(common_name: &str) -> String {
    self_sign(certificate_params(&[(DnType::CommonName, common_name)]))
}

/// Same as [`self_signed_pem`] with the subject attributes encoded in the given order.
pub fn self_signed_pem_with_name(entries: &[(DnType, &str)]) -> String {
    self_sign(certificate_params(entries))
}

/// CA certificate with a zero path length and digitalSignature + keyCertSign usage.
pub fn ca_certificate_pem() -> String {
    let mut params = certificate_params(&[(DnType::CommonName, "ca.org1.example.com")]);
    params.is_ca = IsCa::Ca(BasicConstraints::Constrained(0));
    params.key_usages = vec![
        KeyUsagePurpose::DigitalSignature,
        KeyUsagePurpose::KeyCertSign,
    ];
    self_sign(params)
}

pub fn serialized_identity(msp_id: &str, id_bytes: &[u8]) -> Vec<u8> {
    msp::SerializedIdentity {
        mspid: msp_id.to_string(),
        id_bytes: id_bytes.to_vec(),
    }
    .encode_to_vec()
}

pub const TX_ID: &str = "6f2a9c1e4b7d8a3f0e5c2b1a9d8e7f6a5b4c3d2e1f0a9b8c7d6e5f4a3b2c1d0e";

/// Serialized inner layers of an endorser transaction.
///
/// Each field holds the exact bytes nested inside its parent, so a test can replace one layer
/// (for example with a truncated copy) and [`Layers::encode`] rebuilds everything around it.
pub struct Layers {
    pub channel_header: Vec<u8>,
    pub creator: Vec<u8>,
    pub invocation_spec: Vec<u8>,
    pub results: Vec<u8>,
    pub events: Vec<u8>,
    pub endorser: Vec<u8>,
    pub validation_code: i32,
}

impl Layers {
    /// `basic` chaincode `CreateAsset` invocation by `Org1MSP` / `CN=test`, writing `asset1`.
    pub fn sample() -> Self {
        let channel_header = common::ChannelHeader {
            r#type: HeaderType::EndorserTransaction as i32,
            version: 0,
            timestamp: Some(prost_types::Timestamp {
                seconds: 1_700_000_000,
                nanos: 500,
            }),
            channel_id: "mychannel".to_string(),
            tx_id: TX_ID.to_string(),
            epoch: 0,
            extension: Vec::new(),
            tls_cert_hash: Vec::new(),
        };

        let invocation_spec = peer::ChaincodeInvocationSpec {
            chaincode_spec: Some(peer::ChaincodeSpec {
                r#type: chaincode_spec::Type::Golang as i32,
                chaincode_id: Some(peer::ChaincodeId {
                    path: String::new(),
                    name: "basic".to_string(),
                    version: String::new(),
                }),
                input: Some(peer::ChaincodeInput {
                    args: vec![
                        b"CreateAsset".to_vec(),
                        b"asset1".to_vec(),
                        b"blue".to_vec(),
                        b"5".to_vec(),
                    ],
                    decorations: HashMap::new(),
                    is_init: false,
                }),
                timeout: 0,
            }),
        };

        let kv_rwset = kv::KvrwSet {
            reads: vec![kv::KvRead {
                key: "asset0".to_string(),
                version: Some(kv::Version {
                    block_num: 7,
                    tx_num: 0,
                }),
            }],
            writes: vec![kv::KvWrite {
                key: "asset1".to_string(),
                is_delete: false,
                value: br#"{"ID":"asset1","Color":"blue","Size":5}"#.to_vec(),
            }],
            ..Default::default()
        };
        let results = rwset::TxReadWriteSet {
            data_model: DataModel::Kv as i32,
            ns_rwset: vec![rwset::NsReadWriteSet {
                namespace: "basic".to_string(),
                rwset: kv_rwset.encode_to_vec(),
                collection_hashed_rwset: Vec::new(),
            }],
        };

        let events = peer::ChaincodeEvent {
            chaincode_id: "basic".to_string(),
            tx_id: TX_ID.to_string(),
            event_name: "CreateAsset".to_string(),
            payload: b"asset1".to_vec(),
        };

        Layers {
            channel_header: channel_header.encode_to_vec(),
            creator: serialized_identity("Org1MSP", self_signed_pem("test").as_bytes()),
            invocation_spec: invocation_spec.encode_to_vec(),
            results: results.encode_to_vec(),
            events: events.encode_to_vec(),
            endorser: serialized_identity(
                "Org1MSP",
                self_signed_pem("peer0.org1.example.com").as_bytes(),
            ),
            validation_code: TxValidationCode::Valid as i32,
        }
    }

    /// Serialized `ProcessedTransaction` wrapping every layer.
    pub fn encode(&self) -> Vec<u8> {
        peer::ProcessedTransaction {
            transaction_envelope: Some(self.envelope()),
            validation_code: self.validation_code,
        }
        .encode_to_vec()
    }

    pub fn envelope(&self) -> common::Envelope {
        let action = peer::ChaincodeAction {
            results: self.results.clone(),
            events: self.events.clone(),
            response: Some(peer::Response {
                status: 200,
                message: String::new(),
                payload: Vec::new(),
            }),
            chaincode_id: Some(peer::ChaincodeId {
                path: String::new(),
                name: "basic".to_string(),
                version: "1.0".to_string(),
            }),
        };
        let response_payload = peer::ProposalResponsePayload {
            proposal_hash: vec![0x5a; 32],
            extension: action.encode_to_vec(),
        };
        let action_payload = peer::ChaincodeActionPayload {
            chaincode_proposal_payload: peer::ChaincodeProposalPayload {
                input: self.invocation_spec.clone(),
                transient_map: HashMap::new(),
            }
            .encode_to_vec(),
            action: Some(peer::ChaincodeEndorsedAction {
                proposal_response_payload: response_payload.encode_to_vec(),
                endorsements: vec![peer::Endorsement {
                    endorser: self.endorser.clone(),
                    signature: vec![0x30, 0x45, 0x02, 0x21],
                }],
            }),
        };
        let signature_header = common::SignatureHeader {
            creator: self.creator.clone(),
            nonce: vec![0x4e; 24],
        }
        .encode_to_vec();
        let transaction = peer::Transaction {
            actions: vec![peer::TransactionAction {
                header: signature_header.clone(),
                payload: action_payload.encode_to_vec(),
            }],
        };
        let payload = common::Payload {
            header: Some(common::Header {
                channel_header: self.channel_header.clone(),
                signature_header,
            }),
            data: transaction.encode_to_vec(),
        };
        common::Envelope {
            payload: payload.encode_to_vec(),
            signature: vec![0x30, 0x44, 0x02, 0x20],
        }
    }
}

/// Drop the last byte so the final length-delimited field runs past the end of the buffer.
pub fn truncated(bytes: &[u8]) -> Vec<u8> {
    bytes[..bytes.len() - 1].to_vec()
}
