//! Hex-encoded fixtures, in the form the CLI reads them from a file

use prost::Message;
use rcgen::{
    date_time_ymd, CertificateParams, DistinguishedName, DnType, DnValue, KeyPair, SerialNumber,
};
use wasm_fabric::proto::{common, msp, peer};

pub fn envelope() -> common::Envelope {
    let channel_header = common::ChannelHeader {
        r#type: common::HeaderType::EndorserTransaction as i32,
        channel_id: "mychannel".to_string(),
        tx_id: "6f2a".to_string(),
        ..Default::default()
    };
    let payload = common::Payload {
        header: Some(common::Header {
            channel_header: channel_header.encode_to_vec(),
            signature_header: Vec::new(),
        }),
        data: Vec::new(),
    };
    common::Envelope {
        payload: payload.encode_to_vec(),
        signature: vec![0xab, 0xcd],
    }
}

pub fn envelope_hex() -> Vec<u8> {
    hex::encode(envelope().encode_to_vec()).into_bytes()
}

/// [`envelope`] rejected with `MVCC_READ_CONFLICT`
pub fn processed_transaction_hex() -> Vec<u8> {
    let tx = peer::ProcessedTransaction {
        transaction_envelope: Some(envelope()),
        validation_code: peer::TxValidationCode::MvccReadConflict as i32,
    };
    hex::encode(tx.encode_to_vec()).into_bytes()
}

/// Peer certificate for `C=US, O=org1.example.com, CN=peer0.org1.example.com`
pub fn peer_certificate_pem() -> String {
    let mut name = DistinguishedName::new();
    name.push(DnType::CountryName, DnValue::Utf8String("US".to_string()));
    name.push(DnType::OrganizationName, DnValue::Utf8String("org1.example.com".to_string()));
    name.push(DnType::CommonName, DnValue::Utf8String("peer0.org1.example.com".to_string()));

    let mut params = CertificateParams::default();
    params.distinguished_name = name;
    params.serial_number = Some(SerialNumber::from_slice(&[0x2a]));
    params.not_before = date_time_ymd(2024, 1, 1);
    params.not_after = date_time_ymd(2034, 1, 1);

    let key_pair = KeyPair::generate().expect("generate P-256 key");
    params
        .self_signed(&key_pair)
        .expect("self-sign certificate")
        .pem()
}

pub fn serialized_identity_hex(msp_id: &str, id_bytes: &[u8]) -> Vec<u8> {
    let identity = msp::SerializedIdentity {
        mspid: msp_id.to_string(),
        id_bytes: id_bytes.to_vec(),
    };
    hex::encode(identity.encode_to_vec()).into_bytes()
}
