//! Tests for the `tx parse` and `identity parse` code paths

#[cfg(test)]
mod tests {
    use crate::identity::parse::{identity_json, identity_node};
    use crate::input::decode_input;
    use crate::test_utils::{
        envelope_hex, peer_certificate_pem, processed_transaction_hex, serialized_identity_hex,
    };
    use crate::tx::parse::{transaction_json, transaction_node};
    use wasm_fabric::parse_node::Primitive;

    const PEER_SUBJECT: &str = "CN=peer0.org1.example.com,O=org1.example.com,C=US";

    #[test]
    fn test_transaction_json_has_validation_code_name() -> anyhow::Result<()> {
        let bytes = decode_input(&processed_transaction_hex())?;
        let value = transaction_json(&bytes, false)?;

        assert_eq!(value["validationCode"], 11);
        assert_eq!(value["validationCodeName"], "MVCC_READ_CONFLICT");
        assert_eq!(value["transactionEnvelope"]["signature"], "abcd");
        assert_eq!(
            value["transactionEnvelope"]["payload"]["header"]["channelHeader"]["channelId"],
            "mychannel"
        );
        Ok(())
    }

    #[test]
    fn test_transaction_tree() -> anyhow::Result<()> {
        let bytes = decode_input(&processed_transaction_hex())?;
        let node = transaction_node(&bytes, false)?;

        assert_eq!(node.label, "processed_transaction");
        let code = node.child("validation_code").unwrap();
        assert_eq!(code.value, Primitive::I32(11));
        assert_eq!(
            code.child("name").map(|c| &c.value),
            Some(&Primitive::String("MVCC_READ_CONFLICT".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_envelope_flag() -> anyhow::Result<()> {
        let bytes = decode_input(&envelope_hex())?;

        let node = transaction_node(&bytes, true)?;
        assert_eq!(node.label, "transaction_envelope");
        assert_eq!(
            node.child("signature").map(|c| &c.value),
            Some(&Primitive::Buffer(vec![0xab, 0xcd]))
        );

        let value = transaction_json(&bytes, true)?;
        assert_eq!(value["signature"], "abcd");
        assert_eq!(value["payload"]["header"]["channelHeader"]["txId"], "6f2a");
        assert!(value.get("validationCodeName").is_none());
        Ok(())
    }

    #[test]
    fn test_envelope_is_not_a_processed_transaction() -> anyhow::Result<()> {
        let bytes = decode_input(&envelope_hex())?;
        assert!(transaction_node(&bytes, false).is_err());
        Ok(())
    }

    #[test]
    fn test_bare_pem_identity() -> anyhow::Result<()> {
        let pem = peer_certificate_pem();

        let node = identity_node(pem.as_bytes())?;
        assert_eq!(node.label, "certificate");
        assert_eq!(
            node.child("subject").map(|c| &c.value),
            Some(&Primitive::String(PEER_SUBJECT.to_string()))
        );

        let value = identity_json(pem.as_bytes())?;
        assert_eq!(value["subject"], PEER_SUBJECT);
        assert_eq!(value["issuer"], PEER_SUBJECT);
        assert_eq!(value["serialNumber"], "42");
        assert!(value.get("mspId").is_none());
        Ok(())
    }

    #[test]
    fn test_serialized_identity() -> anyhow::Result<()> {
        let raw = serialized_identity_hex("Org1MSP", peer_certificate_pem().as_bytes());

        let node = identity_node(&raw)?;
        assert_eq!(node.label, "identity");
        assert_eq!(
            node.child("msp_id").map(|c| &c.value),
            Some(&Primitive::String("Org1MSP".to_string()))
        );
        assert!(node.child("certificate").is_some());

        let value = identity_json(&raw)?;
        assert_eq!(value["mspId"], "Org1MSP");
        assert_eq!(value["certificate"]["subject"], PEER_SUBJECT);
        Ok(())
    }
}
