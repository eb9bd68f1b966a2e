//! Display tree for processed transactions and envelopes.

use super::identity::identity_to_node;
use super::rwset::read_write_set_to_node;
use super::{bytes_map_to_node, list_to_node, Node, Primitive};
use crate::chaincode::{
    ChaincodeAction, ChaincodeEndorsedAction, ChaincodeEvent, ChaincodeId, ChaincodeProposalPayload,
    ChaincodeSpec, Endorsement, Response,
};
use crate::envelope::{Payload, ProcessedTransaction, TransactionEnvelope};
use crate::error::Result;
use crate::header::{ChannelHeader, Header, SignatureHeader};
use crate::transaction::{ChaincodeActionPayload, Data, TransactionAction};

fn channel_header_to_node(header: &ChannelHeader) -> Node {
    let mut node = Node::new("channel_header", Primitive::None);
    node.add_child(Node::new("type", Primitive::String(header.header_type.clone())));
    node.add_child(Node::new("version", Primitive::I32(header.version)));

    let mut timestamp = Node::new("timestamp", Primitive::None);
    timestamp.add_child(Node::new("seconds", Primitive::I64(header.timestamp.seconds)));
    timestamp.add_child(Node::new("nanos", Primitive::I32(header.timestamp.nanos)));
    node.add_child(timestamp);

    node.add_child(Node::new("channel_id", Primitive::String(header.channel_id.clone())));
    node.add_child(Node::new("tx_id", Primitive::String(header.tx_id.clone())));
    node.add_child(Node::new("epoch", Primitive::U64(header.epoch)));
    node.add_child(Node::new("extension", Primitive::Buffer(header.extension.clone())));
    node.add_child(Node::new(
        "tls_cert_hash",
        Primitive::Buffer(header.tls_cert_hash.clone()),
    ));
    node
}

fn signature_header_to_node(label: &str, header: &SignatureHeader) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(identity_to_node("creator", &header.creator));
    node.add_child(Node::new("nonce", Primitive::Buffer(header.nonce.clone())));
    node
}

fn header_to_node(header: &Header) -> Node {
    let mut node = Node::new("header", Primitive::None);
    node.add_child(channel_header_to_node(&header.channel_header));
    node.add_child(signature_header_to_node(
        "signature_header",
        &header.signature_header,
    ));
    node
}

fn chaincode_id_to_node(id: &ChaincodeId) -> Node {
    let mut node = Node::new("chaincode_id", Primitive::None);
    node.add_child(Node::new("name", Primitive::String(id.name.clone())));
    node.add_child(Node::new("version", Primitive::String(id.version.clone())));
    node.add_child(Node::new("path", Primitive::String(id.path.clone())));
    node
}

fn chaincode_spec_to_node(spec: &ChaincodeSpec) -> Node {
    let mut node = Node::new("chaincode_spec", Primitive::None);
    node.add_child(Node::new("type", Primitive::String(spec.chaincode_type.clone())));
    node.add_child(chaincode_id_to_node(&spec.chaincode_id));

    let mut input = Node::new("input", Primitive::None);
    input.add_child(list_to_node("args", "arg", &spec.input.args, |label, arg| {
        Node::new(label, Primitive::String(arg.clone()))
    }));
    input.add_child(bytes_map_to_node("decorations", spec.input.decorations.iter()));
    input.add_child(Node::new("is_init", Primitive::Boolean(spec.input.is_init)));
    node.add_child(input);

    node.add_child(Node::new("timeout", Primitive::I32(spec.timeout)));
    node
}

fn proposal_payload_to_node(payload: &ChaincodeProposalPayload) -> Node {
    let mut node = Node::new("proposal_payload", Primitive::None);
    node.add_child(chaincode_spec_to_node(&payload.input.chaincode_spec));
    node.add_child(bytes_map_to_node("transient_map", payload.transient_map.iter()));
    node
}

fn event_to_node(event: &ChaincodeEvent) -> Node {
    let mut node = Node::new("events", Primitive::None);
    node.add_child(Node::new("chaincode_id", Primitive::String(event.chaincode_id.clone())));
    node.add_child(Node::new("tx_id", Primitive::String(event.tx_id.clone())));
    node.add_child(Node::new("event_name", Primitive::String(event.event_name.clone())));
    node.add_child(Node::new("payload", Primitive::Buffer(event.payload.clone())));
    node
}

fn response_to_node(response: &Response) -> Node {
    let mut node = Node::new("response", Primitive::I32(response.status));
    node.add_child(Node::new("message", Primitive::String(response.message.clone())));
    node.add_child(Node::new("payload", Primitive::Buffer(response.payload.clone())));
    node
}

fn chaincode_action_to_node(action: &ChaincodeAction) -> Node {
    let mut node = Node::new("chaincode_action", Primitive::None);
    node.add_child(read_write_set_to_node("results", &action.results));
    node.add_child(event_to_node(&action.events));
    node.add_child(response_to_node(&action.response));
    node.add_child(chaincode_id_to_node(&action.chaincode_id));
    node
}

fn endorsement_to_node(label: String, endorsement: &Endorsement) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(identity_to_node("endorser", &endorsement.endorser));
    node.add_child(Node::new(
        "signature",
        Primitive::Buffer(endorsement.signature.clone()),
    ));
    node
}

fn endorsed_action_to_node(action: &ChaincodeEndorsedAction) -> Node {
    let response_payload = &action.proposal_response_payload;
    let mut prp = Node::new("proposal_response_payload", Primitive::None);
    prp.add_child(Node::new(
        "proposal_hash",
        Primitive::Buffer(response_payload.proposal_hash.clone()),
    ));
    prp.add_child(chaincode_action_to_node(&response_payload.chaincode_action));

    let mut node = Node::new("endorsed_action", Primitive::None);
    node.add_child(prp);
    node.add_child(list_to_node(
        "endorsements",
        "endorsement",
        &action.endorsements,
        endorsement_to_node,
    ));
    node
}

fn action_payload_to_node(payload: &ChaincodeActionPayload) -> Node {
    let mut node = Node::new("payload", Primitive::None);
    node.add_child(proposal_payload_to_node(&payload.proposal_payload));
    node.add_child(endorsed_action_to_node(&payload.endorsed_action));
    node
}

fn action_to_node(label: String, action: &TransactionAction) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(signature_header_to_node("header", &action.header));
    node.add_child(action_payload_to_node(&action.payload));
    node
}

fn data_to_node(data: &Data) -> Node {
    let mut node = Node::new("data", Primitive::None);
    node.add_child(list_to_node("actions", "action", &data.actions, action_to_node));
    node
}

fn payload_to_node(payload: &Payload) -> Node {
    let mut node = Node::new("payload", Primitive::None);
    node.add_child(header_to_node(&payload.header));
    node.add_child(data_to_node(&payload.data));
    node
}

pub fn envelope_to_node(envelope: &TransactionEnvelope) -> Node {
    let mut node = Node::new("transaction_envelope", Primitive::None);
    node.add_child(payload_to_node(&envelope.payload));
    node.add_child(Node::new(
        "signature",
        Primitive::Buffer(envelope.signature.clone()),
    ));
    node
}

pub fn processed_transaction_to_node(tx: &ProcessedTransaction) -> Node {
    let mut node = Node::new("processed_transaction", Primitive::None);
    let mut code = Node::new("validation_code", Primitive::I32(tx.validation_code));
    code.add_child(Node::new("name", Primitive::String(tx.validation_code_name())));
    node.add_child(code);
    node.add_child(envelope_to_node(&tx.transaction_envelope));
    node
}

pub fn parse_transaction_bytes(bytes: &[u8]) -> Result<Node> {
    crate::decode_transaction(bytes).map(|tx| processed_transaction_to_node(&tx))
}

pub fn parse_envelope_bytes(bytes: &[u8]) -> Result<Node> {
    crate::decode_envelope(bytes).map(|envelope| envelope_to_node(&envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{truncated, Layers, TX_ID};
    use prost::Message;

    fn path<'a>(node: &'a Node, labels: &[&str]) -> &'a Node {
        labels.iter().fold(node, |node, label| {
            node.child(label)
                .unwrap_or_else(|| panic!("missing child {} under {}", label, node.label))
        })
    }

    #[test]
    fn test_transaction_tree() {
        let node = parse_transaction_bytes(&Layers::sample().encode()).unwrap();
        assert_eq!(node.label, "processed_transaction");
        assert_eq!(
            path(&node, &["validation_code", "name"]).value,
            Primitive::String("VALID".to_string())
        );

        let payload = path(&node, &["transaction_envelope", "payload"]);
        assert_eq!(
            path(payload, &["header", "channel_header", "tx_id"]).value,
            Primitive::String(TX_ID.to_string())
        );
        assert_eq!(
            path(
                payload,
                &["header", "signature_header", "creator", "msp_id"]
            )
            .value,
            Primitive::String("Org1MSP".to_string())
        );

        let actions = path(payload, &["data", "actions"]);
        assert_eq!(actions.value, Primitive::U64(1));
        let action = actions.child("action_0").unwrap();
        let args = path(
            action,
            &["payload", "proposal_payload", "chaincode_spec", "input", "args"],
        );
        assert_eq!(args.value, Primitive::U64(4));
        assert_eq!(
            args.child("arg_1").map(|c| &c.value),
            Some(&Primitive::String("asset1".to_string()))
        );

        let action_node = path(
            action,
            &[
                "payload",
                "endorsed_action",
                "proposal_response_payload",
                "chaincode_action",
            ],
        );
        assert_eq!(path(action_node, &["response"]).value, Primitive::I32(200));
        let write = path(
            action_node,
            &["results", "ns_rwsets", "ns_rwset_0", "rwset", "writes", "write_0"],
        );
        assert_eq!(
            write.child("key").map(|c| &c.value),
            Some(&Primitive::String("asset1".to_string()))
        );
    }

    #[test]
    fn test_envelope_tree() {
        let bytes = Layers::sample().envelope().encode_to_vec();
        let node = parse_envelope_bytes(&bytes).unwrap();
        assert_eq!(node.label, "transaction_envelope");
        assert_eq!(
            node.child("signature").map(|c| &c.value),
            Some(&Primitive::Buffer(vec![0x30, 0x44, 0x02, 0x20]))
        );
    }

    #[test]
    fn test_decode_error_surfaces() {
        let mut layers = Layers::sample();
        layers.results = truncated(&layers.results);
        let err = parse_transaction_bytes(&layers.encode()).unwrap_err();
        assert_eq!(err.layer(), Some("TxReadWriteSet"));
    }
}
