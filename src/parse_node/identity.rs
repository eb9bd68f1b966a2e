use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::{list_to_node, Node, Primitive};
use crate::error::Result;
use crate::identity::{CertificateInfo, Extension, Identity};

fn datetime_to_node(label: &str, datetime: &OffsetDateTime) -> Node {
    let text = datetime
        .format(&Rfc3339)
        .unwrap_or_else(|_| datetime.to_string());
    Node::new(label, Primitive::String(text))
}

fn extension_to_node(label: String, ext: &Extension) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("oid", Primitive::String(ext.oid.clone())));
    node.add_child(Node::new("critical", Primitive::Boolean(ext.critical)));
    node.add_child(Node::new("value", Primitive::Buffer(ext.value.clone())));
    node
}

pub fn certificate_to_node(cert: &CertificateInfo) -> Node {
    let mut node = Node::new("certificate", Primitive::None);
    node.add_child(Node::new("subject", Primitive::String(cert.subject.clone())));
    node.add_child(Node::new("issuer", Primitive::String(cert.issuer.clone())));
    node.add_child(Node::new(
        "serial_number",
        Primitive::String(cert.serial_number.to_string()),
    ));
    node.add_child(Node::new("version", Primitive::U32(cert.version)));
    node.add_child(datetime_to_node("not_before", &cert.not_before));
    node.add_child(datetime_to_node("not_after", &cert.not_after));
    node.add_child(Node::new(
        "signature_algorithm",
        Primitive::String(cert.signature_algorithm.clone()),
    ));
    node.add_child(Node::new("signature", Primitive::Buffer(cert.signature.clone())));
    node.add_child(Node::new(
        "public_key_algorithm",
        Primitive::String(cert.public_key_algorithm.clone()),
    ));
    node.add_child(Node::new("public_key", Primitive::Buffer(cert.public_key.clone())));
    node.add_child(Node::new("key_usage", Primitive::U16(cert.key_usage)));

    if cert.basic_constraints_valid {
        let mut constraints = Node::new("basic_constraints", Primitive::None);
        constraints.add_child(Node::new("is_ca", Primitive::Boolean(cert.is_ca)));
        if let Some(len) = cert.max_path_len {
            constraints.add_child(Node::new("max_path_len", Primitive::U32(len)));
        }
        node.add_child(constraints);
    }
    if !cert.subject_key_id.is_empty() {
        node.add_child(Node::new(
            "subject_key_id",
            Primitive::Buffer(cert.subject_key_id.clone()),
        ));
    }
    if !cert.authority_key_id.is_empty() {
        node.add_child(Node::new(
            "authority_key_id",
            Primitive::Buffer(cert.authority_key_id.clone()),
        ));
    }
    node.add_child(list_to_node(
        "extensions",
        "extension",
        &cert.extensions,
        extension_to_node,
    ));
    node
}

pub fn identity_to_node(label: &str, identity: &Identity) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("msp_id", Primitive::String(identity.msp_id.clone())));
    if let Some(cert) = &identity.certificate {
        node.add_child(certificate_to_node(cert));
    }
    node
}

/// Decode a serialized identity straight into a display tree.
pub fn parse_identity_bytes(bytes: &[u8]) -> Result<Node> {
    crate::decode_identity(bytes).map(|identity| identity_to_node("identity", &identity))
}
