use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;

use crate::format::{render_tree_with_scheme, ColorScheme};
use crate::input::{decode_input, is_pem, read_input_bytes};
use wasm_fabric::parse_node::{certificate_to_node, identity_to_node, Node};
use wasm_fabric::{decode_identity, CertificateInfo, Identity};

pub fn handle_parse_command(path: PathBuf, json: bool, no_color: bool) -> Result<()> {
    let raw_bytes = read_input_bytes(&path, "identity")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&identity_json(&raw_bytes)?)?);
        return Ok(());
    }

    let color_scheme = if no_color {
        ColorScheme::no_color()
    } else {
        ColorScheme::default()
    };
    render_tree_with_scheme(&identity_node(&raw_bytes)?, &color_scheme)
}

/// Input is either a bare certificate or an encoded `SerializedIdentity`.
enum Parsed {
    Certificate(CertificateInfo),
    Identity(Identity),
}

fn parse(raw_bytes: &[u8]) -> Result<Parsed> {
    // A bare certificate, as found in an MSP signcerts directory
    if is_pem(raw_bytes) {
        let cert = CertificateInfo::from_pem(raw_bytes).context("Failed to parse certificate")?;
        return Ok(Parsed::Certificate(cert));
    }
    let bytes = decode_input(raw_bytes)?;
    let identity = decode_identity(&bytes).context("Failed to parse serialized identity")?;
    Ok(Parsed::Identity(identity))
}

pub fn identity_node(raw_bytes: &[u8]) -> Result<Node> {
    Ok(match parse(raw_bytes)? {
        Parsed::Certificate(cert) => certificate_to_node(&cert),
        Parsed::Identity(identity) => identity_to_node("identity", &identity),
    })
}

pub fn identity_json(raw_bytes: &[u8]) -> Result<Value> {
    Ok(match parse(raw_bytes)? {
        Parsed::Certificate(cert) => serde_json::to_value(&cert)?,
        Parsed::Identity(identity) => serde_json::to_value(&identity)?,
    })
}
