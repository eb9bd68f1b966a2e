use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;

use crate::format::{render_tree_with_scheme, ColorScheme};
use crate::input::{decode_input, read_input_bytes};
use wasm_fabric::parse_node::{envelope_to_node, processed_transaction_to_node, Node};
use wasm_fabric::{decode_envelope, decode_transaction};

pub fn handle_parse_command(path: PathBuf, envelope: bool, json: bool, no_color: bool) -> Result<()> {
    let raw_bytes = read_input_bytes(&path, "transaction")?;
    let bytes = decode_input(&raw_bytes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&transaction_json(&bytes, envelope)?)?);
        return Ok(());
    }
    render_tree_with_scheme(&transaction_node(&bytes, envelope)?, &color_scheme(no_color))
}

/// Display tree for a `ProcessedTransaction`, or a bare `Envelope` when `envelope` is set.
pub fn transaction_node(bytes: &[u8], envelope: bool) -> Result<Node> {
    if envelope {
        let envelope = decode_envelope(bytes).context("Failed to parse envelope")?;
        return Ok(envelope_to_node(&envelope));
    }
    let tx = decode_transaction(bytes).context("Failed to parse processed transaction")?;
    Ok(processed_transaction_to_node(&tx))
}

/// JSON record with the same shape the WASM bindings return.
pub fn transaction_json(bytes: &[u8], envelope: bool) -> Result<Value> {
    if envelope {
        let envelope = decode_envelope(bytes).context("Failed to parse envelope")?;
        return Ok(serde_json::to_value(&envelope)?);
    }

    let tx = decode_transaction(bytes).context("Failed to parse processed transaction")?;
    let mut value = serde_json::to_value(&tx)?;
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "validationCodeName".to_string(),
            tx.validation_code_name().into(),
        );
    }
    Ok(value)
}

fn color_scheme(no_color: bool) -> ColorScheme {
    if no_color {
        ColorScheme::no_color()
    } else {
        ColorScheme::default()
    }
}
