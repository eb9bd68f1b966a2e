//! WASM bindings for transaction parsing
//!
//! FabricTransactionParser provides static methods that decode Fabric messages into plain JS
//! objects. Byte fields arrive as lowercase hex strings, maps as plain objects.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::parse_node::{parse_identity_bytes, parse_transaction_bytes};

/// Namespace for parsing operations
#[wasm_bindgen]
pub struct FabricTransactionParser;

#[wasm_bindgen]
impl FabricTransactionParser {
    /// Parse a serialized `ProcessedTransaction`
    ///
    /// # Arguments
    /// * `bytes` - Raw protobuf bytes, as returned by the ledger query for a transaction id
    ///
    /// # Returns
    /// The decoded transaction as a JS object, `validationCodeName` included
    #[wasm_bindgen(js_name = parseProcessedTransaction)]
    pub fn parse_processed_transaction(bytes: &[u8]) -> Result<JsValue, JsValue> {
        let tx = crate::decode_transaction(bytes)?;
        let value = to_js_value(&tx)?;
        js_sys::Reflect::set(
            &value,
            &"validationCodeName".into(),
            &tx.validation_code_name().into(),
        )?;
        Ok(value)
    }

    /// Parse a serialized `Envelope` carrying an endorser transaction
    #[wasm_bindgen(js_name = parseEnvelope)]
    pub fn parse_envelope(bytes: &[u8]) -> Result<JsValue, JsValue> {
        let envelope = crate::decode_envelope(bytes)?;
        to_js_value(&envelope)
    }

    /// Parse a serialized `SerializedIdentity` (MSP id plus PEM certificate)
    #[wasm_bindgen(js_name = parseIdentity)]
    pub fn parse_identity(bytes: &[u8]) -> Result<JsValue, JsValue> {
        let identity = crate::decode_identity(bytes)?;
        to_js_value(&identity)
    }

    /// Parse a `ProcessedTransaction` into the generic display tree
    #[wasm_bindgen(js_name = parseProcessedTransactionToTree)]
    pub fn parse_processed_transaction_to_tree(bytes: &[u8]) -> Result<JsValue, JsValue> {
        let node = parse_transaction_bytes(bytes)?;
        to_js_value(&node)
    }

    /// Parse a `SerializedIdentity` into the generic display tree
    #[wasm_bindgen(js_name = parseIdentityToTree)]
    pub fn parse_identity_to_tree(bytes: &[u8]) -> Result<JsValue, JsValue> {
        let node = parse_identity_bytes(bytes)?;
        to_js_value(&node)
    }
}

/// Convert a record to a plain JS object using serde_wasm_bindgen
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
