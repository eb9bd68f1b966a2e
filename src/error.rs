//! Error types for wasm-fabric

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-fabric operations
#[derive(Debug, Clone, Error)]
pub enum FabricError {
    /// Bytes that do not parse under the schema of `layer`
    #[error("Malformed {layer}: {source}")]
    MalformedInput {
        layer: &'static str,
        #[source]
        source: prost::DecodeError,
    },
    /// Identity without a PEM block, or with an unparsable certificate
    #[error("Malformed credential: {0}")]
    MalformedCredential(String),
    /// Caller-supplied text that is not a valid byte encoding
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FabricError {
    pub fn malformed_input(layer: &'static str, source: prost::DecodeError) -> Self {
        FabricError::MalformedInput { layer, source }
    }

    /// Name of the layer that failed, for schema errors
    pub fn layer(&self) -> Option<&'static str> {
        match self {
            FabricError::MalformedInput { layer, .. } => Some(*layer),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FabricError>;

// REQUIRED: Converts to JS Error with stack trace
impl From<FabricError> for JsValue {
    fn from(err: FabricError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
