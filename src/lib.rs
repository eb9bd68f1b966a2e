//! wasm-fabric: decoder for Hyperledger Fabric processed transactions
//!
//! This crate provides:
//! - Layer-by-layer decoding of a `ProcessedTransaction` into plain records
//! - Identity decoding (MSP id plus a flattened X.509 certificate)
//! - A generic display tree for CLIs and debugging tools
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`
//!
//! Every record implements [`Decode`]. A record's decoder parses its own wire message and then
//! decodes each nested serialized message through the child record, so one call on the
//! outermost type walks the whole transaction. The first malformed layer aborts the walk.

pub mod chaincode;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod header;
pub mod identity;
pub mod kvrwset;
pub mod parse_node;
pub mod proto;
pub mod rwset;
mod serde_utils;
pub mod transaction;
pub mod wasm;

#[cfg(test)]
mod test_utils;

// Re-export main types for convenience
pub use decode::Decode;
pub use envelope::{Payload, ProcessedTransaction, TransactionEnvelope};
pub use error::{FabricError, Result};
pub use identity::{CertificateInfo, Identity};

/// Decode a serialized `peer.ProcessedTransaction`, as returned by the ledger query for a
/// transaction id.
pub fn decode_transaction(bytes: &[u8]) -> Result<ProcessedTransaction> {
    ProcessedTransaction::decode(bytes)
}

/// Decode a serialized `common.Envelope` carrying an endorser transaction.
pub fn decode_envelope(bytes: &[u8]) -> Result<TransactionEnvelope> {
    TransactionEnvelope::decode(bytes)
}

/// Decode a serialized `msp.SerializedIdentity`.
pub fn decode_identity(bytes: &[u8]) -> Result<Identity> {
    Identity::decode(bytes)
}
