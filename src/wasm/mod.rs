//! WASM bindings for wasm-fabric
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod parser;

// Re-export WASM types
pub use parser::FabricTransactionParser;
