//! Reading and decoding command input

use anyhow::{Context, Result};
use base64::Engine;
use std::io::Read;
use std::path::Path;
use wasm_fabric::FabricError;

/// Read the whole input from `path`, or from stdin when `path` is `-`
pub fn read_input_bytes(path: &Path, what: &str) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .with_context(|| format!("Failed to read {} from stdin", what))?;
        Ok(buf)
    } else {
        std::fs::read(path)
            .with_context(|| format!("Failed to read {} file: {}", what, path.display()))
    }
}

pub fn is_pem(raw: &[u8]) -> bool {
    raw.windows(b"-----BEGIN".len()).any(|w| w == b"-----BEGIN")
}

/// Decode text input as hex (optional `0x` prefix) or, when it is not hex, as standard base64.
///
/// Whitespace anywhere in the input is ignored.
pub fn decode_input(raw: &[u8]) -> std::result::Result<Vec<u8>, FabricError> {
    let text = std::str::from_utf8(raw)
        .map_err(|_| FabricError::InvalidInput("input is not hex or base64 text".to_string()))?;
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(FabricError::InvalidInput("empty input".to_string()));
    }

    let hex_text = compact.strip_prefix("0x").unwrap_or(&compact);
    if !hex_text.is_empty() && hex_text.chars().all(|c| c.is_ascii_hexdigit()) {
        return hex::decode(hex_text)
            .map_err(|e| FabricError::InvalidInput(format!("invalid hex: {}", e)));
    }

    base64::engine::general_purpose::STANDARD
        .decode(&compact)
        .map_err(|e| FabricError::InvalidInput(format!("neither hex nor base64: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_input(b"0a0b\n0c").unwrap(), vec![0x0a, 0x0b, 0x0c]);
        assert_eq!(decode_input(b"0xDEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_decode_base64() {
        assert_eq!(decode_input(b"CgQKAggD\n").unwrap(), vec![0x0a, 0x04, 0x0a, 0x02, 0x08, 0x03]);
    }

    #[test]
    fn test_odd_length_hex_is_invalid() {
        let err = decode_input(b"abc").unwrap_err();
        assert!(matches!(err, FabricError::InvalidInput(_)));
    }

    #[test]
    fn test_bad_characters_are_invalid() {
        assert!(matches!(
            decode_input(b"not hex!").unwrap_err(),
            FabricError::InvalidInput(_)
        ));
        assert!(matches!(
            decode_input(&[0xff, 0xfe]).unwrap_err(),
            FabricError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert!(matches!(
            decode_input(b" \n\t").unwrap_err(),
            FabricError::InvalidInput(_)
        ));
        assert!(matches!(
            decode_input(b"0x").unwrap_err(),
            FabricError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_pem_detection() {
        assert!(is_pem(b"subject=CN=test\n-----BEGIN CERTIFICATE-----\n"));
        assert!(!is_pem(b"0a0b0c"));
    }
}
