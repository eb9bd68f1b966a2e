//! Wire schemas for the Fabric messages this crate decodes.
//!
//! The structs mirror the upstream `.proto` definitions field-for-field (names, tags and wire
//! types) so that `prost` decodes them exactly like the Go and Java SDKs.
//!
//! Only the fields needed to walk a processed endorser transaction are declared. Unknown
//! fields are skipped by `prost` as usual.

pub mod common;
pub mod kvrwset;
pub mod msp;
pub mod peer;
pub mod rwset;

/// Symbolic names for protobuf enumerations.
///
/// `prost::Enumeration` only derives the integer conversions, the name table lives here.
pub trait EnumName: Sized + TryFrom<i32> {
    fn as_str_name(&self) -> &'static str;
}

/// Render an enumeration value by name, falling back to the decimal value for codes the name
/// table does not know about.
pub fn enum_name<E: EnumName>(value: i32) -> String {
    match E::try_from(value) {
        Ok(known) => known.as_str_name().to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::common::HeaderType;
    use super::peer::{chaincode_spec, TxValidationCode};
    use super::rwset::tx_read_write_set::DataModel;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "MESSAGE")]
    #[case(1, "CONFIG")]
    #[case(3, "ENDORSER_TRANSACTION")]
    #[case(6, "CHAINCODE_PACKAGE")]
    #[case(999, "999")]
    #[case(-1, "-1")]
    fn test_header_type_names(#[case] value: i32, #[case] expected: &str) {
        assert_eq!(enum_name::<HeaderType>(value), expected);
    }

    #[rstest]
    #[case(0, "UNDEFINED")]
    #[case(1, "GOLANG")]
    #[case(2, "NODE")]
    #[case(4, "JAVA")]
    #[case(7, "7")]
    fn test_chaincode_type_names(#[case] value: i32, #[case] expected: &str) {
        assert_eq!(enum_name::<chaincode_spec::Type>(value), expected);
    }

    #[test]
    fn test_data_model_names() {
        assert_eq!(enum_name::<DataModel>(0), "KV");
        assert_eq!(enum_name::<DataModel>(1), "1");
    }

    #[rstest]
    #[case(0, "VALID")]
    #[case(11, "MVCC_READ_CONFLICT")]
    #[case(254, "NOT_VALIDATED")]
    #[case(255, "INVALID_OTHER_REASON")]
    #[case(100, "100")]
    fn test_validation_code_names(#[case] value: i32, #[case] expected: &str) {
        assert_eq!(enum_name::<TxValidationCode>(value), expected);
    }
}
