//! `serialize_with` helpers for the decoded records.
//!
//! Byte strings render as lowercase hex, serial numbers as decimal strings.

use std::collections::BTreeMap;

use num_bigint::BigUint;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::Serializer;

pub fn hex_bytes<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

pub fn hex_bytes_list<S: Serializer>(list: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(list.len()))?;
    for bytes in list {
        seq.serialize_element(&hex::encode(bytes))?;
    }
    seq.end()
}

pub fn hex_bytes_map<S: Serializer>(
    map: &BTreeMap<String, Vec<u8>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map {
        out.serialize_entry(key, &hex::encode(value))?;
    }
    out.end()
}

pub fn decimal<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
