//! Key/value read-write sets for a single namespace.
//!
//! Sequence order is preserved exactly as it appears on the wire; it reflects the order in
//! which the chaincode performed its reads and writes. Hashed sets (private data collections)
//! carry digests in place of keys and values and are copied through opaquely.

use serde::Serialize;

use crate::decode::{from_optional, from_repeated, Decode};
use crate::error::Result;
use crate::proto::kvrwset as pb;
use crate::serde_utils::{hex_bytes, hex_bytes_list};

/// Height of the transaction that last committed a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub block_num: u64,
    pub tx_num: u64,
}

impl Decode for Version {
    type Proto = pb::Version;
    const LAYER: &'static str = "Version";

    fn from_proto(proto: pb::Version) -> Result<Self> {
        Ok(Version {
            block_num: proto.block_num,
            tx_num: proto.tx_num,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvRead {
    pub key: String,
    /// Zero when the key did not exist at simulation time
    pub version: Version,
}

impl Decode for KvRead {
    type Proto = pb::KvRead;
    const LAYER: &'static str = "KVRead";

    fn from_proto(proto: pb::KvRead) -> Result<Self> {
        Ok(KvRead {
            key: proto.key,
            version: from_optional(proto.version)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvWrite {
    pub key: String,
    pub is_delete: bool,
    #[serde(serialize_with = "hex_bytes")]
    pub value: Vec<u8>,
}

impl Decode for KvWrite {
    type Proto = pb::KvWrite;
    const LAYER: &'static str = "KVWrite";

    fn from_proto(proto: pb::KvWrite) -> Result<Self> {
        Ok(KvWrite {
            key: proto.key,
            is_delete: proto.is_delete,
            value: proto.value,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvMetadataEntry {
    pub name: String,
    #[serde(serialize_with = "hex_bytes")]
    pub value: Vec<u8>,
}

impl Decode for KvMetadataEntry {
    type Proto = pb::KvMetadataEntry;
    const LAYER: &'static str = "KVMetadataEntry";

    fn from_proto(proto: pb::KvMetadataEntry) -> Result<Self> {
        Ok(KvMetadataEntry {
            name: proto.name,
            value: proto.value,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvMetadataWrite {
    pub key: String,
    pub entries: Vec<KvMetadataEntry>,
}

impl Decode for KvMetadataWrite {
    type Proto = pb::KvMetadataWrite;
    const LAYER: &'static str = "KVMetadataWrite";

    fn from_proto(proto: pb::KvMetadataWrite) -> Result<Self> {
        Ok(KvMetadataWrite {
            key: proto.key,
            entries: from_repeated(proto.entries)?,
        })
    }
}

/// The reads a range query observed, either verbatim or as a Merkle summary when there were
/// too many to record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RangeQueryReads {
    RawReads {
        reads: Vec<KvRead>,
    },
    #[serde(rename_all = "camelCase")]
    MerkleSummary {
        max_degree: u32,
        max_level: u32,
        #[serde(serialize_with = "hex_bytes_list")]
        max_level_hashes: Vec<Vec<u8>>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQueryInfo {
    pub start_key: String,
    pub end_key: String,
    pub itr_exhausted: bool,
    pub reads_info: Option<RangeQueryReads>,
}

impl Decode for RangeQueryInfo {
    type Proto = pb::RangeQueryInfo;
    const LAYER: &'static str = "RangeQueryInfo";

    fn from_proto(proto: pb::RangeQueryInfo) -> Result<Self> {
        use pb::range_query_info::ReadsInfo;

        let reads_info = match proto.reads_info {
            Some(ReadsInfo::RawReads(raw)) => Some(RangeQueryReads::RawReads {
                reads: from_repeated(raw.kv_reads)?,
            }),
            Some(ReadsInfo::ReadsMerkleHashes(summary)) => Some(RangeQueryReads::MerkleSummary {
                max_degree: summary.max_degree,
                max_level: summary.max_level,
                max_level_hashes: summary.max_level_hashes,
            }),
            None => None,
        };

        Ok(RangeQueryInfo {
            start_key: proto.start_key,
            end_key: proto.end_key,
            itr_exhausted: proto.itr_exhausted,
            reads_info,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvRwSet {
    pub reads: Vec<KvRead>,
    pub range_queries_info: Vec<RangeQueryInfo>,
    pub writes: Vec<KvWrite>,
    pub metadata_writes: Vec<KvMetadataWrite>,
}

impl Decode for KvRwSet {
    type Proto = pb::KvrwSet;
    const LAYER: &'static str = "KVRWSet";

    fn from_proto(proto: pb::KvrwSet) -> Result<Self> {
        let rwset = KvRwSet {
            reads: from_repeated(proto.reads)?,
            range_queries_info: from_repeated(proto.range_queries_info)?,
            writes: from_repeated(proto.writes)?,
            metadata_writes: from_repeated(proto.metadata_writes)?,
        };
        tracing::debug!(
            reads = rwset.reads.len(),
            range_queries = rwset.range_queries_info.len(),
            writes = rwset.writes.len(),
            metadata_writes = rwset.metadata_writes.len(),
            "kv rwset"
        );
        Ok(rwset)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvReadHash {
    #[serde(serialize_with = "hex_bytes")]
    pub key_hash: Vec<u8>,
    pub version: Version,
}

impl Decode for KvReadHash {
    type Proto = pb::KvReadHash;
    const LAYER: &'static str = "KVReadHash";

    fn from_proto(proto: pb::KvReadHash) -> Result<Self> {
        Ok(KvReadHash {
            key_hash: proto.key_hash,
            version: from_optional(proto.version)?,
        })
    }
}

/// `is_delete` and `is_purge` are independent flags, any combination is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvWriteHash {
    #[serde(serialize_with = "hex_bytes")]
    pub key_hash: Vec<u8>,
    pub is_delete: bool,
    #[serde(serialize_with = "hex_bytes")]
    pub value_hash: Vec<u8>,
    pub is_purge: bool,
}

impl Decode for KvWriteHash {
    type Proto = pb::KvWriteHash;
    const LAYER: &'static str = "KVWriteHash";

    fn from_proto(proto: pb::KvWriteHash) -> Result<Self> {
        Ok(KvWriteHash {
            key_hash: proto.key_hash,
            is_delete: proto.is_delete,
            value_hash: proto.value_hash,
            is_purge: proto.is_purge,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvMetadataWriteHash {
    #[serde(serialize_with = "hex_bytes")]
    pub key_hash: Vec<u8>,
    pub entries: Vec<KvMetadataEntry>,
}

impl Decode for KvMetadataWriteHash {
    type Proto = pb::KvMetadataWriteHash;
    const LAYER: &'static str = "KVMetadataWriteHash";

    fn from_proto(proto: pb::KvMetadataWriteHash) -> Result<Self> {
        Ok(KvMetadataWriteHash {
            key_hash: proto.key_hash,
            entries: from_repeated(proto.entries)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashedRwSet {
    pub hashed_reads: Vec<KvReadHash>,
    pub hashed_writes: Vec<KvWriteHash>,
    pub metadata_writes: Vec<KvMetadataWriteHash>,
}

impl Decode for HashedRwSet {
    type Proto = pb::HashedRwSet;
    const LAYER: &'static str = "HashedRWSet";

    fn from_proto(proto: pb::HashedRwSet) -> Result<Self> {
        Ok(HashedRwSet {
            hashed_reads: from_repeated(proto.hashed_reads)?,
            hashed_writes: from_repeated(proto.hashed_writes)?,
            metadata_writes: from_repeated(proto.metadata_writes)?,
        })
    }
}
