//! Transaction read-write sets, grouped by chaincode namespace.

use serde::Serialize;

use crate::decode::{from_repeated, Decode};
use crate::error::Result;
use crate::kvrwset::{HashedRwSet, KvRwSet};
use crate::proto::rwset as pb;
use crate::proto::{enum_name, rwset::tx_read_write_set::DataModel};
use crate::serde_utils::hex_bytes;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadWriteSet {
    /// Symbolic data model name, `KV` for every current Fabric release
    pub data_model: String,
    pub ns_rwsets: Vec<NsReadWriteSet>,
}

impl Decode for ReadWriteSet {
    type Proto = pb::TxReadWriteSet;
    const LAYER: &'static str = "TxReadWriteSet";

    fn from_proto(proto: pb::TxReadWriteSet) -> Result<Self> {
        Ok(ReadWriteSet {
            data_model: enum_name::<DataModel>(proto.data_model),
            ns_rwsets: from_repeated(proto.ns_rwset)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NsReadWriteSet {
    pub namespace: String,
    pub rwset: KvRwSet,
    pub collection_hashed_rwsets: Vec<CollectionHashedReadWriteSet>,
}

impl Decode for NsReadWriteSet {
    type Proto = pb::NsReadWriteSet;
    const LAYER: &'static str = "NsReadWriteSet";

    fn from_proto(proto: pb::NsReadWriteSet) -> Result<Self> {
        tracing::debug!(namespace = %proto.namespace, "namespace rwset");
        Ok(NsReadWriteSet {
            rwset: KvRwSet::decode(&proto.rwset)?,
            collection_hashed_rwsets: from_repeated(proto.collection_hashed_rwset)?,
            namespace: proto.namespace,
        })
    }
}

/// Hashed view of one private data collection; the plaintext never appears on the ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionHashedReadWriteSet {
    pub collection_name: String,
    pub hashed_rwset: HashedRwSet,
    #[serde(serialize_with = "hex_bytes")]
    pub pvt_rwset_hash: Vec<u8>,
}

impl Decode for CollectionHashedReadWriteSet {
    type Proto = pb::CollectionHashedReadWriteSet;
    const LAYER: &'static str = "CollectionHashedReadWriteSet";

    fn from_proto(proto: pb::CollectionHashedReadWriteSet) -> Result<Self> {
        Ok(CollectionHashedReadWriteSet {
            collection_name: proto.collection_name,
            hashed_rwset: HashedRwSet::decode(&proto.hashed_rwset)?,
            pvt_rwset_hash: proto.pvt_rwset_hash,
        })
    }
}
