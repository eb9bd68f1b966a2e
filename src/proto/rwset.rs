//! `rwset` package: per-namespace read-write sets.

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct TxReadWriteSet {
    #[prost(enumeration = "tx_read_write_set::DataModel", tag = "1")]
    pub data_model: i32,
    #[prost(message, repeated, tag = "2")]
    pub ns_rwset: Vec<NsReadWriteSet>,
}

pub mod tx_read_write_set {
    use prost::Enumeration;

    use crate::proto::EnumName;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
    #[repr(i32)]
    pub enum DataModel {
        Kv = 0,
    }

    impl EnumName for DataModel {
        fn as_str_name(&self) -> &'static str {
            match self {
                DataModel::Kv => "KV",
            }
        }
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct NsReadWriteSet {
    #[prost(string, tag = "1")]
    pub namespace: String,
    /// Marshalled `kvrwset::KvrwSet` for the KV data model
    #[prost(bytes = "vec", tag = "2")]
    pub rwset: Vec<u8>,
    #[prost(message, repeated, tag = "3")]
    pub collection_hashed_rwset: Vec<CollectionHashedReadWriteSet>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CollectionHashedReadWriteSet {
    #[prost(string, tag = "1")]
    pub collection_name: String,
    /// Marshalled `kvrwset::HashedRwSet`
    #[prost(bytes = "vec", tag = "2")]
    pub hashed_rwset: Vec<u8>,
    /// Hash of the whole private read-write set for this collection
    #[prost(bytes = "vec", tag = "3")]
    pub pvt_rwset_hash: Vec<u8>,
}
