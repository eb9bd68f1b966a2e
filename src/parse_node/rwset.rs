use super::{list_to_node, Node, Primitive};
use crate::kvrwset::{
    HashedRwSet, KvMetadataEntry, KvMetadataWrite, KvMetadataWriteHash, KvRead, KvReadHash,
    KvRwSet, KvWrite, KvWriteHash, RangeQueryInfo, RangeQueryReads, Version,
};
use crate::rwset::{CollectionHashedReadWriteSet, NsReadWriteSet, ReadWriteSet};

fn version_to_node(version: &Version) -> Node {
    let mut node = Node::new("version", Primitive::None);
    node.add_child(Node::new("block_num", Primitive::U64(version.block_num)));
    node.add_child(Node::new("tx_num", Primitive::U64(version.tx_num)));
    node
}

fn read_to_node(label: String, read: &KvRead) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("key", Primitive::String(read.key.clone())));
    node.add_child(version_to_node(&read.version));
    node
}

fn write_to_node(label: String, write: &KvWrite) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("key", Primitive::String(write.key.clone())));
    node.add_child(Node::new("is_delete", Primitive::Boolean(write.is_delete)));
    node.add_child(Node::new("value", Primitive::Buffer(write.value.clone())));
    node
}

fn metadata_entry_to_node(label: String, entry: &KvMetadataEntry) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("name", Primitive::String(entry.name.clone())));
    node.add_child(Node::new("value", Primitive::Buffer(entry.value.clone())));
    node
}

fn metadata_write_to_node(label: String, write: &KvMetadataWrite) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("key", Primitive::String(write.key.clone())));
    node.add_child(list_to_node(
        "entries",
        "entry",
        &write.entries,
        metadata_entry_to_node,
    ));
    node
}

fn range_query_to_node(label: String, query: &RangeQueryInfo) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("start_key", Primitive::String(query.start_key.clone())));
    node.add_child(Node::new("end_key", Primitive::String(query.end_key.clone())));
    node.add_child(Node::new(
        "itr_exhausted",
        Primitive::Boolean(query.itr_exhausted),
    ));
    match &query.reads_info {
        Some(RangeQueryReads::RawReads { reads }) => {
            node.add_child(list_to_node("raw_reads", "read", reads, read_to_node));
        }
        Some(RangeQueryReads::MerkleSummary {
            max_degree,
            max_level,
            max_level_hashes,
        }) => {
            let mut summary = Node::new("reads_merkle_hashes", Primitive::None);
            summary.add_child(Node::new("max_degree", Primitive::U32(*max_degree)));
            summary.add_child(Node::new("max_level", Primitive::U32(*max_level)));
            summary.add_child(list_to_node(
                "max_level_hashes",
                "hash",
                max_level_hashes,
                |label, hash| Node::new(label, Primitive::Buffer(hash.clone())),
            ));
            node.add_child(summary);
        }
        None => {}
    }
    node
}

pub fn kv_rwset_to_node(rwset: &KvRwSet) -> Node {
    let mut node = Node::new("rwset", Primitive::None);
    node.add_child(list_to_node("reads", "read", &rwset.reads, read_to_node));
    node.add_child(list_to_node(
        "range_queries_info",
        "range_query",
        &rwset.range_queries_info,
        range_query_to_node,
    ));
    node.add_child(list_to_node("writes", "write", &rwset.writes, write_to_node));
    node.add_child(list_to_node(
        "metadata_writes",
        "metadata_write",
        &rwset.metadata_writes,
        metadata_write_to_node,
    ));
    node
}

fn read_hash_to_node(label: String, read: &KvReadHash) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("key_hash", Primitive::Buffer(read.key_hash.clone())));
    node.add_child(version_to_node(&read.version));
    node
}

fn write_hash_to_node(label: String, write: &KvWriteHash) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("key_hash", Primitive::Buffer(write.key_hash.clone())));
    node.add_child(Node::new("is_delete", Primitive::Boolean(write.is_delete)));
    node.add_child(Node::new(
        "value_hash",
        Primitive::Buffer(write.value_hash.clone()),
    ));
    node.add_child(Node::new("is_purge", Primitive::Boolean(write.is_purge)));
    node
}

fn metadata_write_hash_to_node(label: String, write: &KvMetadataWriteHash) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("key_hash", Primitive::Buffer(write.key_hash.clone())));
    node.add_child(list_to_node(
        "entries",
        "entry",
        &write.entries,
        metadata_entry_to_node,
    ));
    node
}

fn hashed_rwset_to_node(rwset: &HashedRwSet) -> Node {
    let mut node = Node::new("hashed_rwset", Primitive::None);
    node.add_child(list_to_node(
        "hashed_reads",
        "hashed_read",
        &rwset.hashed_reads,
        read_hash_to_node,
    ));
    node.add_child(list_to_node(
        "hashed_writes",
        "hashed_write",
        &rwset.hashed_writes,
        write_hash_to_node,
    ));
    node.add_child(list_to_node(
        "metadata_writes",
        "metadata_write",
        &rwset.metadata_writes,
        metadata_write_hash_to_node,
    ));
    node
}

fn collection_to_node(label: String, collection: &CollectionHashedReadWriteSet) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new(
        "collection_name",
        Primitive::String(collection.collection_name.clone()),
    ));
    node.add_child(hashed_rwset_to_node(&collection.hashed_rwset));
    node.add_child(Node::new(
        "pvt_rwset_hash",
        Primitive::Buffer(collection.pvt_rwset_hash.clone()),
    ));
    node
}

fn ns_rwset_to_node(label: String, ns: &NsReadWriteSet) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new("namespace", Primitive::String(ns.namespace.clone())));
    node.add_child(kv_rwset_to_node(&ns.rwset));
    node.add_child(list_to_node(
        "collection_hashed_rwsets",
        "collection",
        &ns.collection_hashed_rwsets,
        collection_to_node,
    ));
    node
}

pub fn read_write_set_to_node(label: &str, rwset: &ReadWriteSet) -> Node {
    let mut node = Node::new(label, Primitive::None);
    node.add_child(Node::new(
        "data_model",
        Primitive::String(rwset.data_model.clone()),
    ));
    node.add_child(list_to_node(
        "ns_rwsets",
        "ns_rwset",
        &rwset.ns_rwsets,
        ns_rwset_to_node,
    ));
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kv_rwset_lists() {
        let rwset = KvRwSet {
            reads: vec![KvRead {
                key: "asset0".to_string(),
                version: Version {
                    block_num: 7,
                    tx_num: 1,
                },
            }],
            writes: vec![
                KvWrite {
                    key: "asset1".to_string(),
                    is_delete: false,
                    value: vec![0x01],
                },
                KvWrite {
                    key: "asset2".to_string(),
                    is_delete: true,
                    value: Vec::new(),
                },
            ],
            ..Default::default()
        };
        let node = kv_rwset_to_node(&rwset);

        let writes = node.child("writes").unwrap();
        assert_eq!(writes.value, Primitive::U64(2));
        let labels: Vec<_> = writes.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["write_0", "write_1"]);
        assert_eq!(
            writes.children[1].child("is_delete").map(|c| &c.value),
            Some(&Primitive::Boolean(true))
        );

        let version = node.child("reads").unwrap().children[0]
            .child("version")
            .unwrap();
        assert_eq!(
            version.child("block_num").map(|c| &c.value),
            Some(&Primitive::U64(7))
        );
        assert_eq!(node.child("range_queries_info").unwrap().value, Primitive::U64(0));
    }

    #[test]
    fn test_merkle_summary_node() {
        let rwset = KvRwSet {
            range_queries_info: vec![RangeQueryInfo {
                start_key: "a".to_string(),
                end_key: "z".to_string(),
                itr_exhausted: true,
                reads_info: Some(RangeQueryReads::MerkleSummary {
                    max_degree: 50,
                    max_level: 2,
                    max_level_hashes: vec![vec![0xaa; 32]],
                }),
            }],
            ..Default::default()
        };
        let node = kv_rwset_to_node(&rwset);
        let query = &node.child("range_queries_info").unwrap().children[0];
        let summary = query.child("reads_merkle_hashes").unwrap();
        assert_eq!(
            summary.child("max_degree").map(|c| &c.value),
            Some(&Primitive::U32(50))
        );
        assert_eq!(summary.child("max_level_hashes").unwrap().children.len(), 1);
        assert!(query.child("raw_reads").is_none());
    }
}
