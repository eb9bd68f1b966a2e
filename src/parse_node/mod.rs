mod identity;
mod node;
mod rwset;
mod transaction;

pub use identity::{certificate_to_node, identity_to_node, parse_identity_bytes};
pub use node::{Node, Primitive};
pub use rwset::{kv_rwset_to_node, read_write_set_to_node};
pub use transaction::{
    envelope_to_node, parse_envelope_bytes, parse_transaction_bytes,
    processed_transaction_to_node,
};

/// Render `items` as a count node with one `<item>_<index>` child per element.
pub(crate) fn list_to_node<T>(
    label: &str,
    item: &str,
    items: &[T],
    to_node: impl Fn(String, &T) -> Node,
) -> Node {
    let mut node = Node::new(label, Primitive::U64(items.len() as u64));
    node.extend(
        items
            .iter()
            .enumerate()
            .map(|(i, value)| to_node(format!("{}_{}", item, i), value)),
    );
    node
}

/// Render a string-to-bytes map as a count node with one child per key, in key order.
pub(crate) fn bytes_map_to_node<'a>(
    label: &str,
    map: impl ExactSizeIterator<Item = (&'a String, &'a Vec<u8>)>,
) -> Node {
    let mut node = Node::new(label, Primitive::U64(map.len() as u64));
    node.extend(map.map(|(key, value)| Node::new(key.as_str(), Primitive::Buffer(value.clone()))));
    node
}
