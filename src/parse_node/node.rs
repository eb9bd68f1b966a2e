use std::fmt;

use serde::Serialize;

use crate::serde_utils::hex_bytes;

/// Leaf value of a display node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Primitive {
    None,
    Boolean(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I32(i32),
    I64(i64),
    String(String),
    Buffer(#[serde(serialize_with = "hex_bytes")] Vec<u8>),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::None => Ok(()),
            Primitive::Boolean(v) => write!(f, "{}", v),
            Primitive::U8(v) => write!(f, "{}", v),
            Primitive::U16(v) => write!(f, "{}", v),
            Primitive::U32(v) => write!(f, "{}", v),
            Primitive::U64(v) => write!(f, "{}", v),
            Primitive::I32(v) => write!(f, "{}", v),
            Primitive::I64(v) => write!(f, "{}", v),
            Primitive::String(v) => write!(f, "{}", v),
            Primitive::Buffer(v) => write!(f, "{}", hex::encode(v)),
        }
    }
}

/// Labelled tree used for display. Lists are a node holding the element count whose children
/// are labelled `<name>_<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub label: String,
    pub value: Primitive,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(label: impl Into<String>, value: Primitive) -> Self {
        Node {
            label: label.into(),
            value,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn extend(&mut self, children: impl IntoIterator<Item = Node>) {
        self.children.extend(children);
    }

    /// First direct child with the given label
    pub fn child(&self, label: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Primitive::None, "")]
    #[case(Primitive::Boolean(true), "true")]
    #[case(Primitive::U16(0b10_0001), "33")]
    #[case(Primitive::I32(-1), "-1")]
    #[case(Primitive::String("mychannel".to_string()), "mychannel")]
    #[case(Primitive::Buffer(vec![0xde, 0xad, 0xbe, 0xef]), "deadbeef")]
    fn test_primitive_display(#[case] value: Primitive, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_node_json() {
        let mut node = Node::new("write_0", Primitive::None);
        node.add_child(Node::new("key", Primitive::String("asset1".to_string())));
        node.add_child(Node::new("value", Primitive::Buffer(vec![0x01, 0xff])));

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["label"], "write_0");
        assert_eq!(json["value"]["type"], "None");
        assert_eq!(json["children"][0]["value"]["value"], "asset1");
        assert_eq!(json["children"][1]["value"]["type"], "Buffer");
        assert_eq!(json["children"][1]["value"]["value"], "01ff");
    }

    #[test]
    fn test_child_lookup() {
        let mut node = Node::new("header", Primitive::None);
        node.extend([
            Node::new("version", Primitive::I32(1)),
            Node::new("epoch", Primitive::U64(0)),
        ]);
        assert_eq!(node.child("epoch").map(|c| &c.value), Some(&Primitive::U64(0)));
        assert!(node.child("missing").is_none());
    }
}
