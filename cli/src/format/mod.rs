//! Tree rendering for display nodes

use anyhow::Result;
use colored::{Color, Colorize};
use ptree::print_config::PrintConfig;
use ptree::style::Style;
use ptree::TreeBuilder;
use std::io::Write;
use wasm_fabric::parse_node::{Node, Primitive};

/// Buffers longer than this are shortened in tree output
const MAX_BUFFER_BYTES: usize = 64;

/// Colors used for each part of a tree line
#[derive(Debug, Clone)]
pub struct ColorScheme {
    enabled: bool,
    pub label: Color,
    pub string: Color,
    pub number: Color,
    pub buffer: Color,
    pub boolean: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            enabled: true,
            label: Color::Cyan,
            string: Color::Green,
            number: Color::Yellow,
            buffer: Color::Magenta,
            boolean: Color::Blue,
        }
    }
}

impl ColorScheme {
    pub fn no_color() -> Self {
        ColorScheme {
            enabled: false,
            ..Default::default()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn format_value(value: &Primitive, scheme: &ColorScheme) -> String {
    match value {
        Primitive::String(s) => scheme.paint(s, scheme.string),
        Primitive::Buffer(bytes) if bytes.len() > MAX_BUFFER_BYTES => {
            let text = format!(
                "{}... ({} bytes)",
                hex::encode(&bytes[..MAX_BUFFER_BYTES]),
                bytes.len()
            );
            scheme.paint(&text, scheme.buffer)
        }
        Primitive::Buffer(_) => scheme.paint(&value.to_string(), scheme.buffer),
        Primitive::Boolean(_) => scheme.paint(&value.to_string(), scheme.boolean),
        _ => scheme.paint(&value.to_string(), scheme.number),
    }
}

fn format_line(node: &Node, scheme: &ColorScheme) -> String {
    let label = scheme.paint(&node.label, scheme.label);
    match node.value {
        Primitive::None => label,
        _ => format!("{}: {}", label, format_value(&node.value, scheme)),
    }
}

fn add_children(builder: &mut TreeBuilder, node: &Node, scheme: &ColorScheme) {
    for child in &node.children {
        let line = format_line(child, scheme);
        if child.children.is_empty() {
            builder.add_empty_child(line);
        } else {
            builder.begin_child(line);
            add_children(builder, child, scheme);
            builder.end_child();
        }
    }
}

/// Write `node` as an indented tree to `out`
pub fn write_tree_with_scheme<W: Write>(node: &Node, scheme: &ColorScheme, out: W) -> Result<()> {
    let mut builder = TreeBuilder::new(format_line(node, scheme));
    add_children(&mut builder, node, scheme);
    let tree = builder.build();
    let config = if scheme.enabled {
        PrintConfig::default()
    } else {
        PrintConfig {
            branch: Style::default(),
            leaf: Style::default(),
            ..PrintConfig::default()
        }
    };
    ptree::write_tree_with(&tree, out, &config)?;
    Ok(())
}

/// Print `node` as an indented tree to stdout
pub fn render_tree_with_scheme(node: &Node, scheme: &ColorScheme) -> Result<()> {
    write_tree_with_scheme(node, scheme, std::io::stdout().lock())
}
