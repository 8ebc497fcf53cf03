use ber::{Node, NodeLength};
use serde::Serialize;

use crate::utils::format_hex_preview;

const PREVIEW_BYTES: usize = 16;

/// Options shared by the text and structured renderers.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RenderOptions {
    /// Show the first bytes of every leaf.
    pub(crate) content: bool,
}

/// Formats a TLV tree the way lapo.it/asn1js prints it: one line per
/// node, two spaces of indentation per level.
pub(crate) fn format_tree(nodes: &[Node], data: &[u8], options: RenderOptions) -> String {
    let mut output = String::new();
    for node in nodes {
        format_node(node, data, 0, options, &mut output);
    }
    output
}

fn format_node(
    node: &Node,
    data: &[u8],
    depth: usize,
    options: RenderOptions,
    output: &mut String,
) {
    output.push_str(&"  ".repeat(depth));
    output.push_str(&format!("{} @{}", node.tag(), node.start_position()));
    let length = match node.length() {
        NodeLength::Definite(length) => format!("+{length}"),
        NodeLength::Indefinite { consumed } => format!(" (indefinite, {consumed})"),
    };
    output.push_str(&length);
    if node.tag().is_constructed() {
        output.push_str(" (constructed)");
    } else if node.is_encapsulating() {
        output.push_str(" (encapsulates)");
    }
    if options.content && node.children().is_none() {
        if let Some(content) = node.content(data).filter(|c| !c.is_empty()) {
            output.push_str(": ");
            output.push_str(&format_hex_preview(content, PREVIEW_BYTES));
        }
    }
    output.push('\n');

    for child in node.children().unwrap_or_default() {
        format_node(child, data, depth + 1, options, output);
    }
}

/// Serializable mirror of a [`Node`] for JSON and YAML output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct NodeView {
    tag: u8,
    name: String,
    offset: usize,
    header: usize,
    length: usize,
    indefinite: bool,
    constructed: bool,
    encapsulates: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<NodeView>>,
}

impl NodeView {
    pub(crate) fn new(node: &Node, data: &[u8], options: RenderOptions) -> Self {
        let content = if options.content && node.children().is_none() {
            node.content(data)
                .map(|c| format_hex_preview(c, PREVIEW_BYTES))
        } else {
            None
        };
        NodeView {
            tag: node.tag().byte(),
            name: node.tag().to_string(),
            offset: node.start_position(),
            header: node.header_length(),
            length: node.length().span(),
            indefinite: node.length().is_indefinite(),
            constructed: node.tag().is_constructed(),
            encapsulates: node.is_encapsulating(),
            content,
            children: node.children().map(|children| {
                children
                    .iter()
                    .map(|child| NodeView::new(child, data, options))
                    .collect()
            }),
        }
    }
}
