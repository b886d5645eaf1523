use tree_sitter::Node;

use crate::types::{Selection, SelectionContext, TextRange};

/// Turns a matched node into a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionExtractor {
    /// The node's own range
    Simple,
    /// The node, plus the token before it (`: T`, `-> T`) as leading delimiter
    WithLeadingDelimiter,
}

impl SelectionExtractor {
    pub fn extract(&self, node: &Node) -> Selection {
        match self {
            SelectionExtractor::Simple => simple_selection(node),
            SelectionExtractor::WithLeadingDelimiter => selection_with_leading_delimiter(node),
        }
    }
}

pub fn simple_selection(node: &Node) -> Selection {
    Selection::new(TextRange::of_node(node))
}

/// The leading delimiter starts where the node before the delimiter token
/// ends, or at the delimiter token itself when it opens its parent.
pub fn selection_with_leading_delimiter(node: &Node) -> Selection {
    let leading_delimiter = node.prev_sibling().map(|delimiter| match delimiter.prev_sibling() {
        Some(before) => TextRange::between(&before, node),
        None => TextRange::new(
            delimiter.start_position().into(),
            node.start_position().into(),
            delimiter.start_byte(),
            node.start_byte(),
        ),
    });

    Selection::with_context(
        TextRange::of_node(node),
        SelectionContext {
            leading_delimiter,
            ..Default::default()
        },
    )
}
