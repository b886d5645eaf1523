//! One parsed version of a source document.

use serde::{Deserialize, Serialize};
use std::fmt;
use tree_sitter::{Node, Tree};

use crate::types::{LanguageId, Position, TextRange};

/// Identity of a document, usually its path or URI
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An immutable snapshot: source text plus the tree parsed from it
#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,
    language: LanguageId,
    source: String,
    version: String,
    tree: Tree,
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(id: DocumentId, language: LanguageId, source: String, tree: Tree) -> Self {
        let version = format!("{:x}", md5::compute(source.as_bytes()));
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            id,
            language,
            source,
            version,
            tree,
            line_starts,
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Content hash; changes whenever the text changes
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Text covered by `range`, empty when the range is out of bounds
    pub fn text(&self, range: &TextRange) -> &str {
        self.source
            .get(range.start_byte..range.end_byte)
            .unwrap_or_default()
    }

    /// Byte offset of `position`, if it lies inside the document
    pub fn offset_at(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        let line_start = *self.line_starts.get(line)?;
        let line_end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        let offset = line_start + position.character as usize;
        (offset <= line_end).then_some(offset)
    }

    /// Range between two positions, ordered
    pub fn range(&self, start: Position, end: Position) -> Option<TextRange> {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        let start_byte = self.offset_at(start)?;
        let end_byte = self.offset_at(end)?;
        Some(TextRange::new(start, end, start_byte, end_byte))
    }

    /// Smallest node, named or anonymous, spanning `range`
    pub fn node_at(&self, range: &TextRange) -> Option<Node<'_>> {
        self.root_node()
            .descendant_for_byte_range(range.start_byte, range.end_byte)
    }
}
