use serde::{Deserialize, Serialize};

/// Represents a position in a text document using 0-based line and character indices.
///
/// `character` counts bytes from the start of the line, matching the columns
/// reported by tree-sitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl From<tree_sitter::Point> for Position {
    fn from(point: tree_sitter::Point) -> Self {
        Self {
            line: point.row as u32,
            character: point.column as u32,
        }
    }
}

impl From<Position> for tree_sitter::Point {
    fn from(position: Position) -> Self {
        tree_sitter::Point {
            row: position.line as usize,
            column: position.character as usize,
        }
    }
}

/// A half-open range of text, carrying both positions and byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
    pub start_byte: usize,
    pub end_byte: usize,
}

impl TextRange {
    pub fn new(start: Position, end: Position, start_byte: usize, end_byte: usize) -> Self {
        Self {
            start,
            end,
            start_byte,
            end_byte,
        }
    }

    /// The range covered by a syntax node
    pub fn of_node(node: &tree_sitter::Node) -> Self {
        Self {
            start: node.start_position().into(),
            end: node.end_position().into(),
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
        }
    }

    /// The gap between the end of `before` and the start of `after`
    pub fn between(before: &tree_sitter::Node, after: &tree_sitter::Node) -> Self {
        Self {
            start: before.end_position().into(),
            end: after.start_position().into(),
            start_byte: before.end_byte(),
            end_byte: after.start_byte(),
        }
    }

    /// An empty range located at `position`
    pub fn empty_at(position: Position, byte: usize) -> Self {
        Self::new(position, position, byte, byte)
    }

    /// Empty range at the start of this range
    pub fn start_point(&self) -> Self {
        Self::empty_at(self.start, self.start_byte)
    }

    /// Empty range at the end of this range
    pub fn end_point(&self) -> Self {
        Self::empty_at(self.end, self.end_byte)
    }

    pub fn is_empty(&self) -> bool {
        self.start_byte == self.end_byte
    }

    /// Smallest range covering both `self` and `other`
    pub fn union(&self, other: &TextRange) -> Self {
        let (start, start_byte) = if other.start_byte < self.start_byte {
            (other.start, other.start_byte)
        } else {
            (self.start, self.start_byte)
        };
        let (end, end_byte) = if other.end_byte > self.end_byte {
            (other.end, other.end_byte)
        } else {
            (self.end, self.end_byte)
        };
        Self::new(start, end, start_byte, end_byte)
    }
}
