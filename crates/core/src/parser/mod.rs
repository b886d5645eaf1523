//! Source parsing and syntax tree helpers built on tree-sitter

pub mod source_parser;
pub mod utils;

// Re-export commonly used items
pub use source_parser::SourceParser;
pub use utils::ancestors;
