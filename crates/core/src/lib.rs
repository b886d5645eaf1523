//! scope-resolver - Resolves language-agnostic scopes into concrete text ranges
//!
//! This crate provides functionality to:
//! - Parse source documents with tree-sitter (JSON, TypeScript/TSX, Rust)
//! - Map scope types (statement, class, collection item, ...) onto syntax-tree shapes
//! - Expand chains of partial edit targets into fully resolved targets
pub mod cache;
pub mod config;
pub mod document;
pub mod error;
pub mod inference;
pub mod languages;
pub mod matchers;
pub mod parser;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, InferenceError, Result};
pub use types::*;

// Re-export main API components
pub use cache::LanguageCache;
pub use config::Config;
pub use document::{Document, DocumentId};
pub use inference::{Anchor, InferenceContext, TargetInference};
pub use matchers::{MatchOutcome, NodeMatcher, Registries, Registry, ScopeMatchers};
pub use parser::SourceParser;
