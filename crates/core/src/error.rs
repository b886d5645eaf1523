use std::io;

use crate::types::{LanguageId, Position, ScopeType, TargetField};

/// Errors that can occur during scope-resolver operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Typed, recoverable failures of target inference.
///
/// `index` always refers to the position of the top-level partial target in the
/// sequence handed to [`crate::inference::TargetInference::infer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    #[error("target {index}: `{field}` must be given explicitly")]
    MissingField { index: usize, field: TargetField },

    #[error("target {index}: scope `{scope_type}` is not supported for {language}")]
    UnsupportedScope {
        index: usize,
        language: LanguageId,
        scope_type: ScopeType,
    },

    #[error(
        "target {index}: no enclosing `{scope_type}` found from {}:{}",
        .anchor.line + 1,
        .anchor.character + 1
    )]
    NoEnclosingScope {
        index: usize,
        scope_type: ScopeType,
        anchor: Position,
    },

    #[error("expected {expected} action preferences, got {actual}")]
    PreferenceCount { expected: usize, actual: usize },

    #[error("target {index}: action requires a non-empty range")]
    RangeRequired { index: usize },

    #[error("target {index}: action accepts a single target but {count} were resolved")]
    MultipleTargets { index: usize, count: usize },

    #[error("target {index}: range endpoints live in different documents")]
    RangeAcrossDocuments { index: usize },

    #[error("target {index}: range endpoints resolved to no selection")]
    EmptyRangeEndpoint { index: usize },

    #[error("target {index}: unknown document `{document}`")]
    UnknownDocument { index: usize, document: String },

    #[error("target {index}: mark resolves to no selection")]
    NoAnchor { index: usize },

    #[error("target {index}: mark {reason}")]
    InvalidMark { index: usize, reason: String },
}

/// Result type alias for scope-resolver operations
pub type Result<T> = std::result::Result<T, Error>;
