use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::impl_lenient_deserialize;

/// Languages with a node matcher registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageId {
    Json,
    TypeScript,
    Tsx,
    Rust,
}

impl_lenient_deserialize!(
    LanguageId,
    Json => "json",
    TypeScript => "typescript",
    Tsx => "tsx",
    Rust => "rust"
);

impl LanguageId {
    pub const ALL: [LanguageId; 4] = [
        LanguageId::Json,
        LanguageId::TypeScript,
        LanguageId::Tsx,
        LanguageId::Rust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Json => "json",
            LanguageId::TypeScript => "typescript",
            LanguageId::Tsx => "tsx",
            LanguageId::Rust => "rust",
        }
    }

    /// Grammar used to parse documents of this language
    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            LanguageId::Json => tree_sitter_json::LANGUAGE.into(),
            LanguageId::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            LanguageId::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            LanguageId::Rust => tree_sitter_rust::LANGUAGE.into(),
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" | "jsonc" => Some(LanguageId::Json),
            "ts" | "mts" | "cts" => Some(LanguageId::TypeScript),
            "tsx" => Some(LanguageId::Tsx),
            "rs" => Some(LanguageId::Rust),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
