use std::path::Path;
use tracing::debug;
use tree_sitter::Parser;

use crate::{
    document::{Document, DocumentId},
    error::{Error, Result},
    types::LanguageId,
};

/// Parses source text into [`Document`] snapshots for any supported language
pub struct SourceParser {
    parser: Parser,
    current: Option<LanguageId>,
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            current: None,
        }
    }

    fn set_language(&mut self, language: LanguageId) -> Result<()> {
        if self.current == Some(language) {
            return Ok(());
        }
        self.parser
            .set_language(&language.grammar())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        self.current = Some(language);
        Ok(())
    }

    pub fn parse(
        &mut self,
        id: DocumentId,
        language: LanguageId,
        source: impl Into<String>,
    ) -> Result<Document> {
        let source = source.into();
        self.set_language(language)?;
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| Error::ParseError("Failed to parse source code".to_string()))?;
        debug!(
            "Parsed {} as {} ({} bytes, errors: {})",
            id,
            language,
            source.len(),
            tree.root_node().has_error()
        );
        Ok(Document::new(id, language, source, tree))
    }

    /// Reads and parses a file; the path doubles as the document id
    pub fn parse_file(&mut self, path: &Path, language: LanguageId) -> Result<Document> {
        let source = std::fs::read_to_string(path)?;
        self.parse(DocumentId::new(path.to_string_lossy()), language, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_creation() {
        let mut parser = SourceParser::new();
        assert!(parser.set_language(LanguageId::Rust).is_ok());
    }

    #[test]
    fn test_parse_every_language() {
        let mut parser = SourceParser::new();
        let samples = [
            (LanguageId::Json, r#"{"a": [1, 2]}"#, "document"),
            (LanguageId::TypeScript, "const x: number = 1;", "program"),
            (LanguageId::Tsx, "const el = <div />;", "program"),
            (LanguageId::Rust, "fn main() {}", "source_file"),
        ];
        for (language, source, root_kind) in samples {
            let doc = parser
                .parse(DocumentId::new("sample"), language, source)
                .unwrap();
            assert_eq!(doc.root_node().kind(), root_kind);
            assert_eq!(doc.language(), language);
        }
    }

    #[test]
    fn test_parse_empty_source() {
        let mut parser = SourceParser::new();
        let doc = parser.parse(DocumentId::new("empty.ts"), LanguageId::TypeScript, "");
        assert!(doc.is_ok());
    }

    #[test]
    fn test_parse_invalid_syntax() {
        let mut parser = SourceParser::new();
        let doc = parser
            .parse(DocumentId::new("bad.rs"), LanguageId::Rust, "fn main() { let x = ; }")
            .unwrap();
        // Tree-sitter still parses invalid syntax, creating error nodes
        assert!(doc.root_node().has_error());
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "[true]").unwrap();

        let mut parser = SourceParser::new();
        let doc = parser.parse_file(&path, LanguageId::Json).unwrap();
        assert_eq!(doc.source(), "[true]");
        assert_eq!(doc.id().as_str(), path.to_string_lossy());
    }
}
