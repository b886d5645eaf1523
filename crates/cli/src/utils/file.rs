use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use scope_resolver_core::{Config, Document, SourceParser};

/// Parses `path` with the language its extension (or the config) maps to
pub fn load_document(path: &Path, config: &Config) -> Result<Document> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    let language = config
        .language_for_path(path)
        .with_context(|| format!("No language registered for {}", path.display()))?;
    debug!("Loading {} as {}", path.display(), language);

    let document = SourceParser::new()
        .parse_file(path, language)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(document)
}
