use std::collections::BTreeMap;

use crate::document::{Document, DocumentId};
use crate::error::InferenceError;
use crate::types::{Mark, TextRange};

/// A range in a known document that a mark resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub document: DocumentId,
    pub range: TextRange,
}

impl Anchor {
    pub fn new(document: DocumentId, range: TextRange) -> Self {
        Self { document, range }
    }
}

/// Editor state a command runs against: the documents it may touch, the
/// active document, and the selections marks refer to.
#[derive(Debug, Clone, Default)]
pub struct InferenceContext<'doc> {
    documents: BTreeMap<DocumentId, &'doc Document>,
    active: Option<DocumentId>,
    cursors: Vec<Anchor>,
    that: Vec<Anchor>,
    source: Vec<Anchor>,
}

impl<'doc> InferenceContext<'doc> {
    /// Context with `document` as the active document and no selections
    pub fn new(document: &'doc Document) -> Self {
        Self {
            active: Some(document.id().clone()),
            ..Default::default()
        }
        .with_document(document)
    }

    pub fn with_document(mut self, document: &'doc Document) -> Self {
        self.documents.insert(document.id().clone(), document);
        self
    }

    /// Adds a cursor selection in the active document
    pub fn with_cursor(mut self, range: TextRange) -> Self {
        if let Some(active) = self.active.clone() {
            self.cursors.push(Anchor::new(active, range));
        }
        self
    }

    pub fn with_cursors(mut self, cursors: Vec<Anchor>) -> Self {
        self.cursors = cursors;
        self
    }

    pub fn with_that(mut self, that: Vec<Anchor>) -> Self {
        self.that = that;
        self
    }

    pub fn with_source(mut self, source: Vec<Anchor>) -> Self {
        self.source = source;
        self
    }

    pub fn document(&self, id: &DocumentId) -> Option<&'doc Document> {
        self.documents.get(id).copied()
    }

    pub fn active_document(&self) -> Option<&'doc Document> {
        self.active.as_ref().and_then(|id| self.document(id))
    }

    pub fn cursors(&self) -> &[Anchor] {
        &self.cursors
    }

    /// Anchors `mark` stands for, in order
    pub fn anchors(&self, mark: &Mark, index: usize) -> Result<Vec<Anchor>, InferenceError> {
        match mark {
            Mark::Cursor => Ok(self.cursors.clone()),
            Mark::That => Ok(self.that.clone()),
            Mark::Source => Ok(self.source.clone()),
            Mark::Nothing => Ok(Vec::new()),
            Mark::Range { start, end } => {
                let document = self.active_document().ok_or_else(|| InferenceError::InvalidMark {
                    index,
                    reason: "needs an active document".to_string(),
                })?;
                let range = document.range(*start, *end).ok_or_else(|| {
                    InferenceError::InvalidMark {
                        index,
                        reason: format!(
                            "{}:{}-{}:{} lies outside {}",
                            start.line, start.character, end.line, end.character,
                            document.id()
                        ),
                    }
                })?;
                Ok(vec![Anchor::new(document.id().clone(), range)])
            }
        }
    }
}
