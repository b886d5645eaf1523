use serde::{Deserialize, Serialize};

use super::position::TextRange;

/// Delimiter and list metadata attached to a matched range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionContext {
    /// The range is one element of a separator-delimited list
    #[serde(default)]
    pub is_in_delimited_list: bool,
    /// Separator to use when inserting a new sibling element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containing_list_delimiter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_delimiter: Option<TextRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_delimiter: Option<TextRange>,
    /// The whole enclosing construct, when the content is only its interior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_range: Option<TextRange>,
}

/// A concrete range produced by a node matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub range: TextRange,
    #[serde(default)]
    pub context: SelectionContext,
}

impl Selection {
    pub fn new(range: TextRange) -> Self {
        Self {
            range,
            context: SelectionContext::default(),
        }
    }

    pub fn with_context(range: TextRange, context: SelectionContext) -> Self {
        Self { range, context }
    }

    /// Range to delete so that the surrounding construct stays well formed.
    ///
    /// A trailing delimiter is preferred over a leading one, so removing the
    /// first element of a list does not eat the opening bracket side.
    pub fn removal_range(&self) -> TextRange {
        if let Some(outer) = self.context.outer_range {
            return outer;
        }
        if let Some(trailing) = self.context.trailing_delimiter {
            return self.range.union(&trailing);
        }
        if let Some(leading) = self.context.leading_delimiter {
            return self.range.union(&leading);
        }
        self.range
    }
}
