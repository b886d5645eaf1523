//! Partial and fully resolved edit targets.
//!
//! Partial targets come from the command layer with any field omitted; the
//! inference engine turns them into [`FullTarget`]s where every field is
//! resolved and concrete selections are attached.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::{Position, TextRange};
use super::scope_type::ScopeType;
use super::selection::Selection;
use crate::document::DocumentId;
use crate::impl_lenient_deserialize;

/// What a target is anchored on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mark {
    /// The current cursor selections
    Cursor,
    /// The targets of the previous command
    That,
    /// The source targets of the previous command
    Source,
    /// No anchor; resolves to no selections
    Nothing,
    /// An explicit range in the active document
    Range { start: Position, end: Position },
}

/// Where, relative to the matched scope, the final range lies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionModifier {
    #[default]
    Contents,
    Entire,
    Before,
    After,
}

impl_lenient_deserialize!(
    PositionModifier,
    Contents => "contents",
    Entire => "entire",
    Before => "before",
    After => "after"
);

impl PositionModifier {
    /// Final range for `selection` under this modifier
    pub fn apply(&self, selection: &Selection) -> TextRange {
        match self {
            PositionModifier::Contents => selection.range,
            PositionModifier::Entire => selection.removal_range(),
            PositionModifier::Before => selection.range.start_point(),
            PositionModifier::After => selection.range.end_point(),
        }
    }
}

/// Target fields that take part in carry-forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetField {
    Mark,
    ScopeType,
    Position,
}

impl_lenient_deserialize!(
    TargetField,
    Mark => "mark",
    ScopeType => "scopetype",
    Position => "position"
);

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetField::Mark => f.write_str("mark"),
            TargetField::ScopeType => f.write_str("scope_type"),
            TargetField::Position => f.write_str("position"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPrimitiveTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_type: Option<ScopeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionModifier>,
    /// Which enclosing match to take, 1 being the innermost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<usize>,
}

impl PartialPrimitiveTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.mark = Some(mark);
        self
    }

    pub fn with_scope(mut self, scope_type: ScopeType) -> Self {
        self.scope_type = Some(scope_type);
        self
    }

    pub fn with_position(mut self, position: PositionModifier) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_ordinal(mut self, ordinal: usize) -> Self {
        self.ordinal = Some(ordinal);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialRangeTarget {
    pub start: PartialPrimitiveTarget,
    pub end: PartialPrimitiveTarget,
    #[serde(default)]
    pub exclude_start: bool,
    #[serde(default)]
    pub exclude_end: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartialListElement {
    Primitive(PartialPrimitiveTarget),
    Range(PartialRangeTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartialTarget {
    Primitive(PartialPrimitiveTarget),
    Range(PartialRangeTarget),
    List { elements: Vec<PartialListElement> },
}

impl From<PartialPrimitiveTarget> for PartialTarget {
    fn from(target: PartialPrimitiveTarget) -> Self {
        PartialTarget::Primitive(target)
    }
}

/// How a resolved target relates to scopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetScope {
    /// The mark's own range, no matcher involved
    Exact,
    /// The enclosing node matching a scope type
    Enclosing { scope_type: ScopeType },
}

impl From<Option<ScopeType>> for TargetScope {
    fn from(scope_type: Option<ScopeType>) -> Self {
        match scope_type {
            Some(scope_type) => TargetScope::Enclosing { scope_type },
            None => TargetScope::Exact,
        }
    }
}

/// One concrete range of a resolved target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSelection {
    pub document: DocumentId,
    /// Kind of the node the scope matcher accepted; none for exact targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_kind: Option<String>,
    pub selection: Selection,
    /// `selection` after applying the position modifier
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveTarget {
    pub mark: Mark,
    pub scope: TargetScope,
    pub position: PositionModifier,
    pub ordinal: usize,
    pub selections: Vec<TargetSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTarget {
    pub start: PrimitiveTarget,
    pub end: PrimitiveTarget,
    pub exclude_start: bool,
    pub exclude_end: bool,
    /// Span from the start target to the end target
    pub covering: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListElementTarget {
    Primitive(PrimitiveTarget),
    Range(RangeTarget),
}

impl ListElementTarget {
    fn selection_count(&self) -> usize {
        match self {
            ListElementTarget::Primitive(target) => target.selections.len(),
            ListElementTarget::Range(_) => 1,
        }
    }
}

/// A completely resolved target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FullTarget {
    Primitive(PrimitiveTarget),
    Range(RangeTarget),
    List { elements: Vec<ListElementTarget> },
}

impl FullTarget {
    /// Number of disjoint ranges this target stands for
    pub fn selection_count(&self) -> usize {
        match self {
            FullTarget::Primitive(target) => target.selections.len(),
            FullTarget::Range(_) => 1,
            FullTarget::List { elements } => {
                elements.iter().map(ListElementTarget::selection_count).sum()
            }
        }
    }

    /// Final ranges in order
    pub fn ranges(&self) -> Vec<TextRange> {
        match self {
            FullTarget::Primitive(target) => target.selections.iter().map(|s| s.range).collect(),
            FullTarget::Range(target) => vec![target.covering],
            FullTarget::List { elements } => elements
                .iter()
                .flat_map(|element| match element {
                    ListElementTarget::Primitive(target) => {
                        target.selections.iter().map(|s| s.range).collect::<Vec<_>>()
                    }
                    ListElementTarget::Range(target) => vec![target.covering],
                })
                .collect(),
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveTarget> {
        match self {
            FullTarget::Primitive(target) => Some(target),
            _ => None,
        }
    }
}
