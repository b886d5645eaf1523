use serde::{Deserialize, Serialize};

use super::scope_type::ScopeType;
use super::target::{Mark, PositionModifier, TargetField};

/// How an omitted field may be filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldConstraint {
    /// Carry forward from earlier targets, then fall back to defaults
    Inherit,
    /// The partial target must state the field itself
    RequireExplicit,
}

/// Per-field rule of an action preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct FieldPreference<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<FieldConstraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<T>,
}

impl<T> Default for FieldPreference<T> {
    fn default() -> Self {
        Self {
            constraint: None,
            default: None,
        }
    }
}

impl<T> FieldPreference<T> {
    pub fn require_explicit() -> Self {
        Self {
            constraint: Some(FieldConstraint::RequireExplicit),
            default: None,
        }
    }

    pub fn defaulting_to(value: T) -> Self {
        Self {
            constraint: None,
            default: Some(value),
        }
    }

    fn is_unset(&self) -> bool {
        self.constraint.is_none() && self.default.is_none()
    }
}

/// Shape of target an action needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetShape {
    /// Every resolved range must be non-empty
    Range,
    /// An empty range (a bare position) is enough
    #[default]
    Position,
}

/// What an executing action requires from the target at one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPreference {
    #[serde(default, skip_serializing_if = "FieldPreference::is_unset")]
    pub mark: FieldPreference<Mark>,
    #[serde(default, skip_serializing_if = "FieldPreference::is_unset")]
    pub scope_type: FieldPreference<ScopeType>,
    #[serde(default, skip_serializing_if = "FieldPreference::is_unset")]
    pub position: FieldPreference<PositionModifier>,
    #[serde(default)]
    pub shape: TargetShape,
    #[serde(default = "default_accepts_multiple")]
    pub accepts_multiple: bool,
}

fn default_accepts_multiple() -> bool {
    true
}

impl Default for ActionPreference {
    fn default() -> Self {
        Self::permissive()
    }
}

impl ActionPreference {
    /// No constraints, no defaults, any shape, any number of selections
    pub fn permissive() -> Self {
        Self {
            mark: FieldPreference::default(),
            scope_type: FieldPreference::default(),
            position: FieldPreference::default(),
            shape: TargetShape::Position,
            accepts_multiple: true,
        }
    }

    pub fn constraint(&self, field: TargetField) -> Option<FieldConstraint> {
        match field {
            TargetField::Mark => self.mark.constraint,
            TargetField::ScopeType => self.scope_type.constraint,
            TargetField::Position => self.position.constraint,
        }
    }

    pub fn requiring(mut self, field: TargetField) -> Self {
        let constraint = Some(FieldConstraint::RequireExplicit);
        match field {
            TargetField::Mark => self.mark.constraint = constraint,
            TargetField::ScopeType => self.scope_type.constraint = constraint,
            TargetField::Position => self.position.constraint = constraint,
        }
        self
    }

    pub fn with_shape(mut self, shape: TargetShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn single(mut self) -> Self {
        self.accepts_multiple = false;
        self
    }
}
