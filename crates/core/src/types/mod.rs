pub mod language;
pub mod position;
pub mod preference;
pub mod scope_type;
pub mod selection;
pub mod target;

// Re-export commonly used types
pub use language::LanguageId;
pub use position::{Position, TextRange};
pub use preference::{ActionPreference, FieldConstraint, FieldPreference, TargetShape};
pub use scope_type::ScopeType;
pub use selection::{Selection, SelectionContext};
pub use target::{
    FullTarget, ListElementTarget, Mark, PartialListElement, PartialPrimitiveTarget,
    PartialRangeTarget, PartialTarget, PositionModifier, PrimitiveTarget, RangeTarget,
    TargetField, TargetScope, TargetSelection,
};
