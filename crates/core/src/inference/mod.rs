//! Target inference: expands partial targets into fully resolved ones.
//!
//! Targets are visited once, left to right. Range starts come before range
//! ends and list elements are visited in order; every visited primitive
//! contributes its explicit fields to the carry-forward state that later
//! primitives fall back on. Scope lookup walks parent links from the anchor
//! node, bounded by the configured depth, and takes the `ordinal`-th match.

mod context;
mod fields;

pub use context::{Anchor, InferenceContext};

use tracing::{debug, trace};

use crate::cache::LanguageCache;
use crate::config::{Config, DEFAULT_MAX_ANCESTOR_DEPTH};
use crate::document::Document;
use crate::error::InferenceError;
use crate::matchers::{MatchContext, MatchOutcome, Registries};
use crate::parser::ancestors;
use crate::types::{
    ActionPreference, FullTarget, ListElementTarget, Mark, PartialListElement,
    PartialPrimitiveTarget, PartialRangeTarget, PartialTarget, PrimitiveTarget, RangeTarget,
    ScopeType, Selection, TargetScope, TargetSelection, TargetShape, TextRange,
};
use fields::{CarriedFields, EffectiveConstraints};

/// The inference engine: language registries plus the language cache
#[derive(Debug)]
pub struct TargetInference {
    registries: Registries,
    languages: LanguageCache,
    max_depth: usize,
}

impl Default for TargetInference {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-target state shared by every primitive of one top-level target
struct TargetState<'p> {
    index: usize,
    preference: &'p ActionPreference,
    constraints: EffectiveConstraints,
}

impl TargetInference {
    pub fn new() -> Self {
        Self {
            registries: Registries::new(),
            languages: LanguageCache::default(),
            max_depth: DEFAULT_MAX_ANCESTOR_DEPTH,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            registries: Registries::new(),
            languages: LanguageCache::new(config.cache_capacity),
            max_depth: config.max_ancestor_depth.max(1),
        }
    }

    pub fn with_registries(mut self, registries: Registries) -> Self {
        self.registries = registries;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn language_cache(&self) -> &LanguageCache {
        &self.languages
    }

    /// Resolves `targets` against `context`, one preference per target.
    ///
    /// The output depends only on the arguments and the documents' trees.
    pub fn infer(
        &mut self,
        context: &InferenceContext<'_>,
        targets: &[PartialTarget],
        preferences: &[ActionPreference],
    ) -> Result<Vec<FullTarget>, InferenceError> {
        if targets.len() != preferences.len() {
            return Err(InferenceError::PreferenceCount {
                expected: targets.len(),
                actual: preferences.len(),
            });
        }

        let mut carried = CarriedFields::default();
        let mut resolved = Vec::with_capacity(targets.len());
        for (index, (target, preference)) in targets.iter().zip(preferences).enumerate() {
            let state = TargetState {
                index,
                preference,
                constraints: EffectiveConstraints::at(preferences, index),
            };
            let full = self.infer_target(context, target, &mut carried, &state)?;
            check_shape(&full, preference, index)?;
            debug!(
                "Target {index} resolved to {} selection(s)",
                full.selection_count()
            );
            resolved.push(full);
        }
        Ok(resolved)
    }

    fn infer_target(
        &mut self,
        context: &InferenceContext<'_>,
        target: &PartialTarget,
        carried: &mut CarriedFields,
        state: &TargetState<'_>,
    ) -> Result<FullTarget, InferenceError> {
        match target {
            PartialTarget::Primitive(primitive) => self
                .infer_primitive(context, primitive, carried, state)
                .map(FullTarget::Primitive),
            PartialTarget::Range(range) => self
                .infer_range(context, range, carried, state)
                .map(FullTarget::Range),
            PartialTarget::List { elements } => {
                let mut resolved = Vec::with_capacity(elements.len());
                for element in elements {
                    resolved.push(match element {
                        PartialListElement::Primitive(primitive) => ListElementTarget::Primitive(
                            self.infer_primitive(context, primitive, carried, state)?,
                        ),
                        PartialListElement::Range(range) => ListElementTarget::Range(
                            self.infer_range(context, range, carried, state)?,
                        ),
                    });
                }
                Ok(FullTarget::List { elements: resolved })
            }
        }
    }

    fn infer_range(
        &mut self,
        context: &InferenceContext<'_>,
        range: &PartialRangeTarget,
        carried: &mut CarriedFields,
        state: &TargetState<'_>,
    ) -> Result<RangeTarget, InferenceError> {
        let start = self.infer_primitive(context, &range.start, carried, state)?;
        let end = self.infer_primitive(context, &range.end, carried, state)?;

        let index = state.index;
        let (first_start, first_end) = match (start.selections.first(), end.selections.first()) {
            (Some(first_start), Some(first_end)) => (first_start, first_end),
            _ => return Err(InferenceError::EmptyRangeEndpoint { index }),
        };
        if first_start.document != first_end.document {
            return Err(InferenceError::RangeAcrossDocuments { index });
        }
        let covering = covering_range(
            &first_start.range,
            &first_end.range,
            range.exclude_start,
            range.exclude_end,
        );

        Ok(RangeTarget {
            start,
            end,
            exclude_start: range.exclude_start,
            exclude_end: range.exclude_end,
            covering,
        })
    }

    fn infer_primitive(
        &mut self,
        context: &InferenceContext<'_>,
        partial: &PartialPrimitiveTarget,
        carried: &mut CarriedFields,
        state: &TargetState<'_>,
    ) -> Result<PrimitiveTarget, InferenceError> {
        let index = state.index;
        let fields = carried.resolve(partial, state.preference, state.constraints, index)?;
        trace!("Target {index} fields: {fields:?}");

        let anchors = context.anchors(&fields.mark, index)?;
        if anchors.is_empty() && fields.mark != Mark::Nothing {
            return Err(InferenceError::NoAnchor { index });
        }

        let mut selections = Vec::new();
        for anchor in anchors {
            let document =
                context
                    .document(&anchor.document)
                    .ok_or_else(|| InferenceError::UnknownDocument {
                        index,
                        document: anchor.document.to_string(),
                    })?;

            match fields.scope {
                TargetScope::Exact => {
                    let selection = Selection::new(anchor.range);
                    selections.push(TargetSelection {
                        document: anchor.document.clone(),
                        node_kind: None,
                        range: fields.position.apply(&selection),
                        selection,
                    });
                }
                TargetScope::Enclosing { scope_type } => {
                    let (node_kind, matched) = self.enclosing_scope(
                        document,
                        &anchor.range,
                        scope_type,
                        fields.ordinal,
                        index,
                    )?;
                    selections.extend(matched.into_iter().map(|selection| TargetSelection {
                        document: anchor.document.clone(),
                        node_kind: Some(node_kind.clone()),
                        range: fields.position.apply(&selection),
                        selection,
                    }));
                }
            }
        }

        Ok(PrimitiveTarget {
            mark: fields.mark,
            scope: fields.scope,
            position: fields.position,
            ordinal: fields.ordinal,
            selections,
        })
    }

    /// Selections of the `ordinal`-th ancestor of the anchor node matching
    /// `scope_type`, with that ancestor's kind
    fn enclosing_scope(
        &mut self,
        document: &Document,
        range: &TextRange,
        scope_type: ScopeType,
        ordinal: usize,
        index: usize,
    ) -> Result<(String, Vec<Selection>), InferenceError> {
        let language = self.languages.resolve(document);
        let unsupported = InferenceError::UnsupportedScope {
            index,
            language,
            scope_type,
        };
        let matcher = match self.registries.get(language) {
            Some(registry) if registry.supports(scope_type) => registry.matcher(scope_type),
            _ => return Err(unsupported),
        };
        let no_enclosing = InferenceError::NoEnclosingScope {
            index,
            scope_type,
            anchor: range.start,
        };
        let anchor_node = document.node_at(range).ok_or_else(|| no_enclosing.clone())?;

        let ctx = MatchContext::new(document);
        let mut remaining = ordinal;
        for (depth, candidate) in ancestors(anchor_node, self.max_depth).enumerate() {
            match matcher.evaluate(&ctx, &candidate) {
                MatchOutcome::Matched(selections) => {
                    remaining -= 1;
                    trace!(
                        "{scope_type} matched {} at depth {depth}, {remaining} to go",
                        candidate.kind()
                    );
                    if remaining == 0 {
                        return Ok((candidate.kind().to_string(), selections));
                    }
                }
                MatchOutcome::NoMatch => {}
                MatchOutcome::NotSupported => return Err(unsupported),
            }
        }
        Err(no_enclosing)
    }
}

/// Span between the first ranges of a range target's endpoints, in document
/// order. Excluded endpoints contribute only their inner edge.
fn covering_range(
    start: &TextRange,
    end: &TextRange,
    exclude_start: bool,
    exclude_end: bool,
) -> TextRange {
    let (left, right, exclude_left, exclude_right) = if start.start_byte <= end.start_byte {
        (start, end, exclude_start, exclude_end)
    } else {
        (end, start, exclude_end, exclude_start)
    };
    let begin = if exclude_left {
        left.end_point()
    } else {
        left.start_point()
    };
    let finish = if exclude_right {
        right.start_point()
    } else {
        right.end_point()
    };
    if finish.start_byte < begin.start_byte {
        begin
    } else {
        begin.union(&finish)
    }
}

fn check_shape(
    target: &FullTarget,
    preference: &ActionPreference,
    index: usize,
) -> Result<(), InferenceError> {
    let count = target.selection_count();
    if !preference.accepts_multiple && count > 1 {
        return Err(InferenceError::MultipleTargets { index, count });
    }
    if preference.shape == TargetShape::Range
        && (count == 0 || target.ranges().iter().any(TextRange::is_empty))
    {
        return Err(InferenceError::RangeRequired { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentId;
    use crate::types::Position;

    fn range(line: u32, start: u32, end: u32, start_byte: usize, end_byte: usize) -> TextRange {
        TextRange::new(
            Position::new(line, start),
            Position::new(line, end),
            start_byte,
            end_byte,
        )
    }

    #[test]
    fn test_covering_range_orders_and_excludes() {
        let a = range(0, 0, 3, 0, 3);
        let b = range(0, 10, 14, 10, 14);

        let covering = covering_range(&a, &b, false, false);
        assert_eq!((covering.start_byte, covering.end_byte), (0, 14));

        let reversed = covering_range(&b, &a, false, false);
        assert_eq!(reversed, covering);

        let exclusive = covering_range(&a, &b, true, true);
        assert_eq!((exclusive.start_byte, exclusive.end_byte), (3, 10));

        let overlapping = covering_range(&a, &a, true, true);
        assert!(overlapping.is_empty());
        assert_eq!(overlapping.start_byte, 3);
    }

    #[test]
    fn test_check_shape() {
        let selection = |r: TextRange| TargetSelection {
            document: DocumentId::new("a"),
            node_kind: None,
            selection: Selection::new(r),
            range: r,
        };
        let target = FullTarget::Primitive(PrimitiveTarget {
            mark: Mark::Cursor,
            scope: TargetScope::Exact,
            position: Default::default(),
            ordinal: 1,
            selections: vec![selection(range(0, 1, 1, 1, 1)), selection(range(0, 2, 4, 2, 4))],
        });

        assert!(check_shape(&target, &ActionPreference::permissive(), 0).is_ok());
        assert_eq!(
            check_shape(&target, &ActionPreference::permissive().single(), 3),
            Err(InferenceError::MultipleTargets { index: 3, count: 2 })
        );
        assert_eq!(
            check_shape(
                &target,
                &ActionPreference::permissive().with_shape(TargetShape::Range),
                0
            ),
            Err(InferenceError::RangeRequired { index: 0 })
        );

        let empty = FullTarget::List { elements: vec![] };
        assert!(check_shape(&empty, &ActionPreference::permissive(), 0).is_ok());
        assert_eq!(
            check_shape(
                &empty,
                &ActionPreference::permissive().with_shape(TargetShape::Range),
                1
            ),
            Err(InferenceError::RangeRequired { index: 1 })
        );
    }
}
