//! Building blocks languages compose their matchers from.

use tree_sitter::Node;

use super::extractors::simple_selection;
use super::{
    ChildSelector, CustomMatcher, MatchContext, MatchOutcome, NodeMatcher, NodePredicate,
    NodeUnwrapper, SelectionExtractor,
};
use crate::types::{Selection, SelectionContext, TextRange};

/// Matches nodes whose kind is one of `kinds`; the selection is the node itself
pub fn has_type(kinds: &[&'static str]) -> NodeMatcher {
    NodeMatcher::HasType(kinds.to_vec())
}

/// Tries `matchers` in order and keeps the first match
pub fn cascading_matcher(matchers: Vec<NodeMatcher>) -> NodeMatcher {
    NodeMatcher::Cascading(matchers)
}

/// Matches `is_target` nodes, looking through one level of wrapper
/// (e.g. `export`) so the whole wrapped construct is selected.
pub fn possibly_wrapped_node(
    is_wrapper: NodePredicate,
    is_target: NodePredicate,
    unwrap: NodeUnwrapper,
) -> NodeMatcher {
    NodeMatcher::PossiblyWrapped {
        is_wrapper,
        is_target,
        unwrap,
    }
}

/// Matches list elements and records the separator around them
pub fn delimited_matcher(
    is_node: NodePredicate,
    is_delimiter: NodePredicate,
    joiner: impl Into<String>,
) -> NodeMatcher {
    NodeMatcher::Delimited {
        is_node,
        is_delimiter,
        joiner: joiner.into(),
    }
}

pub fn child_node_matcher(child: ChildSelector, extractor: SelectionExtractor) -> NodeMatcher {
    NodeMatcher::ChildNode { child, extractor }
}

pub fn not_supported() -> NodeMatcher {
    NodeMatcher::NotSupported
}

pub fn custom<F>(f: F) -> NodeMatcher
where
    F: for<'t> Fn(&MatchContext<'_>, &Node<'t>) -> MatchOutcome + Send + Sync + 'static,
{
    NodeMatcher::Custom(CustomMatcher::new(f))
}

pub(crate) fn match_has_type(kinds: &[&'static str], node: &Node) -> MatchOutcome {
    if kinds.contains(&node.kind()) {
        MatchOutcome::single(simple_selection(node))
    } else {
        MatchOutcome::NoMatch
    }
}

pub(crate) fn match_cascading(
    matchers: &[NodeMatcher],
    ctx: &MatchContext<'_>,
    node: &Node,
) -> MatchOutcome {
    matchers
        .iter()
        .map(|matcher| matcher.evaluate(ctx, node))
        .find(MatchOutcome::is_match)
        .unwrap_or(MatchOutcome::NoMatch)
}

pub(crate) fn match_possibly_wrapped(
    is_wrapper: &NodePredicate,
    is_target: &NodePredicate,
    unwrap: &NodeUnwrapper,
    node: &Node,
) -> MatchOutcome {
    // A wrapped target is left for the walk to pick up at the wrapper
    if node.parent().is_some_and(|parent| is_wrapper.test(&parent)) {
        return MatchOutcome::NoMatch;
    }

    if is_wrapper.test(node) {
        let wraps_target = unwrap
            .unwrap(node)
            .iter()
            .any(|wrapped| is_target.test(wrapped));
        return if wraps_target {
            MatchOutcome::single(simple_selection(node))
        } else {
            MatchOutcome::NoMatch
        };
    }

    if is_target.test(node) {
        MatchOutcome::single(simple_selection(node))
    } else {
        MatchOutcome::NoMatch
    }
}

/// Selection of a list element with the separator on each side.
///
/// Brackets are delimiters too: a neighbouring delimiter only counts when an
/// element sits on its far side, so list boundaries are never absorbed.
pub(crate) fn delimited_selection(
    ctx: &MatchContext<'_>,
    node: &Node,
    is_delimiter: &NodePredicate,
    joiner: &str,
) -> Selection {
    let trailing_delimiter = node
        .next_sibling()
        .filter(|next| is_delimiter.test(next))
        .and_then(|next| next.next_sibling())
        .filter(|after| !is_delimiter.test(after))
        .map(|after| TextRange::between(node, &after));

    let leading_delimiter = node
        .prev_sibling()
        .filter(|prev| is_delimiter.test(prev))
        .and_then(|prev| prev.prev_sibling())
        .filter(|before| !is_delimiter.test(before))
        .map(|before| TextRange::between(&before, node));

    let containing_list_delimiter = trailing_delimiter
        .or(leading_delimiter)
        .map(|range| ctx.text(&range).to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| joiner.to_string());

    Selection::with_context(
        TextRange::of_node(node),
        SelectionContext {
            is_in_delimited_list: true,
            containing_list_delimiter: Some(containing_list_delimiter),
            leading_delimiter,
            trailing_delimiter,
            outer_range: None,
        },
    )
}
