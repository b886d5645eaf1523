//! Node matchers: how a scope type maps onto syntax-tree shapes.
//!
//! A [`NodeMatcher`] is a closed set of combinator variants. Evaluating one
//! against a candidate node yields a [`MatchOutcome`], which keeps "this node
//! is not the scope" ([`MatchOutcome::NoMatch`]) apart from "this language does
//! not model the scope at all" ([`MatchOutcome::NotSupported`]).

pub mod combinators;
pub mod container;
pub mod extractors;
pub mod registry;

use std::fmt;
use std::sync::Arc;
use tree_sitter::Node;

use crate::document::Document;
use crate::types::{Selection, TextRange};

pub use combinators::{
    cascading_matcher, child_node_matcher, custom, delimited_matcher, has_type, not_supported,
    possibly_wrapped_node,
};
pub use container::{ContainerMatcher, ContainerMatchers, ContainerRole, container_matchers};
pub use extractors::SelectionExtractor;
pub use registry::{Registries, Registry, ScopeMatchers};

/// Result of evaluating a matcher against one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Non-empty, ordered selections
    Matched(Vec<Selection>),
    NoMatch,
    NotSupported,
}

impl MatchOutcome {
    /// `Matched`, or `NoMatch` when `selections` is empty
    pub fn matched(selections: Vec<Selection>) -> Self {
        if selections.is_empty() {
            MatchOutcome::NoMatch
        } else {
            MatchOutcome::Matched(selections)
        }
    }

    pub fn single(selection: Selection) -> Self {
        MatchOutcome::Matched(vec![selection])
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

impl From<Option<Selection>> for MatchOutcome {
    fn from(selection: Option<Selection>) -> Self {
        selection.map_or(MatchOutcome::NoMatch, MatchOutcome::single)
    }
}

/// Read-only view of the document a node belongs to
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'doc> {
    document: &'doc Document,
}

impl<'doc> MatchContext<'doc> {
    pub fn new(document: &'doc Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &'doc Document {
        self.document
    }

    pub fn text(&self, range: &TextRange) -> &'doc str {
        self.document.text(range)
    }
}

type PredicateFn = dyn for<'t> Fn(&Node<'t>) -> bool + Send + Sync;
type UnwrapFn = dyn for<'t> Fn(&Node<'t>) -> Vec<Node<'t>> + Send + Sync;
type ChildFn = dyn for<'t> Fn(&Node<'t>) -> Option<Node<'t>> + Send + Sync;
type CustomFn = dyn for<'t> Fn(&MatchContext<'_>, &Node<'t>) -> MatchOutcome + Send + Sync;

/// Shared test on a single node
#[derive(Clone)]
pub struct NodePredicate(Arc<PredicateFn>);

impl NodePredicate {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'t> Fn(&Node<'t>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// True when the node kind is one of `kinds`
    pub fn kinds(kinds: &[&'static str]) -> Self {
        let kinds = kinds.to_vec();
        Self::new(move |node| kinds.contains(&node.kind()))
    }

    pub fn test(&self, node: &Node) -> bool {
        (self.0)(node)
    }
}

impl fmt::Debug for NodePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NodePredicate")
    }
}

/// Nodes wrapped by a wrapper node, e.g. the declaration inside an export
#[derive(Clone)]
pub struct NodeUnwrapper(Arc<UnwrapFn>);

impl NodeUnwrapper {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'t> Fn(&Node<'t>) -> Vec<Node<'t>> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Children reached through the given field names
    pub fn fields(fields: &[&'static str]) -> Self {
        let fields = fields.to_vec();
        Self::new(move |node| {
            fields
                .iter()
                .filter_map(|field| node.child_by_field_name(field))
                .collect()
        })
    }

    pub fn unwrap<'t>(&self, node: &Node<'t>) -> Vec<Node<'t>> {
        (self.0)(node)
    }
}

/// Picks the designated child of a node
#[derive(Clone)]
pub struct ChildSelector(Arc<ChildFn>);

impl ChildSelector {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'t> Fn(&Node<'t>) -> Option<Node<'t>> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn select<'t>(&self, node: &Node<'t>) -> Option<Node<'t>> {
        (self.0)(node)
    }
}

/// Escape hatch for language-specific shapes no combinator covers
#[derive(Clone)]
pub struct CustomMatcher(Arc<CustomFn>);

impl CustomMatcher {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'t> Fn(&MatchContext<'_>, &Node<'t>) -> MatchOutcome + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }
}

/// How one scope type is recognized in one language
#[derive(Clone)]
pub enum NodeMatcher {
    /// The language does not model this scope
    NotSupported,
    /// Node kind is one of the listed kinds
    HasType(Vec<&'static str>),
    /// First matcher that matches wins
    Cascading(Vec<NodeMatcher>),
    PossiblyWrapped {
        is_wrapper: NodePredicate,
        is_target: NodePredicate,
        unwrap: NodeUnwrapper,
    },
    Delimited {
        is_node: NodePredicate,
        is_delimiter: NodePredicate,
        joiner: String,
    },
    ChildNode {
        child: ChildSelector,
        extractor: SelectionExtractor,
    },
    Container(ContainerMatcher),
    Custom(CustomMatcher),
}

impl NodeMatcher {
    /// Evaluates the matcher against `node`. Never panics for a valid node.
    pub fn evaluate(&self, ctx: &MatchContext<'_>, node: &Node) -> MatchOutcome {
        match self {
            NodeMatcher::NotSupported => MatchOutcome::NotSupported,
            NodeMatcher::HasType(kinds) => combinators::match_has_type(kinds, node),
            NodeMatcher::Cascading(matchers) => {
                combinators::match_cascading(matchers, ctx, node)
            }
            NodeMatcher::PossiblyWrapped {
                is_wrapper,
                is_target,
                unwrap,
            } => combinators::match_possibly_wrapped(is_wrapper, is_target, unwrap, node),
            NodeMatcher::Delimited {
                is_node,
                is_delimiter,
                joiner,
            } => {
                if is_node.test(node) {
                    MatchOutcome::single(combinators::delimited_selection(
                        ctx,
                        node,
                        is_delimiter,
                        joiner,
                    ))
                } else {
                    MatchOutcome::NoMatch
                }
            }
            NodeMatcher::ChildNode { child, extractor } => child
                .select(node)
                .map(|target| extractor.extract(&target))
                .into(),
            NodeMatcher::Container(container) => container.evaluate(ctx, node),
            NodeMatcher::Custom(custom) => (custom.0)(ctx, node),
        }
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, NodeMatcher::NotSupported)
    }
}

impl fmt::Debug for NodeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeMatcher::NotSupported => f.write_str("NotSupported"),
            NodeMatcher::HasType(kinds) => f.debug_tuple("HasType").field(kinds).finish(),
            NodeMatcher::Cascading(matchers) => {
                f.debug_tuple("Cascading").field(matchers).finish()
            }
            NodeMatcher::PossiblyWrapped { .. } => f.write_str("PossiblyWrapped"),
            NodeMatcher::Delimited { joiner, .. } => f
                .debug_struct("Delimited")
                .field("joiner", joiner)
                .finish_non_exhaustive(),
            NodeMatcher::ChildNode { extractor, .. } => f
                .debug_struct("ChildNode")
                .field("extractor", extractor)
                .finish_non_exhaustive(),
            NodeMatcher::Container(container) => {
                f.debug_tuple("Container").field(&container.role()).finish()
            }
            NodeMatcher::Custom(_) => f.write_str("Custom"),
        }
    }
}
