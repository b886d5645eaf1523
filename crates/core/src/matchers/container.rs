//! Matchers for map- and list-like containers, shared across languages.
//!
//! A language supplies its object-like container kinds, its array-like
//! container kinds, and a predicate recognizing value nodes. From those,
//! [`container_matchers`] derives the `collection`, `collection_key`,
//! `collection_value` and `collection_item` matchers.
//!
//! * A *pair* is a child of an object-like container carrying both `key` and
//!   `value` fields.
//! * Every value child of an array-like container is both an item and a value.
//! * Items are comma-delimited; brackets only mark the list boundaries.

use std::sync::Arc;
use tree_sitter::Node;

use super::combinators::delimited_selection;
use super::extractors::selection_with_leading_delimiter;
use super::{MatchContext, MatchOutcome, NodeMatcher, NodePredicate};
use crate::parser::utils::{named_children, parent_kind_is};
use crate::types::{Selection, SelectionContext, TextRange};

const ITEM_JOINER: &str = ", ";

/// Which container scope a matcher resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerRole {
    Collection,
    Key,
    Value,
    Item,
}

#[derive(Debug)]
struct ContainerKinds {
    object_types: Vec<&'static str>,
    array_types: Vec<&'static str>,
    is_value: NodePredicate,
    is_delimiter: NodePredicate,
}

/// One container role bound to a language's container grammar
#[derive(Debug, Clone)]
pub struct ContainerMatcher {
    kinds: Arc<ContainerKinds>,
    role: ContainerRole,
}

/// The four container matchers of one language
#[derive(Debug, Clone)]
pub struct ContainerMatchers {
    pub collection: NodeMatcher,
    pub collection_key: NodeMatcher,
    pub collection_value: NodeMatcher,
    pub collection_item: NodeMatcher,
}

pub fn container_matchers(
    object_types: &[&'static str],
    array_types: &[&'static str],
    is_value: NodePredicate,
) -> ContainerMatchers {
    let kinds = Arc::new(ContainerKinds {
        object_types: object_types.to_vec(),
        array_types: array_types.to_vec(),
        is_value,
        is_delimiter: NodePredicate::kinds(&[",", "{", "}", "[", "]", "(", ")"]),
    });
    let matcher = |role| {
        NodeMatcher::Container(ContainerMatcher {
            kinds: Arc::clone(&kinds),
            role,
        })
    };

    ContainerMatchers {
        collection: matcher(ContainerRole::Collection),
        collection_key: matcher(ContainerRole::Key),
        collection_value: matcher(ContainerRole::Value),
        collection_item: matcher(ContainerRole::Item),
    }
}

impl ContainerMatcher {
    pub fn role(&self) -> ContainerRole {
        self.role
    }

    pub(crate) fn evaluate(&self, ctx: &MatchContext<'_>, node: &Node) -> MatchOutcome {
        match self.role {
            ContainerRole::Collection => self.match_collection(node).into(),
            ContainerRole::Key => self.match_key(node).into(),
            ContainerRole::Value => self.match_value(ctx, node).into(),
            ContainerRole::Item => self.match_item(ctx, node).into(),
        }
    }

    fn is_container(&self, node: &Node) -> bool {
        let kind = node.kind();
        self.kinds.object_types.contains(&kind) || self.kinds.array_types.contains(&kind)
    }

    /// Key and value of `node` when it is an entry of an object-like container
    fn pair_parts<'t>(&self, node: &Node<'t>) -> Option<(Node<'t>, Node<'t>)> {
        if !parent_kind_is(node, &self.kinds.object_types) {
            return None;
        }
        let key = node.child_by_field_name("key")?;
        let value = node.child_by_field_name("value")?;
        Some((key, value))
    }

    fn is_array_value(&self, node: &Node) -> bool {
        parent_kind_is(node, &self.kinds.array_types) && self.kinds.is_value.test(node)
    }

    fn is_object_entry(&self, node: &Node) -> bool {
        parent_kind_is(node, &self.kinds.object_types)
            && (self.pair_parts(node).is_some() || self.kinds.is_value.test(node))
    }

    fn match_collection(&self, node: &Node) -> Option<Selection> {
        if !self.is_container(node) {
            return None;
        }

        let outer = TextRange::of_node(node);
        let elements = named_children(node);
        let interior = match (elements.first(), elements.last()) {
            (Some(first), Some(last)) => TextRange::new(
                first.start_position().into(),
                last.end_position().into(),
                first.start_byte(),
                last.end_byte(),
            ),
            // Empty container: an empty range just inside the opening bracket
            _ => match node.child(0) {
                Some(open) => TextRange::of_node(&open).end_point(),
                None => outer.start_point(),
            },
        };

        Some(Selection::with_context(
            interior,
            SelectionContext {
                outer_range: Some(outer),
                ..Default::default()
            },
        ))
    }

    fn match_key(&self, node: &Node) -> Option<Selection> {
        let (key, value) = self.pair_parts(node)?;
        Some(Selection::with_context(
            TextRange::of_node(&key),
            SelectionContext {
                trailing_delimiter: Some(TextRange::between(&key, &value)),
                ..Default::default()
            },
        ))
    }

    fn match_value(&self, ctx: &MatchContext<'_>, node: &Node) -> Option<Selection> {
        if self.is_array_value(node) {
            return Some(delimited_selection(
                ctx,
                node,
                &self.kinds.is_delimiter,
                ITEM_JOINER,
            ));
        }
        let (_, value) = self.pair_parts(node)?;
        Some(selection_with_leading_delimiter(&value))
    }

    fn match_item(&self, ctx: &MatchContext<'_>, node: &Node) -> Option<Selection> {
        if self.is_array_value(node) || self.is_object_entry(node) {
            Some(delimited_selection(
                ctx,
                node,
                &self.kinds.is_delimiter,
                ITEM_JOINER,
            ))
        } else {
            None
        }
    }
}
