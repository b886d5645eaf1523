use tree_sitter::Node;

/// `node` followed by each of its ancestors up to the root, at most `limit` nodes
pub fn ancestors(node: Node<'_>, limit: usize) -> impl Iterator<Item = Node<'_>> {
    std::iter::successors(Some(node), |current| current.parent()).take(limit)
}

/// Named children only
pub fn named_children<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

pub fn parent_kind_is(node: &Node, kinds: &[&str]) -> bool {
    node.parent()
        .is_some_and(|parent| kinds.contains(&parent.kind()))
}
