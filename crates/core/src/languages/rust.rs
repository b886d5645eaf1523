use tree_sitter::Node;

use crate::matchers::{
    ChildSelector, ContainerMatchers, NodeMatcher, NodePredicate, ScopeMatchers,
    SelectionExtractor, cascading_matcher, child_node_matcher, container_matchers,
    delimited_matcher, has_type, not_supported,
};

const STATEMENT_TYPES: &[&str] = &[
    "const_item",
    "empty_statement",
    "enum_item",
    "expression_statement",
    "extern_crate_declaration",
    "foreign_mod_item",
    "function_item",
    "function_signature_item",
    "impl_item",
    "let_declaration",
    "macro_definition",
    "mod_item",
    "static_item",
    "struct_item",
    "trait_item",
    "type_item",
    "union_item",
    "use_declaration",
];

const COMMENT_TYPES: &[&str] = &["line_comment", "block_comment"];

// Nodes carrying a `type` field that is an annotation rather than the node's body
const ANNOTATED_TYPES: &[&str] = &[
    "const_item",
    "field_declaration",
    "let_declaration",
    "parameter",
    "static_item",
];

const RETURNING_TYPES: &[&str] = &["closure_expression", "function_item", "function_signature_item"];

fn is_element(node: &Node) -> bool {
    node.is_named() && !COMMENT_TYPES.contains(&node.kind()) && node.kind() != "attribute_item"
}

/// Elements of array and tuple literals; the parts of a repeat array
/// `[x; N]` are not list elements
fn is_collection_element(node: &Node) -> bool {
    let in_repeat_array = node.parent().is_some_and(|parent| {
        parent.kind() == "array_expression" && parent.child_by_field_name("length").is_some()
    });
    is_element(node) && !in_repeat_array
}

fn is_argument_or_parameter(node: &Node) -> bool {
    match node.parent().map(|parent| parent.kind()) {
        Some("arguments") | Some("closure_parameters") => is_element(node),
        Some("parameters") => matches!(
            node.kind(),
            "parameter" | "self_parameter" | "variadic_parameter"
        ),
        _ => false,
    }
}

pub struct RustMatchers {
    containers: ContainerMatchers,
}

impl Default for RustMatchers {
    fn default() -> Self {
        Self::new()
    }
}

impl RustMatchers {
    pub fn new() -> Self {
        Self {
            containers: container_matchers(
                &[],
                &["array_expression", "tuple_expression"],
                NodePredicate::new(is_collection_element),
            ),
        }
    }
}

impl ScopeMatchers for RustMatchers {
    fn statement(&self) -> NodeMatcher {
        has_type(STATEMENT_TYPES)
    }

    fn if_statement(&self) -> NodeMatcher {
        has_type(&["if_expression"])
    }

    fn class(&self) -> NodeMatcher {
        has_type(&["struct_item", "enum_item", "union_item", "trait_item", "impl_item"])
    }

    fn arrow_function(&self) -> NodeMatcher {
        has_type(&["closure_expression"])
    }

    fn function_call(&self) -> NodeMatcher {
        has_type(&["call_expression", "macro_invocation"])
    }

    fn named_function(&self) -> NodeMatcher {
        has_type(&["function_item", "function_signature_item"])
    }

    fn argument_or_parameter(&self) -> NodeMatcher {
        delimited_matcher(
            NodePredicate::new(is_argument_or_parameter),
            NodePredicate::kinds(&[",", "(", ")", "|"]),
            ", ",
        )
    }

    fn comment(&self) -> NodeMatcher {
        has_type(COMMENT_TYPES)
    }

    fn type_annotation(&self) -> NodeMatcher {
        cascading_matcher(vec![
            // let x: T, fn f(x: T), struct fields, consts and statics
            child_node_matcher(
                ChildSelector::new(|node| {
                    if ANNOTATED_TYPES.contains(&node.kind()) {
                        node.child_by_field_name("type")
                    } else {
                        None
                    }
                }),
                SelectionExtractor::WithLeadingDelimiter,
            ),
            // -> T
            child_node_matcher(
                ChildSelector::new(|node| {
                    if RETURNING_TYPES.contains(&node.kind()) {
                        node.child_by_field_name("return_type")
                    } else {
                        None
                    }
                }),
                SelectionExtractor::WithLeadingDelimiter,
            ),
            has_type(&["type_item"]),
        ])
    }

    fn collection(&self) -> NodeMatcher {
        self.containers.collection.clone()
    }

    fn collection_key(&self) -> NodeMatcher {
        // Rust has no key/value literal syntax
        not_supported()
    }

    fn collection_value(&self) -> NodeMatcher {
        self.containers.collection_value.clone()
    }

    fn collection_item(&self) -> NodeMatcher {
        self.containers.collection_item.clone()
    }
}
