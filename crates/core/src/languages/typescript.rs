//! TypeScript / TSX matchers.
//!
//! Node kinds follow tree-sitter-typescript's node-types.json. TSX shares the
//! same table; its grammar only adds JSX nodes.

use tree_sitter::Node;

use crate::matchers::extractors::simple_selection;
use crate::matchers::{
    ChildSelector, ContainerMatchers, MatchOutcome, NodeMatcher, NodePredicate, NodeUnwrapper,
    ScopeMatchers, SelectionExtractor, cascading_matcher, child_node_matcher, container_matchers,
    custom, delimited_matcher, has_type, possibly_wrapped_node,
};

// Subtypes of `expression` and `primary_expression`
const EXPRESSION_TYPES: &[&str] = &[
    "array",
    "arrow_function",
    "as_expression",
    "assignment_expression",
    "augmented_assignment_expression",
    "await_expression",
    "binary_expression",
    "call_expression",
    "class",
    "false",
    "function",
    "function_expression",
    "generator_function",
    "identifier",
    "import",
    "internal_module",
    "member_expression",
    "meta_property",
    "new_expression",
    "non_null_expression",
    "null",
    "number",
    "object",
    "parenthesized_expression",
    "primary_expression",
    "regex",
    "satisfies_expression",
    "string",
    "subscript_expression",
    "super",
    "template_string",
    "ternary_expression",
    "this",
    "true",
    "type_assertion",
    "unary_expression",
    "undefined",
    "update_expression",
    "yield_expression",
];

// Subtypes of `statement` and `declaration`
const STATEMENT_TYPES: &[&str] = &[
    "abstract_class_declaration",
    "ambient_declaration",
    "break_statement",
    "class_declaration",
    "continue_statement",
    "debugger_statement",
    "declaration",
    "do_statement",
    "empty_statement",
    "enum_declaration",
    "export_statement",
    "expression_statement",
    "for_in_statement",
    "for_statement",
    "function_declaration",
    "function_signature",
    "generator_function_declaration",
    "if_statement",
    "import_alias",
    "import_statement",
    "interface_declaration",
    "internal_module",
    "labeled_statement",
    "lexical_declaration",
    "module",
    "return_statement",
    "statement_block",
    "switch_statement",
    "throw_statement",
    "try_statement",
    "type_alias_declaration",
    "variable_declaration",
    "while_statement",
    "with_statement",
];

fn is_expression(node: &Node) -> bool {
    EXPRESSION_TYPES.contains(&node.kind())
}

fn is_container_value(node: &Node) -> bool {
    is_expression(node)
        || matches!(
            node.kind(),
            "spread_element" | "shorthand_property_identifier" | "method_definition"
        )
}

fn is_export(node: &Node) -> bool {
    node.kind() == "export_statement"
}

/// `kinds`, possibly behind `export` / `export default`
fn possibly_exported_declaration(kinds: &[&'static str]) -> NodeMatcher {
    possibly_wrapped_node(
        NodePredicate::new(is_export),
        NodePredicate::kinds(kinds),
        NodeUnwrapper::fields(&["declaration", "value"]),
    )
}

/// `const foo = () => ...` with a single declarator
fn is_named_arrow_function(node: &Node) -> bool {
    if node.kind() != "lexical_declaration" || node.named_child_count() != 1 {
        return false;
    }
    node.named_child(0)
        .filter(|child| child.kind() == "variable_declarator")
        .and_then(|declarator| declarator.child_by_field_name("value"))
        .is_some_and(|value| value.kind() == "arrow_function")
}

/// Type node of a `: T` (or `?: T`) annotation among the node's children
fn type_node<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let annotation = node.children(&mut cursor).find(|child| {
        matches!(child.kind(), "type_annotation" | "opting_type_annotation")
    })?;
    let count = annotation.child_count();
    annotation.child(count.checked_sub(1)?)
}

pub struct TypeScriptMatchers {
    containers: ContainerMatchers,
}

impl Default for TypeScriptMatchers {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeScriptMatchers {
    pub fn new() -> Self {
        Self {
            containers: container_matchers(
                &["object"],
                &["array"],
                NodePredicate::new(is_container_value),
            ),
        }
    }
}

impl ScopeMatchers for TypeScriptMatchers {
    fn statement(&self) -> NodeMatcher {
        possibly_exported_declaration(STATEMENT_TYPES)
    }

    fn if_statement(&self) -> NodeMatcher {
        has_type(&["if_statement"])
    }

    fn class(&self) -> NodeMatcher {
        possibly_exported_declaration(&["class_declaration", "abstract_class_declaration", "class"])
    }

    fn arrow_function(&self) -> NodeMatcher {
        has_type(&["arrow_function"])
    }

    fn function_call(&self) -> NodeMatcher {
        has_type(&["call_expression", "new_expression"])
    }

    fn named_function(&self) -> NodeMatcher {
        cascading_matcher(vec![
            // function foo() {}
            possibly_exported_declaration(&[
                "function_declaration",
                "generator_function_declaration",
                "method_definition",
            ]),
            // class Foo { bar = () => "hello"; }
            custom(|_, node| {
                let is_arrow_field = node.kind() == "public_field_definition"
                    && node
                        .child_by_field_name("value")
                        .is_some_and(|value| value.kind() == "arrow_function");
                if is_arrow_field {
                    MatchOutcome::single(simple_selection(node))
                } else {
                    MatchOutcome::NoMatch
                }
            }),
            // const foo = () => "hello"
            possibly_wrapped_node(
                NodePredicate::new(is_export),
                NodePredicate::new(is_named_arrow_function),
                NodeUnwrapper::fields(&["declaration"]),
            ),
        ])
    }

    fn argument_or_parameter(&self) -> NodeMatcher {
        delimited_matcher(
            NodePredicate::new(|node| {
                let is_argument = node
                    .parent()
                    .is_some_and(|parent| parent.kind() == "arguments")
                    && (is_expression(node) || node.kind() == "spread_element");
                is_argument || matches!(node.kind(), "optional_parameter" | "required_parameter")
            }),
            NodePredicate::kinds(&[",", "(", ")"]),
            ", ",
        )
    }

    fn comment(&self) -> NodeMatcher {
        has_type(&["comment"])
    }

    fn type_annotation(&self) -> NodeMatcher {
        cascading_matcher(vec![
            // Typed parameters, properties, variables and function returns
            child_node_matcher(
                ChildSelector::new(type_node),
                SelectionExtractor::WithLeadingDelimiter,
            ),
            // Type aliases and interfaces
            possibly_exported_declaration(&["type_alias_declaration", "interface_declaration"]),
        ])
    }

    fn collection(&self) -> NodeMatcher {
        self.containers.collection.clone()
    }

    fn collection_key(&self) -> NodeMatcher {
        self.containers.collection_key.clone()
    }

    fn collection_value(&self) -> NodeMatcher {
        self.containers.collection_value.clone()
    }

    fn collection_item(&self) -> NodeMatcher {
        self.containers.collection_item.clone()
    }
}
