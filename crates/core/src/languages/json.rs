use crate::matchers::{
    ContainerMatchers, NodeMatcher, NodePredicate, ScopeMatchers, container_matchers,
    not_supported,
};

// Subtypes of `_value` in tree-sitter-json's node-types.json
const VALUE_TYPES: &[&str] = &["array", "false", "null", "number", "object", "string", "true"];

/// JSON only models containers
pub struct JsonMatchers {
    containers: ContainerMatchers,
}

impl Default for JsonMatchers {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonMatchers {
    pub fn new() -> Self {
        Self {
            containers: container_matchers(
                &["object"],
                &["array"],
                NodePredicate::kinds(VALUE_TYPES),
            ),
        }
    }
}

impl ScopeMatchers for JsonMatchers {
    fn statement(&self) -> NodeMatcher {
        not_supported()
    }

    fn if_statement(&self) -> NodeMatcher {
        not_supported()
    }

    fn class(&self) -> NodeMatcher {
        not_supported()
    }

    fn arrow_function(&self) -> NodeMatcher {
        not_supported()
    }

    fn function_call(&self) -> NodeMatcher {
        not_supported()
    }

    fn named_function(&self) -> NodeMatcher {
        not_supported()
    }

    fn argument_or_parameter(&self) -> NodeMatcher {
        not_supported()
    }

    fn comment(&self) -> NodeMatcher {
        not_supported()
    }

    fn type_annotation(&self) -> NodeMatcher {
        not_supported()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentId;
    use crate::matchers::{MatchContext, MatchOutcome, Registry};
    use crate::parser::SourceParser;
    use crate::types::{LanguageId, ScopeType};

    #[test]
    fn test_only_container_scopes_are_supported() {
        let registry = Registry::build(LanguageId::Json, &JsonMatchers::new());
        assert_eq!(
            registry.supported_scopes(),
            vec![
                ScopeType::Collection,
                ScopeType::CollectionKey,
                ScopeType::CollectionValue,
                ScopeType::CollectionItem,
            ]
        );
    }

    #[test]
    fn test_unsupported_scopes_report_not_supported_everywhere() {
        let doc = SourceParser::new()
            .parse(
                DocumentId::new("t.json"),
                LanguageId::Json,
                r#"{"a": [1, {"b": null}], "c": "d"}"#,
            )
            .unwrap();
        let ctx = MatchContext::new(&doc);
        let registry = Registry::build(LanguageId::Json, &JsonMatchers::new());

        let mut cursor = doc.root_node().walk();
        let mut stack = vec![doc.root_node()];
        while let Some(node) = stack.pop() {
            for scope in [ScopeType::Class, ScopeType::Comment, ScopeType::Statement] {
                assert_eq!(
                    registry.matcher(scope).evaluate(&ctx, &node),
                    MatchOutcome::NotSupported
                );
            }
            stack.extend(node.children(&mut cursor));
        }
    }
}
