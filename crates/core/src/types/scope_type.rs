use serde::Serialize;
use std::fmt;

use crate::impl_lenient_deserialize;

/// Language-agnostic category of syntactic construct.
///
/// The set is fixed across languages; a language that does not model a scope
/// maps it to [`crate::matchers::NodeMatcher::NotSupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeType {
    Statement,
    IfStatement,
    Class,
    ArrowFunction,
    FunctionCall,
    NamedFunction,
    ArgumentOrParameter,
    Comment,
    Type,
    Collection,
    CollectionKey,
    CollectionValue,
    CollectionItem,
}

impl_lenient_deserialize!(
    ScopeType,
    Statement => "statement",
    IfStatement => "ifstatement",
    Class => "class",
    ArrowFunction => "arrowfunction",
    FunctionCall => "functioncall",
    NamedFunction => "namedfunction",
    ArgumentOrParameter => "argumentorparameter",
    Comment => "comment",
    Type => "type",
    Collection => "collection",
    CollectionKey => "collectionkey",
    CollectionValue => "collectionvalue",
    CollectionItem => "collectionitem"
);

impl ScopeType {
    pub const ALL: [ScopeType; 13] = [
        ScopeType::Statement,
        ScopeType::IfStatement,
        ScopeType::Class,
        ScopeType::ArrowFunction,
        ScopeType::FunctionCall,
        ScopeType::NamedFunction,
        ScopeType::ArgumentOrParameter,
        ScopeType::Comment,
        ScopeType::Type,
        ScopeType::Collection,
        ScopeType::CollectionKey,
        ScopeType::CollectionValue,
        ScopeType::CollectionItem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeType::Statement => "statement",
            ScopeType::IfStatement => "if_statement",
            ScopeType::Class => "class",
            ScopeType::ArrowFunction => "arrow_function",
            ScopeType::FunctionCall => "function_call",
            ScopeType::NamedFunction => "named_function",
            ScopeType::ArgumentOrParameter => "argument_or_parameter",
            ScopeType::Comment => "comment",
            ScopeType::Type => "type",
            ScopeType::Collection => "collection",
            ScopeType::CollectionKey => "collection_key",
            ScopeType::CollectionValue => "collection_value",
            ScopeType::CollectionItem => "collection_item",
        }
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
