use std::collections::{BTreeMap, HashMap};

use super::NodeMatcher;
use crate::languages;
use crate::types::{LanguageId, ScopeType};

static NOT_SUPPORTED: NodeMatcher = NodeMatcher::NotSupported;

/// A language's matcher table: one required method per scope type, so a
/// language cannot forget one. Scopes a language does not model return
/// [`NodeMatcher::NotSupported`].
pub trait ScopeMatchers {
    fn statement(&self) -> NodeMatcher;
    fn if_statement(&self) -> NodeMatcher;
    fn class(&self) -> NodeMatcher;
    fn arrow_function(&self) -> NodeMatcher;
    fn function_call(&self) -> NodeMatcher;
    fn named_function(&self) -> NodeMatcher;
    fn argument_or_parameter(&self) -> NodeMatcher;
    fn comment(&self) -> NodeMatcher;
    fn type_annotation(&self) -> NodeMatcher;
    fn collection(&self) -> NodeMatcher;
    fn collection_key(&self) -> NodeMatcher;
    fn collection_value(&self) -> NodeMatcher;
    fn collection_item(&self) -> NodeMatcher;

    fn matcher_for(&self, scope: ScopeType) -> NodeMatcher {
        match scope {
            ScopeType::Statement => self.statement(),
            ScopeType::IfStatement => self.if_statement(),
            ScopeType::Class => self.class(),
            ScopeType::ArrowFunction => self.arrow_function(),
            ScopeType::FunctionCall => self.function_call(),
            ScopeType::NamedFunction => self.named_function(),
            ScopeType::ArgumentOrParameter => self.argument_or_parameter(),
            ScopeType::Comment => self.comment(),
            ScopeType::Type => self.type_annotation(),
            ScopeType::Collection => self.collection(),
            ScopeType::CollectionKey => self.collection_key(),
            ScopeType::CollectionValue => self.collection_value(),
            ScopeType::CollectionItem => self.collection_item(),
        }
    }
}

/// Total mapping from scope type to matcher for one language
#[derive(Debug, Clone)]
pub struct Registry {
    language: LanguageId,
    matchers: BTreeMap<ScopeType, NodeMatcher>,
}

impl Registry {
    pub fn build(language: LanguageId, table: &dyn ScopeMatchers) -> Self {
        let matchers = ScopeType::ALL
            .into_iter()
            .map(|scope| (scope, table.matcher_for(scope)))
            .collect();
        Self { language, matchers }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn matcher(&self, scope: ScopeType) -> &NodeMatcher {
        self.matchers.get(&scope).unwrap_or(&NOT_SUPPORTED)
    }

    pub fn supports(&self, scope: ScopeType) -> bool {
        !self.matcher(scope).is_not_supported()
    }

    pub fn supported_scopes(&self) -> Vec<ScopeType> {
        ScopeType::ALL
            .into_iter()
            .filter(|scope| self.supports(*scope))
            .collect()
    }
}

/// Registries for every known language
#[derive(Debug, Clone)]
pub struct Registries {
    registries: HashMap<LanguageId, Registry>,
}

impl Default for Registries {
    fn default() -> Self {
        Self::new()
    }
}

impl Registries {
    /// Registries for all built-in languages
    pub fn new() -> Self {
        let registries = LanguageId::ALL
            .into_iter()
            .map(|language| (language, languages::registry_for(language)))
            .collect();
        Self { registries }
    }

    pub fn empty() -> Self {
        Self {
            registries: HashMap::new(),
        }
    }

    /// Adds or replaces the registry for its language
    pub fn insert(&mut self, registry: Registry) {
        self.registries.insert(registry.language(), registry);
    }

    pub fn get(&self, language: LanguageId) -> Option<&Registry> {
        self.registries.get(&language)
    }
}
