//! Built-in matcher tables, one per language

pub mod json;
pub mod rust;
pub mod typescript;

use crate::matchers::Registry;
use crate::types::LanguageId;

pub use json::JsonMatchers;
pub use rust::RustMatchers;
pub use typescript::TypeScriptMatchers;

pub fn registry_for(language: LanguageId) -> Registry {
    match language {
        LanguageId::Json => Registry::build(language, &JsonMatchers::new()),
        LanguageId::TypeScript | LanguageId::Tsx => {
            Registry::build(language, &TypeScriptMatchers::new())
        }
        LanguageId::Rust => Registry::build(language, &RustMatchers::new()),
    }
}
