//! Caching across commands

pub mod language_cache;

pub use language_cache::{CacheStats, LanguageCache};
