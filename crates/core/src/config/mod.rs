//! Configuration management for scope-resolver

pub mod actions;
mod settings;

// Re-export main types
pub use actions::{ActionPreferences, builtin_actions, expand_preferences};
pub use settings::{
    CONFIG_FILE_NAMES, Config, DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_ANCESTOR_DEPTH,
};
