use crate::{
    error::{Error, Result},
    types::LanguageId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::actions::{ActionPreferences, builtin_actions};

pub const CONFIG_FILE_NAMES: [&str; 2] = [".scope-resolver.json", "scope-resolver.json"];
pub const DEFAULT_MAX_ANCESTOR_DEPTH: usize = 4096;
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

fn default_max_ancestor_depth() -> usize {
    DEFAULT_MAX_ANCESTOR_DEPTH
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    // Ancestors visited per scope lookup, the anchor node included
    #[serde(default = "default_max_ancestor_depth")]
    pub max_ancestor_depth: usize,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    // File extension (without the dot) to language
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, LanguageId>,

    // Named actions; these replace built-in actions of the same name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<String, ActionPreferences>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_ancestor_depth: DEFAULT_MAX_ANCESTOR_DEPTH,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            languages: BTreeMap::new(),
            actions: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Config governing `path`: the nearest config file, else defaults
    pub fn discover(path: &Path) -> Result<Self> {
        let start = if path.is_file() {
            path.parent().unwrap_or(path)
        } else {
            path
        };
        match Self::find_config_file(start) {
            Some(config_path) => {
                debug!("Using config {}", config_path.display());
                Self::load_from_file(&config_path)
            }
            None => {
                debug!("No config found above {}, using defaults", start.display());
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_ancestor_depth == 0 {
            return Err(Error::ConfigError(
                "max_ancestor_depth must be at least 1".to_string(),
            ));
        }
        if let Some((name, _)) = self.actions.iter().find(|(_, prefs)| prefs.is_empty()) {
            return Err(Error::ConfigError(format!(
                "action `{name}` lists no preferences"
            )));
        }
        Ok(())
    }

    /// Language of `path`, honouring extension overrides. Override keys
    /// match case-insensitively, with or without a leading dot.
    pub fn language_for_path(&self, path: &Path) -> Option<LanguageId> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        self.languages
            .iter()
            .find(|(key, _)| key.trim_start_matches('.').eq_ignore_ascii_case(extension))
            .map(|(_, language)| *language)
            .or_else(|| LanguageId::from_extension(extension))
    }

    /// Built-in actions with configured ones merged over them
    pub fn actions(&self) -> BTreeMap<String, ActionPreferences> {
        let mut actions = builtin_actions();
        actions.extend(
            self.actions
                .iter()
                .map(|(name, prefs)| (name.clone(), prefs.clone())),
        );
        actions
    }

    pub fn action(&self, name: &str) -> Result<ActionPreferences> {
        self.actions()
            .remove(name)
            .ok_or_else(|| Error::UnknownAction(name.to_string()))
    }
}
