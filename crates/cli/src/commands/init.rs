use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use tracing::info;

use scope_resolver_core::config::{CONFIG_FILE_NAMES, builtin_actions};
use scope_resolver_core::Config;

/// Default config, with the built-in actions spelled out for editing
pub fn default_config() -> Config {
    Config {
        actions: builtin_actions(),
        ..Default::default()
    }
}

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    info!("Writing default config to {}", config_path.display());
    default_config()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    println!("✅ Created config: {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        init_command(temp.path().to_str(), false).unwrap();

        let path = temp.path().join(".scope-resolver.json");
        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, default_config());
        assert!(config.actions.contains_key("chuck"));
    }

    #[test]
    fn test_init_respects_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".scope-resolver.json");
        std::fs::write(&path, "{}").unwrap();

        init_command(temp.path().to_str(), false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        init_command(temp.path().to_str(), true).unwrap();
        assert_ne!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
