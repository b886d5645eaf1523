use anyhow::{Context, Result};
use std::path::PathBuf;

use scope_resolver_core::Config;

use crate::display::describe_preference;

pub fn actions_command(cwd: Option<&str>, json: bool) -> Result<()> {
    let root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let config = Config::discover(&root)?;
    let actions = config.actions();

    if json {
        println!("{}", serde_json::to_string_pretty(&actions)?);
        return Ok(());
    }

    println!("⚙️  Actions ({})", actions.len());
    println!("{}", "=".repeat(80));
    for (name, preferences) in &actions {
        let origin = if config.actions.contains_key(name) {
            " (configured)"
        } else {
            ""
        };
        println!("\n{name}{origin}");
        for (position, preference) in preferences.iter().enumerate() {
            println!("   {}. {}", position + 1, describe_preference(preference));
        }
    }
    Ok(())
}
