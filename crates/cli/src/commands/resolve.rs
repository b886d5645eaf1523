use anyhow::{Context, Result};
use tracing::debug;

use scope_resolver_core::config::expand_preferences;
use scope_resolver_core::{
    ActionPreference, Config, InferenceContext, PartialTarget, TargetInference,
};

use crate::display::print_full_targets;
use crate::utils::{load_document, parse_location, read_json_arg};

pub struct ResolveArgs<'a> {
    pub location: &'a str,
    pub targets: &'a str,
    pub action: &'a str,
    pub preferences: Option<&'a str>,
    pub json: bool,
}

/// A single target object or an array of them
pub fn parse_targets(json: &str) -> Result<Vec<PartialTarget>> {
    if let Ok(targets) = serde_json::from_str::<Vec<PartialTarget>>(json) {
        return Ok(targets);
    }
    let target = serde_json::from_str::<PartialTarget>(json).context("Invalid targets JSON")?;
    Ok(vec![target])
}

pub fn resolve_command(args: ResolveArgs<'_>) -> Result<()> {
    let location = parse_location(args.location)?;
    let config = Config::discover(&location.path)?;
    let document = load_document(&location.path, &config)?;

    let cursor = document
        .range(location.position(), location.position())
        .with_context(|| format!("{} lies outside {}", args.location, document.id()))?;

    let targets = parse_targets(&read_json_arg(args.targets)?)?;
    let preferences = match args.preferences {
        Some(preferences) => {
            serde_json::from_str::<Vec<ActionPreference>>(&read_json_arg(preferences)?)
                .context("Invalid preferences JSON")?
        }
        None => expand_preferences(&config.action(args.action)?, targets.len()),
    };
    debug!(
        "Resolving {} target(s) with {} preference(s)",
        targets.len(),
        preferences.len()
    );

    let context = InferenceContext::new(&document).with_cursor(cursor);
    let resolved = TargetInference::from_config(&config)
        .infer(&context, &targets, &preferences)
        .context("Target inference failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_full_targets(&document, &resolved);
    }
    Ok(())
}
