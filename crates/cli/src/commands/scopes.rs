use anyhow::{Context, Result};
use serde::Serialize;

use scope_resolver_core::{
    ActionPreference, Config, Document, InferenceContext, InferenceError, PartialPrimitiveTarget,
    PartialTarget, ScopeType, TargetInference, TextRange,
};

use crate::display::{format_range, snippet};
use crate::utils::{load_document, parse_location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeStatus {
    Matched,
    NoMatch,
    NotSupported,
}

/// Innermost match of one scope type at a location
#[derive(Debug, Clone, Serialize)]
pub struct ScopeReport {
    pub scope_type: ScopeType,
    pub status: ScopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<TextRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Reports every scope type at `cursor`
pub fn scope_reports(document: &Document, cursor: TextRange, config: &Config) -> Result<Vec<ScopeReport>> {
    let context = InferenceContext::new(document).with_cursor(cursor);
    let mut engine = TargetInference::from_config(config);
    let preferences = [ActionPreference::permissive()];

    let mut reports = Vec::with_capacity(ScopeType::ALL.len());
    for scope_type in ScopeType::ALL {
        let target: PartialTarget = PartialPrimitiveTarget::new().with_scope(scope_type).into();
        let report = match engine.infer(&context, &[target], &preferences) {
            Ok(resolved) => {
                let selection = resolved
                    .first()
                    .and_then(|target| target.as_primitive())
                    .and_then(|target| target.selections.first())
                    .context("Resolved target carries no selection")?;
                ScopeReport {
                    scope_type,
                    status: ScopeStatus::Matched,
                    node_kind: selection.node_kind.clone(),
                    range: Some(selection.range),
                    text: Some(document.text(&selection.range).to_string()),
                }
            }
            Err(InferenceError::UnsupportedScope { .. }) => ScopeReport {
                scope_type,
                status: ScopeStatus::NotSupported,
                node_kind: None,
                range: None,
                text: None,
            },
            Err(InferenceError::NoEnclosingScope { .. }) => ScopeReport {
                scope_type,
                status: ScopeStatus::NoMatch,
                node_kind: None,
                range: None,
                text: None,
            },
            Err(err) => return Err(err.into()),
        };
        reports.push(report);
    }
    Ok(reports)
}

pub fn scopes_command(location_arg: &str, json: bool) -> Result<()> {
    let location = parse_location(location_arg)?;
    let config = Config::discover(&location.path)?;
    let document = load_document(&location.path, &config)?;
    let cursor = document
        .range(location.position(), location.position())
        .with_context(|| format!("{location_arg} lies outside {}", document.id()))?;

    let reports = scope_reports(&document, cursor, &config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("🔍 Scopes at: {location_arg} ({})", document.language());
    println!("{}", "=".repeat(80));
    for report in &reports {
        match (report.status, &report.range, &report.text) {
            (ScopeStatus::Matched, Some(range), Some(text)) => println!(
                "✅ {:<22} {} {}  {}",
                report.scope_type.as_str(),
                format_range(range),
                report.node_kind.as_deref().unwrap_or("-"),
                snippet(text)
            ),
            (ScopeStatus::NotSupported, _, _) => {
                println!("⛔ {:<22} not supported", report.scope_type.as_str())
            }
            _ => println!("➖ {:<22} no match", report.scope_type.as_str()),
        }
    }
    Ok(())
}
