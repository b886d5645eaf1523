use scope_resolver_core::{
    ActionPreference, Document, FieldConstraint, FieldPreference, FullTarget, ListElementTarget,
    PrimitiveTarget, RangeTarget, TargetScope, TextRange,
};
use std::fmt::Debug;

const SNIPPET_WIDTH: usize = 60;

/// `line:col-line:col`, 1-based
pub fn format_range(range: &TextRange) -> String {
    format!(
        "{}:{}-{}:{}",
        range.start.line + 1,
        range.start.character + 1,
        range.end.line + 1,
        range.end.character + 1
    )
}

/// First line of `text`, shortened to fit one terminal line
pub fn snippet(text: &str) -> String {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    let truncated = first.chars().count() > SNIPPET_WIDTH;
    let mut shown: String = first.chars().take(SNIPPET_WIDTH).collect();
    if truncated || lines.next().is_some() {
        shown.push('…');
    }
    shown
}

pub fn describe_scope(scope: &TargetScope) -> String {
    match scope {
        TargetScope::Exact => "exact".to_string(),
        TargetScope::Enclosing { scope_type } => scope_type.to_string(),
    }
}

fn print_primitive(document: &Document, target: &PrimitiveTarget, indent: &str) {
    println!(
        "{indent}🔎 {} ({:?}, ordinal {})",
        describe_scope(&target.scope),
        target.position,
        target.ordinal
    );
    if target.selections.is_empty() {
        println!("{indent}   (no selections)");
    }
    for selection in &target.selections {
        let kind = selection.node_kind.as_deref().unwrap_or("-");
        println!(
            "{indent}   📍 {} {kind}",
            format_range(&selection.range)
        );
        if !selection.range.is_empty() {
            println!("{indent}   📝 {}", snippet(document.text(&selection.range)));
        }
    }
}

fn print_range(document: &Document, target: &RangeTarget, indent: &str) {
    println!("{indent}↔️  {}", format_range(&target.covering));
    println!("{indent}   📝 {}", snippet(document.text(&target.covering)));
    print_primitive(document, &target.start, &format!("{indent}   start "));
    print_primitive(document, &target.end, &format!("{indent}   end "));
}

pub fn print_full_targets(document: &Document, targets: &[FullTarget]) {
    println!("🎯 {} target(s) in {}", targets.len(), document.id());
    println!("{}", "=".repeat(80));

    for (index, target) in targets.iter().enumerate() {
        println!("\n{}. {} selection(s)", index + 1, target.selection_count());
        match target {
            FullTarget::Primitive(primitive) => print_primitive(document, primitive, "   "),
            FullTarget::Range(range) => print_range(document, range, "   "),
            FullTarget::List { elements } => {
                for element in elements {
                    match element {
                        ListElementTarget::Primitive(primitive) => {
                            print_primitive(document, primitive, "   • ")
                        }
                        ListElementTarget::Range(range) => print_range(document, range, "   • "),
                    }
                }
            }
        }
    }
}

fn describe_field<T: Debug>(name: &str, field: &FieldPreference<T>) -> Option<String> {
    match (&field.constraint, &field.default) {
        (Some(FieldConstraint::RequireExplicit), _) => Some(format!("{name} required")),
        (_, Some(default)) => Some(format!("{name} = {default:?}")),
        _ => None,
    }
}

/// One-line summary of a preference
pub fn describe_preference(preference: &ActionPreference) -> String {
    let mut parts: Vec<String> = [
        describe_field("mark", &preference.mark),
        describe_field("scope", &preference.scope_type),
        describe_field("position", &preference.position),
    ]
    .into_iter()
    .flatten()
    .collect();
    parts.push(format!("shape {:?}", preference.shape).to_lowercase());
    if !preference.accepts_multiple {
        parts.push("single".to_string());
    }
    parts.join(", ")
}
