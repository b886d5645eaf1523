//! Built-in action preferences.
//!
//! An action lists one preference per target position. A single-entry list
//! applies to every target the command names.

use std::collections::BTreeMap;

use crate::types::{ActionPreference, FieldPreference, PositionModifier, TargetShape};

pub type ActionPreferences = Vec<ActionPreference>;

fn removal() -> ActionPreference {
    ActionPreference {
        position: FieldPreference::defaulting_to(PositionModifier::Entire),
        ..ActionPreference::permissive()
    }
    .with_shape(TargetShape::Range)
}

/// `take`, `chuck`, `clear`, `bring`, `move` and `swap`
pub fn builtin_actions() -> BTreeMap<String, ActionPreferences> {
    let mut actions = BTreeMap::new();
    actions.insert("take".to_string(), vec![ActionPreference::permissive()]);
    actions.insert("chuck".to_string(), vec![removal()]);
    actions.insert(
        "clear".to_string(),
        vec![ActionPreference::permissive().with_shape(TargetShape::Range)],
    );
    // source, destination
    actions.insert(
        "bring".to_string(),
        vec![
            ActionPreference::permissive().with_shape(TargetShape::Range),
            ActionPreference::permissive().single(),
        ],
    );
    actions.insert(
        "move".to_string(),
        vec![removal(), ActionPreference::permissive().single()],
    );
    actions.insert(
        "swap".to_string(),
        vec![
            ActionPreference::permissive().with_shape(TargetShape::Range),
            ActionPreference::permissive().with_shape(TargetShape::Range),
        ],
    );
    actions
}

/// Preferences for `target_count` targets: a single preference is repeated,
/// longer lists are used as given
pub fn expand_preferences(preferences: &[ActionPreference], target_count: usize) -> ActionPreferences {
    match preferences {
        [single] => vec![single.clone(); target_count],
        _ => preferences.to_vec(),
    }
}
