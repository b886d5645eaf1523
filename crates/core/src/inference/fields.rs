//! Field resolution: explicit value, required-explicit check, carry-forward,
//! preference default, built-in default.

use crate::error::InferenceError;
use crate::types::{
    ActionPreference, FieldConstraint, FieldPreference, Mark, PartialPrimitiveTarget,
    PositionModifier, ScopeType, TargetField, TargetScope,
};

/// Most recent explicit value of each field, left to right
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CarriedFields {
    mark: Option<Mark>,
    scope_type: Option<ScopeType>,
    position: Option<PositionModifier>,
}

/// Constraint per field in effect at one target position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EffectiveConstraints {
    mark: FieldConstraint,
    scope_type: FieldConstraint,
    position: FieldConstraint,
}

impl EffectiveConstraints {
    /// The leftmost preference in `preferences[..=index]` stating a constraint
    /// for a field decides it; `Inherit` when none does.
    pub(crate) fn at(preferences: &[ActionPreference], index: usize) -> Self {
        let leftmost = |field| {
            preferences
                .iter()
                .take(index + 1)
                .find_map(|preference| preference.constraint(field))
                .unwrap_or(FieldConstraint::Inherit)
        };
        Self {
            mark: leftmost(TargetField::Mark),
            scope_type: leftmost(TargetField::ScopeType),
            position: leftmost(TargetField::Position),
        }
    }
}

/// Fields of one primitive after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedFields {
    pub mark: Mark,
    pub scope: TargetScope,
    pub position: PositionModifier,
    pub ordinal: usize,
}

fn resolve_field<T: Clone>(
    explicit: Option<&T>,
    carried: &mut Option<T>,
    constraint: FieldConstraint,
    preference: &FieldPreference<T>,
    index: usize,
    field: TargetField,
) -> Result<Option<T>, InferenceError> {
    if let Some(value) = explicit {
        *carried = Some(value.clone());
        return Ok(Some(value.clone()));
    }
    if constraint == FieldConstraint::RequireExplicit {
        return Err(InferenceError::MissingField { index, field });
    }
    Ok(carried.clone().or_else(|| preference.default.clone()))
}

impl CarriedFields {
    /// Resolves every field of `partial`, recording its explicit values
    pub(crate) fn resolve(
        &mut self,
        partial: &PartialPrimitiveTarget,
        preference: &ActionPreference,
        constraints: EffectiveConstraints,
        index: usize,
    ) -> Result<ResolvedFields, InferenceError> {
        let mark = resolve_field(
            partial.mark.as_ref(),
            &mut self.mark,
            constraints.mark,
            &preference.mark,
            index,
            TargetField::Mark,
        )?
        .unwrap_or(Mark::Cursor);
        let scope_type = resolve_field(
            partial.scope_type.as_ref(),
            &mut self.scope_type,
            constraints.scope_type,
            &preference.scope_type,
            index,
            TargetField::ScopeType,
        )?;
        let position = resolve_field(
            partial.position.as_ref(),
            &mut self.position,
            constraints.position,
            &preference.position,
            index,
            TargetField::Position,
        )?
        .unwrap_or_default();

        Ok(ResolvedFields {
            mark,
            scope: TargetScope::from(scope_type),
            position,
            ordinal: partial.ordinal.unwrap_or(1).max(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_carry_forward() {
        let preferences = vec![ActionPreference::permissive(); 2];
        let mut carried = CarriedFields::default();

        let first = PartialPrimitiveTarget::new().with_scope(ScopeType::Class);
        carried
            .resolve(&first, &preferences[0], EffectiveConstraints::at(&preferences, 0), 0)
            .unwrap();
        let second = carried
            .resolve(
                &PartialPrimitiveTarget::new(),
                &preferences[1],
                EffectiveConstraints::at(&preferences, 1),
                1,
            )
            .unwrap();

        assert_eq!(
            second.scope,
            TargetScope::Enclosing {
                scope_type: ScopeType::Class
            }
        );
        assert_eq!(second.mark, Mark::Cursor);
        assert_eq!(second.position, PositionModifier::Contents);
        assert_eq!(second.ordinal, 1);
    }

    #[test]
    fn test_builtin_defaults() {
        let preference = ActionPreference::permissive();
        let resolved = CarriedFields::default()
            .resolve(
                &PartialPrimitiveTarget::new().with_ordinal(0),
                &preference,
                EffectiveConstraints::at(std::slice::from_ref(&preference), 0),
                0,
            )
            .unwrap();
        assert_eq!(resolved.scope, TargetScope::Exact);
        assert_eq!(resolved.ordinal, 1);
    }

    #[test]
    fn test_carried_value_beats_preference_default() {
        let preferences = vec![
            ActionPreference::permissive(),
            ActionPreference {
                position: FieldPreference::defaulting_to(PositionModifier::Entire),
                ..ActionPreference::permissive()
            },
        ];
        let mut carried = CarriedFields::default();
        let second = carried
            .resolve(
                &PartialPrimitiveTarget::new(),
                &preferences[1],
                EffectiveConstraints::at(&preferences, 1),
                1,
            )
            .unwrap();
        assert_eq!(second.position, PositionModifier::Entire);

        carried
            .resolve(
                &PartialPrimitiveTarget::new().with_position(PositionModifier::After),
                &preferences[0],
                EffectiveConstraints::at(&preferences, 0),
                0,
            )
            .unwrap();
        let again = carried
            .resolve(
                &PartialPrimitiveTarget::new(),
                &preferences[1],
                EffectiveConstraints::at(&preferences, 1),
                1,
            )
            .unwrap();
        assert_eq!(again.position, PositionModifier::After);
    }

    #[test]
    fn test_required_explicit_is_an_error() {
        let preferences =
            vec![ActionPreference::permissive().requiring(TargetField::Position)];
        let err = CarriedFields::default()
            .resolve(
                &PartialPrimitiveTarget::new(),
                &preferences[0],
                EffectiveConstraints::at(&preferences, 0),
                0,
            )
            .unwrap_err();
        assert_eq!(
            err,
            InferenceError::MissingField {
                index: 0,
                field: TargetField::Position
            }
        );
    }

    #[test]
    fn test_leftmost_constraint_wins() {
        let inherit = ActionPreference {
            position: FieldPreference {
                constraint: Some(FieldConstraint::Inherit),
                default: None,
            },
            ..ActionPreference::permissive()
        };
        let strict = ActionPreference::permissive().requiring(TargetField::Position);

        let preferences = vec![inherit.clone(), strict.clone()];
        assert_eq!(
            EffectiveConstraints::at(&preferences, 1).position,
            FieldConstraint::Inherit
        );

        let preferences = vec![strict, inherit];
        assert_eq!(
            EffectiveConstraints::at(&preferences, 1).position,
            FieldConstraint::RequireExplicit
        );

        let preferences = vec![ActionPreference::permissive(); 2];
        assert_eq!(
            EffectiveConstraints::at(&preferences, 1).position,
            FieldConstraint::Inherit
        );
    }
}
