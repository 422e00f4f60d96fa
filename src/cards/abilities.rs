//! Shared ability templates
//!
//! The self-targeting toggles (taunt, charge, stealth) and the standard
//! stat aura. Cards build their ability lists from these.

use crate::core::{
    AbilityTemplate, CountRange, EffectFlag, EffectFn, SelectionMethod, TargetAlliance,
    TargetClass, TargetQuery,
};

/// Query matching only the ability's own character
fn self_query() -> TargetQuery {
    TargetQuery::new(
        TargetAlliance::Friendly,
        TargetClass::Minion,
        CountRange::exactly(1),
        SelectionMethod::All,
    )
    .only_self()
}

/// Taunt: enemies must attack this character first
pub fn taunt_ability() -> AbilityTemplate {
    AbilityTemplate::new(
        EffectFlag::Taunt,
        EffectFn::add_flag(EffectFlag::Taunt),
        EffectFn::remove_flag(EffectFlag::Taunt),
        self_query(),
    )
}

/// Charge: may attack the turn it is summoned
pub fn charge_ability() -> AbilityTemplate {
    AbilityTemplate::new(
        EffectFlag::Charge,
        EffectFn::Sequence(vec![
            EffectFn::add_flag(EffectFlag::Charge),
            EffectFn::SetMovesLeft(1),
        ]),
        EffectFn::remove_flag(EffectFlag::Charge),
        self_query(),
    )
}

/// Stealth: cannot be targeted by enemies until it attacks
pub fn stealth_ability() -> AbilityTemplate {
    AbilityTemplate::new(
        EffectFlag::Stealth,
        EffectFn::add_flag(EffectFlag::Stealth),
        EffectFn::remove_flag(EffectFlag::Stealth),
        self_query(),
    )
}

/// Ongoing +attack/+health for the controller's other minions
pub fn friendly_minion_aura(attack: i32, health: i32) -> AbilityTemplate {
    AbilityTemplate::new(
        EffectFlag::Aura,
        EffectFn::stat_delta(attack, health),
        EffectFn::stat_delta(-attack, -health),
        TargetQuery::new(
            TargetAlliance::Friendly,
            TargetClass::Minion,
            CountRange::unbounded(),
            SelectionMethod::All,
        )
        .excluding_self(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_are_self_only() {
        for template in [taunt_ability(), charge_ability(), stealth_ability()] {
            assert!(template.query.only_self);
            assert_eq!(template.query.method, SelectionMethod::All);
        }
    }

    #[test]
    fn test_aura_excludes_source() {
        let aura = friendly_minion_aura(1, 1);
        assert_eq!(aura.flag, EffectFlag::Aura);
        assert!(aura.query.exclude_self);
        assert!(!aura.query.only_self);
    }
}
