//! Character abilities and their templates
//!
//! An `Ability` instance pairs an apply/silence effect function pair with the
//! target query describing who it touches. The instance tracks its lifecycle
//! (`Dormant -> Enabled -> Silenced`, terminal); the `GameState` methods in
//! `game::abilities` drive the transitions so repeated triggers never
//! double-apply a stacking effect.

use crate::core::{EffectFlag, EffectFn, TargetQuery};
use serde::{Deserialize, Serialize};

/// A live ability instance owned by a character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    /// Tag for the effect; `EffectFlag::Aura` routes apply/silence through
    /// the aura registry instead of one-shot resolution
    pub flag: EffectFlag,

    pub apply_effect: EffectFn,

    /// Undo of `apply_effect`; must be symmetric for stat deltas so that
    /// apply-then-silence nets to identity
    pub silence_effect: EffectFn,

    pub query: TargetQuery,

    /// Apply has run. Guards against double application.
    pub enabled: bool,

    /// Silence has run. Terminal: a silenced instance never re-applies;
    /// re-summoning instantiates a fresh one from the template.
    pub silenced: bool,
}

/// Blueprint for an ability, carried by card templates
///
/// Every summon instantiates a fresh `Ability` so that two copies of the same
/// card track apply/silence independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityTemplate {
    pub flag: EffectFlag,
    pub apply_effect: EffectFn,
    pub silence_effect: EffectFn,
    pub query: TargetQuery,
}

impl AbilityTemplate {
    pub fn new(
        flag: EffectFlag,
        apply_effect: EffectFn,
        silence_effect: EffectFn,
        query: TargetQuery,
    ) -> Self {
        AbilityTemplate {
            flag,
            apply_effect,
            silence_effect,
            query,
        }
    }

    /// Produce a fresh, dormant instance
    pub fn instantiate(&self) -> Ability {
        Ability {
            flag: self.flag,
            apply_effect: self.apply_effect.clone(),
            silence_effect: self.silence_effect.clone(),
            query: self.query.clone(),
            enabled: false,
            silenced: false,
        }
    }
}
