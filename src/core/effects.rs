//! Effect functions: the closed catalog of target-list transformations
//!
//! An `EffectFn` is data, not code: a tagged variant over the known stat-edit
//! operations, dispatched through an explicit match in
//! `GameState::run_effect`. Effects compose with `Sequence`, where each
//! sub-effect independently iterates the full target list in declared order.

use crate::core::card::MinionCard;
use crate::core::EffectFlag;
use serde::{Deserialize, Serialize};

/// A stateless transformation applied to a list of resolved targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectFn {
    /// No-op, for one-sided abilities (e.g. a silence with nothing to undo)
    Nothing,

    /// Run each sub-effect over the full target list, in order
    Sequence(Vec<EffectFn>),

    /// Reduce health; destruction is resolved by the next death sweep
    Damage(i32),

    /// Set health to zero outright
    Destroy,

    /// Raise health, capped at max health
    Heal(i32),

    /// Attack stat delta (negative to weaken)
    ChangeAttack(i32),

    /// Max-health delta; increases carry current health along, decreases
    /// clamp it
    ChangeMaxHealth(i32),

    /// Overwrite the moves-left counter (used by charge)
    SetMovesLeft(i32),

    /// Replace the character's stats and abilities wholesale from a minion
    /// template
    Transform(Box<MinionCard>),

    /// Set-union `add` into the flag set, then set-difference `remove` out
    Flags {
        add: Vec<EffectFlag>,
        remove: Vec<EffectFlag>,
    },

    /// The first target's owning player draws cards
    Draw(u32),

    /// The first target's owning player discards random cards
    Discard(u32),
}

impl EffectFn {
    /// Grant a single flag (helper for the common toggle abilities)
    pub fn add_flag(flag: EffectFlag) -> Self {
        EffectFn::Flags {
            add: vec![flag],
            remove: Vec::new(),
        }
    }

    /// Remove a single flag
    pub fn remove_flag(flag: EffectFlag) -> Self {
        EffectFn::Flags {
            add: Vec::new(),
            remove: vec![flag],
        }
    }

    /// +attack/+max-health in one step (aura buffs)
    pub fn stat_delta(attack: i32, max_health: i32) -> Self {
        EffectFn::Sequence(vec![
            EffectFn::ChangeAttack(attack),
            EffectFn::ChangeMaxHealth(max_health),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_helpers() {
        let add = EffectFn::add_flag(EffectFlag::Taunt);
        match add {
            EffectFn::Flags { add, remove } => {
                assert_eq!(add, vec![EffectFlag::Taunt]);
                assert!(remove.is_empty());
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_stat_delta_is_a_sequence() {
        match EffectFn::stat_delta(1, 1) {
            EffectFn::Sequence(parts) => assert_eq!(parts.len(), 2),
            _ => panic!("wrong variant"),
        }
    }
}
