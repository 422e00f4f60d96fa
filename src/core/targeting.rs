//! Target queries: declarative filters over battlefield characters
//!
//! A `TargetQuery` describes which characters an effect may touch and how the
//! concrete set gets picked. Validation is a pure predicate chain that fails
//! with a distinct [`TargetError`] per rule, so resolvers can skip a candidate
//! silently or tell an interactive player *why* a pick was rejected.

use crate::core::{Character, CharacterId, CharacterKind, EffectFlag, PlayerId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whose characters a query may select, relative to the query owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetAlliance {
    Friendly,
    Enemy,
    All,
}

/// Which kind of character a query may select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetClass {
    /// Matches anything (board locations)
    Location,
    Minion,
    Hero,
    /// Minion or hero
    Any,
}

/// How the concrete target set gets picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMethod {
    /// Interactive, incremental selection through the controller port
    Manual,
    /// Sample without replacement from the valid set
    Random,
    /// Every valid target; the count range is descriptive only
    All,
}

/// Inclusive count range for a selection
///
/// `max = None` means unbounded (the source data used a -1 sentinel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: Option<usize>,
}

impl CountRange {
    pub fn new(min: usize, max: usize) -> Self {
        CountRange { min, max: Some(max) }
    }

    pub fn exactly(n: usize) -> Self {
        CountRange { min: n, max: Some(n) }
    }

    pub fn unbounded() -> Self {
        CountRange { min: 0, max: None }
    }

    pub fn contains(&self, n: usize) -> bool {
        self.min <= n && self.max.map_or(true, |m| n <= m)
    }
}

/// Why a candidate failed target validation
///
/// These are expected control flow, not failures: automatic selection skips
/// the candidate, manual selection reports and re-prompts. They never reach
/// the turn loop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    #[error("target character is dead")]
    TargetDead,

    #[error("character alliance doesn't match")]
    AllianceMismatch,

    #[error("character type doesn't match")]
    ClassMismatch,

    #[error("cannot target the effect's own character")]
    SelfExclusion,

    #[error("can only target the effect's own character")]
    SelfOnly,

    #[error("a taunt character must be targeted first")]
    TauntRequired,

    #[error("target is hidden by stealth")]
    StealthBlocked,

    #[error("player alliance doesn't match")]
    PlayerAllianceMismatch,

    #[error("number of targets is out of range")]
    CountOutOfRange,
}

/// Declarative target filter + selection descriptor
///
/// Immutable value object; evaluation never mutates game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetQuery {
    pub alliance: TargetAlliance,
    pub class: TargetClass,
    pub count: CountRange,
    pub method: SelectionMethod,
    /// The query owner itself is never a valid target
    pub exclude_self: bool,
    /// Only the query owner is a valid target
    pub only_self: bool,
    /// Honor taunt: if the target's side has an active taunt, only taunted
    /// characters are valid
    pub respect_taunt: bool,
    /// Honor stealth for cross-player targeting (on by default)
    pub respect_stealth: bool,
}

impl TargetQuery {
    pub fn new(
        alliance: TargetAlliance,
        class: TargetClass,
        count: CountRange,
        method: SelectionMethod,
    ) -> Self {
        TargetQuery {
            alliance,
            class,
            count,
            method,
            exclude_self: false,
            only_self: false,
            respect_taunt: false,
            respect_stealth: true,
        }
    }

    /// Exclude the query owner (builder pattern)
    pub fn excluding_self(mut self) -> Self {
        self.exclude_self = true;
        self
    }

    /// Restrict to the query owner (builder pattern)
    pub fn only_self(mut self) -> Self {
        self.only_self = true;
        self
    }

    /// Honor taunt (builder pattern)
    pub fn respecting_taunt(mut self) -> Self {
        self.respect_taunt = true;
        self
    }

    /// Ignore stealth, e.g. for board sweeps (builder pattern)
    pub fn ignoring_stealth(mut self) -> Self {
        self.respect_stealth = false;
        self
    }

    /// Validate a single candidate against the filter chain
    ///
    /// Rules run in a fixed order and short-circuit on the first failure:
    /// alive, alliance, class, exclude-self, only-self, taunt, stealth.
    /// `target_side_has_taunt` is whether ANY character on the target's side
    /// currently has an active (unstealthed) taunt; the caller computes it
    /// from the board.
    pub fn is_valid_target(
        &self,
        owner: &Character,
        target: &Character,
        target_side_has_taunt: bool,
    ) -> Result<(), TargetError> {
        // 1. Alive. Empty slots have kind None and are never valid.
        if target.kind == CharacterKind::None || target.health <= 0 {
            return Err(TargetError::TargetDead);
        }

        // 2. Alliance
        let alliance_ok = match self.alliance {
            TargetAlliance::Friendly => owner.owner == target.owner,
            TargetAlliance::Enemy => owner.owner != target.owner,
            TargetAlliance::All => true,
        };
        if !alliance_ok {
            return Err(TargetError::AllianceMismatch);
        }

        // 3. Character class
        let class_ok = match self.class {
            TargetClass::Location => true,
            TargetClass::Minion => target.kind == CharacterKind::Minion,
            TargetClass::Hero => target.kind == CharacterKind::Hero,
            TargetClass::Any => {
                target.kind == CharacterKind::Minion || target.kind == CharacterKind::Hero
            }
        };
        if !class_ok {
            return Err(TargetError::ClassMismatch);
        }

        // 4. Self exclusion
        if self.exclude_self && target.id == owner.id {
            return Err(TargetError::SelfExclusion);
        }

        // 5. Self only
        if self.only_self && target.id != owner.id {
            return Err(TargetError::SelfOnly);
        }

        // 6. Taunt: when the target's side has an active taunt, only the
        // taunted characters can be picked.
        if self.respect_taunt && target_side_has_taunt && !target.has_active_taunt() {
            return Err(TargetError::TauntRequired);
        }

        // 7. Stealth never blocks self- or ally-targeting.
        if self.respect_stealth
            && target.owner != owner.owner
            && target.has_flag(EffectFlag::Stealth)
        {
            return Err(TargetError::StealthBlocked);
        }

        Ok(())
    }

    /// Player-level alliance pre-check (used by interactive player selection)
    pub fn check_player_alliance(
        &self,
        owner: PlayerId,
        candidate: PlayerId,
    ) -> Result<(), TargetError> {
        let ok = match self.alliance {
            TargetAlliance::Friendly => owner == candidate,
            TargetAlliance::Enemy => owner != candidate,
            TargetAlliance::All => true,
        };
        if ok {
            Ok(())
        } else {
            Err(TargetError::PlayerAllianceMismatch)
        }
    }

    /// Additive constraint for incremental manual selection.
    ///
    /// Reserved for future multi-target exclusivity rules; currently every
    /// addition is allowed.
    pub fn can_add_target(
        &self,
        _selected: &[CharacterId],
        _candidate: CharacterId,
    ) -> Result<(), TargetError> {
        Ok(())
    }

    /// Does `n` selected targets satisfy the count range?
    pub fn check_count(&self, n: usize) -> bool {
        self.count.contains(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Character;

    fn character(id: u32, player: u32, kind: CharacterKind) -> Character {
        let mut c = Character::new_slot(CharacterId::new(id), PlayerId::new(player));
        match kind {
            CharacterKind::Minion => c.seed_minion_stats("Minion", "", 2, 2),
            CharacterKind::Hero => c.set_as_hero("Hero", 30),
            CharacterKind::None => {}
        }
        c
    }

    fn any_enemy() -> TargetQuery {
        TargetQuery::new(
            TargetAlliance::Enemy,
            TargetClass::Any,
            CountRange::exactly(1),
            SelectionMethod::Manual,
        )
    }

    #[test]
    fn test_dead_target_rejected_first() {
        let owner = character(0, 0, CharacterKind::Hero);
        let mut target = character(1, 1, CharacterKind::Minion);
        target.health = 0;
        // Dead beats alliance: even an alliance mismatch reports TargetDead
        let q = TargetQuery::new(
            TargetAlliance::Friendly,
            TargetClass::Any,
            CountRange::exactly(1),
            SelectionMethod::All,
        );
        assert_eq!(q.is_valid_target(&owner, &target, false), Err(TargetError::TargetDead));
    }

    #[test]
    fn test_alliance_checks() {
        let owner = character(0, 0, CharacterKind::Hero);
        let enemy = character(1, 1, CharacterKind::Minion);
        let friend = character(2, 0, CharacterKind::Minion);

        let q = any_enemy();
        assert!(q.is_valid_target(&owner, &enemy, false).is_ok());
        assert_eq!(
            q.is_valid_target(&owner, &friend, false),
            Err(TargetError::AllianceMismatch)
        );
    }

    #[test]
    fn test_class_checks() {
        let owner = character(0, 0, CharacterKind::Hero);
        let minion = character(1, 1, CharacterKind::Minion);
        let hero = character(2, 1, CharacterKind::Hero);

        let minions_only = TargetQuery::new(
            TargetAlliance::All,
            TargetClass::Minion,
            CountRange::exactly(1),
            SelectionMethod::All,
        );
        assert!(minions_only.is_valid_target(&owner, &minion, false).is_ok());
        assert_eq!(
            minions_only.is_valid_target(&owner, &hero, false),
            Err(TargetError::ClassMismatch)
        );
    }

    #[test]
    fn test_self_filters() {
        let owner = character(0, 0, CharacterKind::Minion);
        let other = character(1, 0, CharacterKind::Minion);

        let q = TargetQuery::new(
            TargetAlliance::Friendly,
            TargetClass::Minion,
            CountRange::exactly(1),
            SelectionMethod::All,
        )
        .excluding_self();
        assert_eq!(
            q.is_valid_target(&owner, &owner, false),
            Err(TargetError::SelfExclusion)
        );
        assert!(q.is_valid_target(&owner, &other, false).is_ok());

        let q = TargetQuery::new(
            TargetAlliance::Friendly,
            TargetClass::Minion,
            CountRange::exactly(1),
            SelectionMethod::All,
        )
        .only_self();
        assert!(q.is_valid_target(&owner, &owner, false).is_ok());
        assert_eq!(
            q.is_valid_target(&owner, &other, false),
            Err(TargetError::SelfOnly)
        );
    }

    #[test]
    fn test_taunt_gate() {
        let owner = character(0, 0, CharacterKind::Hero);
        let mut taunted = character(1, 1, CharacterKind::Minion);
        taunted.flags.insert(EffectFlag::Taunt);
        let plain = character(2, 1, CharacterKind::Minion);

        let q = any_enemy().respecting_taunt();
        assert!(q.is_valid_target(&owner, &taunted, true).is_ok());
        assert_eq!(
            q.is_valid_target(&owner, &plain, true),
            Err(TargetError::TauntRequired)
        );
        // Without a taunt on the side, everyone is fair game
        assert!(q.is_valid_target(&owner, &plain, false).is_ok());
    }

    #[test]
    fn test_stealth_blocks_only_cross_player() {
        let owner = character(0, 0, CharacterKind::Hero);
        let ally_owner = character(3, 1, CharacterKind::Hero);
        let mut stealthed = character(1, 1, CharacterKind::Minion);
        stealthed.flags.insert(EffectFlag::Stealth);

        let q = TargetQuery::new(
            TargetAlliance::All,
            TargetClass::Any,
            CountRange::exactly(1),
            SelectionMethod::Manual,
        );
        assert_eq!(
            q.is_valid_target(&owner, &stealthed, false),
            Err(TargetError::StealthBlocked)
        );
        // The controller of the stealthed minion still sees it
        assert!(q.is_valid_target(&ally_owner, &stealthed, false).is_ok());
        // And sweeps that ignore stealth hit it too
        let sweep = q.ignoring_stealth();
        assert!(sweep.is_valid_target(&owner, &stealthed, false).is_ok());
    }

    #[test]
    fn test_player_alliance_precheck() {
        let me = PlayerId::new(0);
        let them = PlayerId::new(1);

        let q = any_enemy();
        assert!(q.check_player_alliance(me, them).is_ok());
        assert_eq!(
            q.check_player_alliance(me, me),
            Err(TargetError::PlayerAllianceMismatch)
        );

        let friendly = TargetQuery::new(
            TargetAlliance::Friendly,
            TargetClass::Any,
            CountRange::exactly(1),
            SelectionMethod::Manual,
        );
        assert!(friendly.check_player_alliance(me, me).is_ok());
        assert_eq!(
            friendly.check_player_alliance(me, them),
            Err(TargetError::PlayerAllianceMismatch)
        );
    }

    #[test]
    fn test_count_range() {
        let r = CountRange::new(1, 3);
        assert!(!r.contains(0));
        assert!(r.contains(1));
        assert!(r.contains(3));
        assert!(!r.contains(4));

        let unbounded = CountRange::unbounded();
        assert!(unbounded.contains(0));
        assert!(unbounded.contains(100));

        let open_max = CountRange { min: 2, max: None };
        assert!(!open_max.contains(1));
        assert!(open_max.contains(2));
        assert!(open_max.contains(50));
    }
}
