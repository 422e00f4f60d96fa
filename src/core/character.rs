//! Battlefield characters (heroes and minions)
//!
//! A `Character` is a mutable battlefield unit. Every player owns a hero plus
//! seven minion slots; empty slots are characters with `CharacterKind::None`.
//! Only pure stat/flag mutation lives here - anything that needs the rest of
//! the game (logging, abilities, auras) goes through `GameState`.

use crate::core::{AbilityId, CharacterId, PlayerId};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of unit occupies a battlefield slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CharacterKind {
    /// Empty slot - never a valid target, carries no effects
    #[default]
    None,
    Minion,
    Hero,
}

/// Flags a character can carry while in play
///
/// `Aura` doubles as the tag marking an ability as an ongoing effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectFlag {
    Aura,
    Taunt,
    Charge,
    Stealth,
}

impl fmt::Display for EffectFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EffectFlag::Aura => "aura",
            EffectFlag::Taunt => "taunt",
            EffectFlag::Charge => "charge",
            EffectFlag::Stealth => "stealth",
        };
        write!(f, "{}", name)
    }
}

/// One of a character's own granted abilities, with its desired state
///
/// `enabled = false` means the ability should be (or has been) silenced.
/// The ability instance itself tracks whether apply/silence actually ran.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectState {
    pub ability: AbilityId,
    pub enabled: bool,
}

/// A battlefield unit: hero or minion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,

    /// Owning player (the "commander")
    pub owner: PlayerId,

    pub kind: CharacterKind,

    pub name: String,

    pub description: String,

    pub attack: i32,

    /// May go negative transiently; destruction is resolved by the death
    /// sweep, not at the moment damage lands.
    pub health: i32,

    pub max_health: i32,

    pub defense: i32,

    pub moves_left: i32,

    /// Active effect flags (taunt, stealth, charge, ...)
    pub flags: FxHashSet<EffectFlag>,

    /// Aura ability instances currently benefiting this character
    pub active_auras: FxHashSet<AbilityId>,

    /// This character's own granted abilities, in grant order
    pub effect_states: Vec<EffectState>,
}

impl Character {
    /// Create an empty battlefield slot
    pub fn new_slot(id: CharacterId, owner: PlayerId) -> Self {
        Character {
            id,
            owner,
            kind: CharacterKind::None,
            name: String::new(),
            description: String::new(),
            attack: 0,
            health: 0,
            max_health: 0,
            defense: 0,
            moves_left: 0,
            flags: FxHashSet::default(),
            active_auras: FxHashSet::default(),
            effect_states: Vec::new(),
        }
    }

    /// Seed hero stats (name comes from the owning player)
    pub fn set_as_hero(&mut self, name: impl Into<String>, health: i32) {
        self.kind = CharacterKind::Hero;
        self.name = name.into();
        self.description = "A hero".to_string();
        self.max_health = health;
        self.health = health;
        self.attack = 0;
        self.defense = 0;
        self.moves_left = 0;
    }

    /// Seed minion stats from a card template
    ///
    /// Ability instantiation is handled by `GameState::summon_minion`; this
    /// only replaces the raw stats.
    pub fn seed_minion_stats(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        attack: i32,
        health: i32,
    ) {
        self.kind = CharacterKind::Minion;
        self.name = name.into();
        self.description = description.into();
        self.max_health = health;
        self.health = health;
        self.attack = attack;
        self.defense = 0;
        self.moves_left = 0;
    }

    pub fn is_alive(&self) -> bool {
        self.kind != CharacterKind::None && self.health > 0
    }

    pub fn has_flag(&self, flag: EffectFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Taunt only protects while unstealthed
    pub fn has_active_taunt(&self) -> bool {
        if self.kind == CharacterKind::None {
            return false;
        }
        if self.flags.contains(&EffectFlag::Stealth) {
            return false;
        }
        self.flags.contains(&EffectFlag::Taunt)
    }

    pub fn change_attack(&mut self, delta: i32) {
        self.attack += delta;
    }

    /// Raising max health raises current health by the same amount;
    /// lowering it clamps current health down to the new maximum.
    pub fn change_max_health(&mut self, delta: i32) {
        self.max_health += delta;
        if delta > 0 {
            self.health += delta;
        } else {
            self.health = self.health.min(self.max_health);
        }
    }

    /// Restore health, capped at the maximum
    pub fn restore_health(&mut self, amount: i32) {
        debug_assert!(amount >= 0);
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn take_damage(&mut self, amount: i32) {
        debug_assert!(amount >= 0);
        self.health -= amount;
    }

    /// Minions get one move back at the end of their owner's turn
    pub fn reset_moves(&mut self) {
        self.moves_left = if self.kind == CharacterKind::Minion { 1 } else { 0 };
    }

    /// Reset the slot after destruction: kind back to None, flags and aura
    /// membership gone. Effect states are cleared by the caller, which must
    /// silence them first.
    pub fn clear_battle_state(&mut self) {
        self.kind = CharacterKind::None;
        self.flags.clear();
        self.active_auras.clear();
        self.effect_states.clear();
        self.moves_left = 0;
    }

    /// Status prefix for display ("-TAUNT- " etc.)
    pub fn state_display(&self) -> String {
        let mut out = String::new();
        if self.moves_left <= 0 {
            out.push_str("-Zzz- ");
        }
        if self.has_flag(EffectFlag::Stealth) {
            out.push_str("-STEALTH- ");
        } else if self.has_active_taunt() {
            out.push_str("-TAUNT- ");
        }
        out
    }

    /// One-line battlefield display, empty string for an empty slot
    pub fn display(&self, detailed: bool) -> String {
        if self.kind == CharacterKind::None {
            return String::new();
        }
        let mut out = self.state_display();
        out.push_str(&format!(
            "{} | Attack: {:<4} | Health: {:<4}",
            self.name, self.attack, self.health
        ));
        if self.defense > 0 {
            out.push_str(&format!(" | Defense: {:<4}", self.defense));
        }
        if detailed {
            out.push_str(&format!(" | {}", self.description));
        }
        out
    }
}
