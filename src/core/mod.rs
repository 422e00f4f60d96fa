//! Core game types and entities

pub mod ability;
pub mod card;
pub mod character;
pub mod effects;
pub mod entity;
pub mod player;
pub mod targeting;

pub use ability::{Ability, AbilityTemplate};
pub use card::{Card, MinionCard, Spell, SpellCard};
pub use character::{Character, CharacterKind, EffectFlag, EffectState};
pub use effects::EffectFn;
pub use entity::{AbilityId, CharacterId, EntityKey, EntityStore, PlayerId};
pub use player::{Player, BATTLEFIELD_SIZE, HERO_HEALTH, MAX_HAND, MAX_MANA};
pub use targeting::{
    CountRange, SelectionMethod, TargetAlliance, TargetClass, TargetError, TargetQuery,
};
