//! Player representation: hero, battlefield slots, deck, hand, mana

use crate::core::{Card, CharacterId, PlayerId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of minion slots per player
pub const BATTLEFIELD_SIZE: usize = 7;

/// Hero starting health
pub const HERO_HEALTH: i32 = 30;

/// Maximum cards held in hand; further draws burn the top card
pub const MAX_HAND: usize = 10;

/// Mana crystal cap
pub const MAX_MANA: i32 = 10;

/// A player: identity plus owned zones
///
/// Hero and battlefield slots are character ids into the game's character
/// store; the slot characters exist for the whole game and empty slots are
/// simply `CharacterKind::None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    pub name: String,

    pub hero: CharacterId,

    /// Fixed minion slots, in board order
    pub battlefield: SmallVec<[CharacterId; BATTLEFIELD_SIZE]>,

    /// Deck, top card at index 0
    pub deck: Vec<Card>,

    pub hand: Vec<Card>,

    pub mana: i32,

    pub max_mana: i32,

    /// Escalating self-damage counter for drawing from an empty deck
    pub fatigue: i32,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        hero: CharacterId,
        battlefield: SmallVec<[CharacterId; BATTLEFIELD_SIZE]>,
        deck: Vec<Card>,
    ) -> Self {
        Player {
            id,
            name: name.into(),
            hero,
            battlefield,
            deck,
            hand: Vec::new(),
            mana: 0,
            max_mana: 0,
            fatigue: 0,
        }
    }

    /// Refill mana crystals at the start of the turn
    pub fn reset_mana(&mut self) {
        self.mana = self.max_mana;
    }

    pub fn set_max_mana(&mut self, max_mana: i32) {
        self.max_mana = max_mana.min(MAX_MANA);
    }

    /// In hand and affordable?
    pub fn can_play_card(&self, hand_index: usize) -> bool {
        self.hand
            .get(hand_index)
            .map_or(false, |card| card.cost() <= self.mana)
    }

    pub fn hand_is_full(&self) -> bool {
        self.hand.len() >= MAX_HAND
    }
}
