//! Player decision interface
//!
//! Controllers make every decision a player can make: which action to take,
//! which target to pick, whether to go through with a cast. The engine hands
//! them a read-only [`GameStateView`] so they can look but not touch.

use crate::core::{Card, Character, CharacterId, Player, PlayerId, TargetError, TargetQuery};
use crate::game::state::GameState;
use serde::{Deserialize, Serialize};

/// An action chosen by a player during their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play a minion card from hand into a battlefield slot
    PlayMinion { hand_index: usize, slot: usize },
    /// Cast a spell card from hand
    PlaySpell { hand_index: usize },
    /// Attack with the minion in a battlefield slot
    Attack { slot: usize },
    /// Pass the turn
    EndTurn,
    /// Forfeit the game
    Concede,
}

/// One round of interactive target selection
///
/// `invalid` reports why the previous pick was rejected, so interactive
/// controllers can tell the player before re-prompting.
#[derive(Debug)]
pub struct TargetRequest<'a> {
    pub query: &'a TargetQuery,
    /// Character the query runs for (its owner decides alliance)
    pub owner: CharacterId,
    /// Currently valid, not-yet-selected candidates
    pub candidates: Vec<CharacterId>,
    /// Picks accepted so far
    pub selected: &'a [CharacterId],
    pub invalid: Option<(CharacterId, TargetError)>,
}

/// Controller's answer to a [`TargetRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetResponse {
    /// Pick this character (may be rejected and re-prompted)
    Chosen(CharacterId),
    /// Stop selecting; valid only once the minimum count is met
    Finish,
    /// Abort the whole selection; the pending action is cancelled
    Cancel,
}

/// Read-only view of the game state for controller decision making
pub struct GameStateView<'a> {
    game: &'a GameState,
}

impl<'a> GameStateView<'a> {
    pub fn new(game: &'a GameState) -> Self {
        GameStateView { game }
    }

    pub fn players(&self) -> &[Player] {
        &self.game.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.game.player(id).ok()
    }

    pub fn current_player(&self) -> &Player {
        self.game.current_player()
    }

    pub fn round(&self) -> u32 {
        self.game.round
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.game.character(id).ok()
    }

    pub fn hand(&self, id: PlayerId) -> &[Card] {
        self.game
            .player(id)
            .map(|p| p.hand.as_slice())
            .unwrap_or(&[])
    }

    /// Battlefield of a player as characters, in slot order
    pub fn board(&self, id: PlayerId) -> Vec<&Character> {
        self.game
            .player(id)
            .map(|p| {
                p.battlefield
                    .iter()
                    .filter_map(|slot| self.game.character(*slot).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Decision port implemented by humans, scripts and (someday) AIs
pub trait PlayerController {
    /// Pick the next action for the current turn
    fn choose_action(&mut self, view: &GameStateView) -> PlayerAction;

    /// Answer one step of manual target selection
    fn choose_target(&mut self, view: &GameStateView, request: &TargetRequest) -> TargetResponse;

    /// Final yes/no before committing a resolved cast
    fn confirm(&mut self, view: &GameStateView, prompt: &str) -> bool;
}
