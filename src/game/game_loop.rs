//! Top-level turn loop
//!
//! Drives the round structure: start-of-turn upkeep, an action loop fed by
//! the player's controller, end-of-turn cleanup. Invalid player choices are
//! reported and re-prompted; real engine errors abort the game.

use crate::core::PlayerId;
use crate::game::actions::{process_action, ActionOutcome};
use crate::game::controller::{GameStateView, PlayerController};
use crate::game::state::GameState;
use crate::{HearthError, Result};
use serde::{Deserialize, Serialize};

/// Conditionally log at verbose level, compiled out without the
/// `verbose-logging` feature
#[macro_export]
macro_rules! log_if_verbose {
    ($logger:expr, $($arg:tt)*) => {{
        #[cfg(feature = "verbose-logging")]
        {
            $logger.verbose(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$logger;
        }
    }};
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    /// One player outlived the rest
    Winner,
    /// Everybody's hero died in the same sweep
    Draw,
    /// The round limit was reached before a decision
    RoundLimit,
}

/// Outcome of a completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<PlayerId>,
    pub rounds_played: u32,
    pub end_reason: GameEndReason,
}

/// Runs a game to completion
pub struct GameLoop {
    pub game: GameState,
    max_rounds: u32,
}

impl GameLoop {
    pub fn new(game: GameState) -> Self {
        GameLoop {
            game,
            max_rounds: 100,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Play until a winner emerges, a draw, or the round limit
    ///
    /// `controllers` pairs up with the players in seat order.
    pub fn run(&mut self, controllers: &mut [Box<dyn PlayerController>]) -> Result<GameResult> {
        if controllers.len() != self.game.players.len() {
            return Err(HearthError::InvalidAction(format!(
                "{} controllers for {} players",
                controllers.len(),
                self.game.players.len()
            )));
        }

        self.game.start_game()?;

        let mut end_reason = loop {
            if self.game.is_game_over() {
                break GameEndReason::Winner;
            }
            if self.game.round > self.max_rounds {
                break GameEndReason::RoundLimit;
            }

            self.game.start_turn()?;
            if self.game.is_game_over() {
                // Fatigue at the draw step can decide the game
                break GameEndReason::Winner;
            }

            let seat = self.game.turn_player;
            loop {
                let action = controllers[seat].choose_action(&GameStateView::new(&self.game));
                log_if_verbose!(self.game.logger, "seat {} chose {:?}", seat, action);

                match process_action(&mut self.game, controllers[seat].as_mut(), action) {
                    Ok(ActionOutcome::Continue) => {}
                    Ok(ActionOutcome::TurnOver) => break,
                    Err(HearthError::InvalidAction(reason)) => {
                        self.game
                            .logger
                            .normal(&format!("Invalid action: {}", reason));
                    }
                    Err(err) => return Err(err),
                }
                if self.game.is_game_over() {
                    break;
                }
            }

            if self.game.is_game_over() {
                break GameEndReason::Winner;
            }
            self.game.end_turn()?;
        };

        let winner = self.game.winner();
        if end_reason == GameEndReason::Winner && winner.is_none() {
            end_reason = GameEndReason::Draw;
        }

        match winner {
            Some(id) => {
                let name = self.game.player(id)?.name.clone();
                self.game.logger.minimal(&format!("{} wins!", name));
            }
            None => self.game.logger.minimal("The game ends without a winner"),
        }

        Ok(GameResult {
            winner,
            rounds_played: self.game.round,
            end_reason,
        })
    }
}
