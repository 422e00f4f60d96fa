//! Scripted controller for tests and demos
//!
//! Plays back queued decisions; when a queue runs dry it falls back to a
//! safe default (end the turn, pick the first candidate, confirm). Games
//! driven by two empty scripts simply pass turns until fatigue decides.

use crate::core::CharacterId;
use crate::game::controller::{
    GameStateView, PlayerAction, PlayerController, TargetRequest, TargetResponse,
};
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct ScriptedController {
    actions: VecDeque<PlayerAction>,
    targets: VecDeque<TargetResponse>,
    confirms: VecDeque<bool>,
}

impl ScriptedController {
    pub fn new() -> Self {
        ScriptedController::default()
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = TargetResponse>) -> Self {
        self.targets.extend(targets);
        self
    }

    pub fn with_target_picks(mut self, picks: impl IntoIterator<Item = CharacterId>) -> Self {
        self.targets
            .extend(picks.into_iter().map(TargetResponse::Chosen));
        self
    }

    pub fn with_confirms(mut self, confirms: impl IntoIterator<Item = bool>) -> Self {
        self.confirms.extend(confirms);
        self
    }

    pub fn queue_action(&mut self, action: PlayerAction) {
        self.actions.push_back(action);
    }
}

impl PlayerController for ScriptedController {
    fn choose_action(&mut self, _view: &GameStateView) -> PlayerAction {
        self.actions.pop_front().unwrap_or(PlayerAction::EndTurn)
    }

    fn choose_target(&mut self, _view: &GameStateView, request: &TargetRequest) -> TargetResponse {
        if let Some(response) = self.targets.pop_front() {
            return response;
        }
        // Default: take the first open candidate, or stop
        match request.candidates.first() {
            Some(&candidate) => TargetResponse::Chosen(candidate),
            None => TargetResponse::Finish,
        }
    }

    fn confirm(&mut self, _view: &GameStateView, _prompt: &str) -> bool {
        self.confirms.pop_front().unwrap_or(true)
    }
}
