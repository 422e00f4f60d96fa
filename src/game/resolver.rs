//! Target resolution
//!
//! Turns a [`TargetQuery`] into a concrete list of character ids. Automatic
//! strategies (`Random`, `All`) are pure over the game state plus the RNG;
//! `Manual` loops through the controller port until the count range is
//! satisfied or the player cancels.

use crate::core::{CharacterId, SelectionMethod, TargetError, TargetQuery};
use crate::game::controller::{GameStateView, PlayerController, TargetRequest, TargetResponse};
use crate::game::state::GameState;
use crate::log_if_verbose;
use rand::seq::SliceRandom;

impl GameState {
    /// Every roster character the query accepts, in stable roster order
    pub fn available_targets(&self, query: &TargetQuery, owner: CharacterId) -> Vec<CharacterId> {
        self.roster()
            .into_iter()
            .filter(|&candidate| self.validate_target(query, owner, candidate).is_ok())
            .collect()
    }

    /// Resolve without a controller
    ///
    /// `All` takes every valid target. `Random` samples without replacement;
    /// the sample size is the range maximum, or the range minimum when the
    /// maximum is unbounded, capped by availability. `Manual` degrades to
    /// `All` here; ability triggers have nobody to ask.
    pub fn resolve_auto(&self, query: &TargetQuery, owner: CharacterId) -> Vec<CharacterId> {
        let available = self.available_targets(query, owner);
        match query.method {
            SelectionMethod::All | SelectionMethod::Manual => available,
            SelectionMethod::Random => {
                let want = query.count.max.unwrap_or(query.count.min);
                let take = want.min(available.len());
                let mut rng = self.rng.borrow_mut();
                available
                    .choose_multiple(&mut *rng, take)
                    .copied()
                    .collect()
            }
        }
    }

    /// Resolve automatically and enforce the count range
    ///
    /// `All` is exempt: it means "whatever is out there" and its range is
    /// descriptive. For the other strategies an unsatisfiable range (say, a
    /// single-target spell with no valid target) reports `CountOutOfRange`
    /// so the caller can abort before paying any cost.
    pub fn resolve_checked(
        &self,
        query: &TargetQuery,
        owner: CharacterId,
    ) -> std::result::Result<Vec<CharacterId>, TargetError> {
        let targets = self.resolve_auto(query, owner);
        if query.method != SelectionMethod::All && !query.check_count(targets.len()) {
            return Err(TargetError::CountOutOfRange);
        }
        Ok(targets)
    }
}

/// Drive manual selection through the controller, or fall back to the
/// automatic strategies
///
/// Prompting stops as soon as the count range is satisfied. Returns `None`
/// if the player cancelled, declined below the minimum, or the selection
/// ran out of candidates; the caller must then abandon the pending action
/// without side effects.
pub fn resolve_targets(
    game: &GameState,
    controller: &mut dyn PlayerController,
    query: &TargetQuery,
    owner: CharacterId,
) -> Option<Vec<CharacterId>> {
    if query.method != SelectionMethod::Manual {
        return Some(game.resolve_auto(query, owner));
    }

    let mut selected: Vec<CharacterId> = Vec::new();
    let mut invalid: Option<(CharacterId, TargetError)> = None;

    loop {
        // Selection stops as soon as the count range is satisfied
        if query.check_count(selected.len()) {
            break;
        }

        let candidates: Vec<CharacterId> = game
            .available_targets(query, owner)
            .into_iter()
            .filter(|c| !selected.contains(c))
            .collect();

        // Below the minimum with nothing left to pick: the selection can
        // never complete and the action must be abandoned
        if candidates.is_empty() {
            return None;
        }

        let request = TargetRequest {
            query,
            owner,
            candidates,
            selected: &selected,
            invalid: invalid.take(),
        };
        let response = controller.choose_target(&GameStateView::new(game), &request);

        match response {
            TargetResponse::Chosen(candidate) => {
                // Re-picking an accepted target is a silent re-prompt
                if selected.contains(&candidate) {
                    continue;
                }
                if let Err(err) = game.validate_target(query, owner, candidate) {
                    invalid = Some((candidate, err));
                    continue;
                }
                if let Err(err) = query.can_add_target(&selected, candidate) {
                    invalid = Some((candidate, err));
                    continue;
                }
                log_if_verbose!(game.logger, "target {} accepted", candidate);
                selected.push(candidate);
            }
            TargetResponse::Finish => break,
            TargetResponse::Cancel => return None,
        }
    }

    // Declining below the minimum abandons the action, same as a cancel
    if query.check_count(selected.len()) {
        Some(selected)
    } else {
        None
    }
}
