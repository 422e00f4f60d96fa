//! Turn actions: play cards, attack, end turn
//!
//! Every action validates before it mutates. Spell casts resolve all of
//! their targets first and commit only after the player confirms, so a
//! cancelled cast costs nothing. A death sweep closes out each committed
//! action.

use crate::core::{
    Card, CharacterId, CountRange, EffectFlag, EffectFn, SelectionMethod, TargetAlliance,
    TargetClass, TargetQuery,
};
use crate::game::controller::{GameStateView, PlayerAction, PlayerController};
use crate::game::resolver::resolve_targets;
use crate::game::state::GameState;
use crate::{HearthError, Result};

/// What an action did to the flow of the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The turn continues; prompt for another action
    Continue,
    /// The player passed or the game ended
    TurnOver,
}

/// The query an ordinary attack runs: one enemy, taunt honored
pub fn attack_query() -> TargetQuery {
    TargetQuery::new(
        TargetAlliance::Enemy,
        TargetClass::Any,
        CountRange::exactly(1),
        SelectionMethod::Manual,
    )
    .respecting_taunt()
}

/// Dispatch one chosen action
pub fn process_action(
    game: &mut GameState,
    controller: &mut dyn PlayerController,
    action: PlayerAction,
) -> Result<ActionOutcome> {
    match action {
        PlayerAction::PlayMinion { hand_index, slot } => {
            play_minion(game, hand_index, slot)?;
            Ok(ActionOutcome::Continue)
        }
        PlayerAction::PlaySpell { hand_index } => {
            play_spell(game, controller, hand_index)?;
            Ok(ActionOutcome::Continue)
        }
        PlayerAction::Attack { slot } => {
            attack(game, controller, slot)?;
            Ok(ActionOutcome::Continue)
        }
        PlayerAction::EndTurn => Ok(ActionOutcome::TurnOver),
        PlayerAction::Concede => {
            let player = game.current_player_id();
            game.concede(player)?;
            Ok(ActionOutcome::TurnOver)
        }
    }
}

/// Play a minion card from the current player's hand into a slot
pub fn play_minion(game: &mut GameState, hand_index: usize, slot: usize) -> Result<()> {
    let player_id = game.current_player_id();

    let card = {
        let player = game.player(player_id)?;
        let card = player
            .hand
            .get(hand_index)
            .ok_or_else(|| HearthError::InvalidAction(format!("no card at {}", hand_index)))?;
        if card.cost() > player.mana {
            return Err(HearthError::InvalidAction(format!(
                "not enough mana for {}",
                card.name()
            )));
        }
        match card {
            Card::Minion(minion) => minion.clone(),
            Card::Spell(_) => {
                return Err(HearthError::InvalidAction(format!(
                    "{} is not a minion",
                    card.name()
                )))
            }
        }
    };

    // summon_minion rejects occupied slots before anything is paid
    game.summon_minion(player_id, slot, &card)?;
    {
        let player = game.player_mut(player_id)?;
        player.mana -= card.cost;
        player.hand.remove(hand_index);
    }
    game.resolve_deaths()
}

/// Cast a spell card from the current player's hand
///
/// All spells on the card resolve their targets up front; the cast commits
/// only after every resolution succeeded and the player confirmed. Cancel
/// at any point leaves the game untouched.
pub fn play_spell(
    game: &mut GameState,
    controller: &mut dyn PlayerController,
    hand_index: usize,
) -> Result<()> {
    let player_id = game.current_player_id();

    let card = {
        let player = game.player(player_id)?;
        let card = player
            .hand
            .get(hand_index)
            .ok_or_else(|| HearthError::InvalidAction(format!("no card at {}", hand_index)))?;
        if card.cost() > player.mana {
            return Err(HearthError::InvalidAction(format!(
                "not enough mana for {}",
                card.name()
            )));
        }
        match card {
            Card::Spell(spell) => spell.clone(),
            Card::Minion(_) => {
                return Err(HearthError::InvalidAction(format!(
                    "{} is not a spell",
                    card.name()
                )))
            }
        }
    };

    // The caster's hero anchors alliance for spell targeting
    let caster = game.player(player_id)?.hero;

    let mut resolved: Vec<(EffectFn, Vec<CharacterId>)> = Vec::with_capacity(card.spells.len());
    for spell in &card.spells {
        match spell.query.method {
            SelectionMethod::Manual => {
                match resolve_targets(game, controller, &spell.query, caster) {
                    Some(targets) => resolved.push((spell.effect.clone(), targets)),
                    None => {
                        game.logger
                            .normal(&format!("{} is not cast", card.name));
                        return Ok(());
                    }
                }
            }
            _ => match game.resolve_checked(&spell.query, caster) {
                Ok(targets) => resolved.push((spell.effect.clone(), targets)),
                Err(err) => {
                    return Err(HearthError::InvalidAction(format!(
                        "{} cannot be cast: {}",
                        card.name, err
                    )))
                }
            },
        }
    }

    if !controller.confirm(
        &GameStateView::new(game),
        &format!("Cast {}?", card.name),
    ) {
        game.logger.normal(&format!("{} is not cast", card.name));
        return Ok(());
    }

    {
        let name = game.player(player_id)?.name.clone();
        game.logger
            .normal(&format!("{} casts {}", name, card.name));
        let player = game.player_mut(player_id)?;
        player.mana -= card.cost;
        player.hand.remove(hand_index);
    }

    for (effect, targets) in resolved {
        game.run_effect(&effect, &targets)?;
    }
    game.resolve_deaths()
}

/// Attack with the minion in a battlefield slot
///
/// Combat is mutual: the target takes the attacker's attack, the attacker
/// takes the target's. Attacking breaks stealth and spends the move.
pub fn attack(
    game: &mut GameState,
    controller: &mut dyn PlayerController,
    slot: usize,
) -> Result<()> {
    let player_id = game.current_player_id();
    let attacker = *game
        .player(player_id)?
        .battlefield
        .get(slot)
        .ok_or_else(|| HearthError::InvalidAction(format!("no battlefield slot {}", slot)))?;

    {
        let character = game.character(attacker)?;
        if !character.is_alive() {
            return Err(HearthError::InvalidAction(
                "that slot has no minion".to_string(),
            ));
        }
        if character.moves_left <= 0 {
            return Err(HearthError::InvalidAction(format!(
                "{} has already moved this turn",
                character.name
            )));
        }
        if character.attack <= 0 {
            return Err(HearthError::InvalidAction(format!(
                "{} has no attack",
                character.name
            )));
        }
    }

    let query = attack_query();
    let targets = match resolve_targets(game, controller, &query, attacker) {
        Some(targets) if !targets.is_empty() => targets,
        _ => return Ok(()),
    };
    let target = targets[0];

    let (attacker_name, attacker_attack) = {
        let c = game.character(attacker)?;
        (c.name.clone(), c.attack)
    };
    let (target_name, target_attack) = {
        let c = game.character(target)?;
        (c.name.clone(), c.attack)
    };
    game.logger
        .normal(&format!("{} attacks {}", attacker_name, target_name));

    game.damage_character(target, attacker_attack)?;
    if target_attack > 0 {
        game.damage_character(attacker, target_attack)?;
    }

    let broke_stealth = {
        let character = game.character_mut(attacker)?;
        character.moves_left -= 1;
        character.flags.remove(&EffectFlag::Stealth)
    };
    if broke_stealth {
        game.logger
            .normal(&format!("{} is no longer stealthed", attacker_name));
    }

    game.resolve_deaths()
}
