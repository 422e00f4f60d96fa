//! Effect interpreter
//!
//! `run_effect` is the single dispatch point turning an [`EffectFn`] value
//! into state mutation over a resolved target list. Each variant iterates
//! the full list; `Sequence` runs its parts in declared order. Destruction
//! is not resolved here: health may sit at or below zero until the caller's
//! death sweep.

use crate::core::{CharacterId, EffectFn, PlayerId};
use crate::game::state::GameState;
use crate::Result;
use rand::Rng;

impl GameState {
    /// Apply one effect to a list of resolved targets
    pub fn run_effect(&mut self, effect: &EffectFn, targets: &[CharacterId]) -> Result<()> {
        match effect {
            EffectFn::Nothing => {}

            EffectFn::Sequence(parts) => {
                for part in parts {
                    self.run_effect(part, targets)?;
                }
            }

            EffectFn::Damage(amount) => {
                for &target in targets {
                    self.damage_character(target, *amount)?;
                }
            }

            EffectFn::Destroy => {
                for &target in targets {
                    let name = self.characters.get(target)?.name.clone();
                    self.characters.get_mut(target)?.health = 0;
                    self.logger
                        .normal(&format!("{} is marked for destruction", name));
                }
            }

            EffectFn::Heal(amount) => {
                for &target in targets {
                    self.heal_character(target, *amount)?;
                }
            }

            EffectFn::ChangeAttack(delta) => {
                for &target in targets {
                    let character = self.characters.get_mut(target)?;
                    character.change_attack(*delta);
                    let line = format!("{}'s attack becomes {}", character.name, character.attack);
                    self.logger.verbose(&line);
                }
            }

            EffectFn::ChangeMaxHealth(delta) => {
                for &target in targets {
                    let character = self.characters.get_mut(target)?;
                    character.change_max_health(*delta);
                    let line = format!(
                        "{}'s health becomes {}/{}",
                        character.name, character.health, character.max_health
                    );
                    self.logger.verbose(&line);
                }
            }

            EffectFn::SetMovesLeft(moves) => {
                for &target in targets {
                    self.characters.get_mut(target)?.moves_left = *moves;
                }
            }

            EffectFn::Transform(card) => {
                for &target in targets {
                    self.transform_character(target, card)?;
                }
            }

            EffectFn::Flags { add, remove } => {
                for &target in targets {
                    let character = self.characters.get_mut(target)?;
                    for flag in add {
                        character.flags.insert(*flag);
                    }
                    for flag in remove {
                        character.flags.remove(flag);
                    }
                }
            }

            EffectFn::Draw(count) => {
                if let Some(player) = self.first_target_owner(targets)? {
                    for _ in 0..*count {
                        self.draw_card(player)?;
                    }
                }
            }

            EffectFn::Discard(count) => {
                if let Some(player) = self.first_target_owner(targets)? {
                    for _ in 0..*count {
                        self.discard_random(player)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Player-scoped effects act on the first target's owner
    fn first_target_owner(&self, targets: &[CharacterId]) -> Result<Option<PlayerId>> {
        match targets.first() {
            Some(&target) => Ok(Some(self.characters.get(target)?.owner)),
            None => Ok(None),
        }
    }

    /// Discard one random card from a player's hand
    pub fn discard_random(&mut self, player_id: PlayerId) -> Result<()> {
        let hand_size = self.player(player_id)?.hand.len();
        if hand_size == 0 {
            return Ok(());
        }
        let index = self.rng.borrow_mut().gen_range(0..hand_size);
        let card = self.player_mut(player_id)?.hand.remove(index);
        let name = self.player(player_id)?.name.clone();
        self.logger
            .normal(&format!("{} discards {}", name, card.name()));
        Ok(())
    }
}
