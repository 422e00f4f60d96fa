//! Character ability lifecycle
//!
//! Activation and silencing are idempotent: an instance applies at most once
//! and silences at most once, and silence is terminal. Aura-flagged abilities
//! route through the aura registry; everything else resolves its query and
//! runs the effect one time.

use crate::core::{AbilityId, CharacterId, EffectFlag, EffectState};
use crate::game::state::GameState;
use crate::Result;

impl GameState {
    /// Activate one ability instance for its owning character
    ///
    /// No-op if the instance already applied or was silenced.
    pub fn apply_ability(&mut self, owner: CharacterId, ability_id: AbilityId) -> Result<()> {
        {
            let ability = self.abilities.get(ability_id)?;
            if ability.enabled || ability.silenced {
                return Ok(());
            }
        }
        self.abilities.get_mut(ability_id)?.enabled = true;

        let (flag, query, effect) = {
            let ability = self.abilities.get(ability_id)?;
            (
                ability.flag,
                ability.query.clone(),
                ability.apply_effect.clone(),
            )
        };

        {
            let name = self.characters.get(owner)?.name.clone();
            self.logger
                .verbose(&format!("{} activates its {} effect", name, flag));
        }

        if flag == EffectFlag::Aura {
            self.register_aura_source(owner, ability_id)?;
        } else {
            let targets = self.resolve_auto(&query, owner);
            self.run_effect(&effect, &targets)?;
        }
        Ok(())
    }

    /// Silence one ability instance, undoing its applied effect
    ///
    /// No-op unless the instance is enabled and not yet silenced. Terminal:
    /// a silenced instance never applies again.
    pub fn silence_ability(&mut self, owner: CharacterId, ability_id: AbilityId) -> Result<()> {
        {
            let ability = self.abilities.get(ability_id)?;
            if !ability.enabled || ability.silenced {
                return Ok(());
            }
        }
        self.abilities.get_mut(ability_id)?.silenced = true;

        let (flag, query, effect) = {
            let ability = self.abilities.get(ability_id)?;
            (
                ability.flag,
                ability.query.clone(),
                ability.silence_effect.clone(),
            )
        };

        {
            let name = self.characters.get(owner)?.name.clone();
            self.logger
                .verbose(&format!("{}'s {} effect is silenced", name, flag));
        }

        if flag == EffectFlag::Aura {
            // Silencing any aura pulls every aura the holder sources
            self.unregister_aura_sources(owner)?;
        } else {
            let targets = self.resolve_auto(&query, owner);
            self.run_effect(&effect, &targets)?;
        }
        Ok(())
    }

    /// Drive every ability of a character toward its desired state
    ///
    /// `EffectState::enabled` is the intent; apply/silence guards make the
    /// reconciliation idempotent.
    pub fn refresh_character_effects(&mut self, id: CharacterId) -> Result<()> {
        let states: Vec<EffectState> = self.characters.get(id)?.effect_states.clone();
        for state in states {
            if state.enabled {
                self.apply_ability(id, state.ability)?;
            } else {
                self.silence_ability(id, state.ability)?;
            }
        }
        Ok(())
    }

    /// Silence everything a character has, marking the intent too
    pub fn silence_character(&mut self, id: CharacterId) -> Result<()> {
        for state in &mut self.characters.get_mut(id)?.effect_states {
            state.enabled = false;
        }
        self.refresh_character_effects(id)
    }
}
