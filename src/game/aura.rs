//! Aura registration and propagation
//!
//! An aura is an ability whose effect holds continuously while its source is
//! in play. The registry tracks `(source, ability)` pairs; each character
//! remembers which aura instances currently benefit it in `active_auras`.
//! After any board change, `reevaluate_auras` reconciles grants in two
//! passes: revoke everything that stopped holding, then grant everything
//! that newly holds.

use crate::core::{AbilityId, CharacterId, EffectFn};
use crate::game::state::GameState;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Registered aura sources, in registration order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuraRegistry {
    sources: Vec<(CharacterId, AbilityId)>,
}

impl AuraRegistry {
    pub fn new() -> Self {
        AuraRegistry::default()
    }

    pub fn entries(&self) -> &[(CharacterId, AbilityId)] {
        &self.sources
    }

    pub fn contains(&self, source: CharacterId, ability: AbilityId) -> bool {
        self.sources.contains(&(source, ability))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn push(&mut self, source: CharacterId, ability: AbilityId) {
        self.sources.push((source, ability));
    }

    fn remove(&mut self, source: CharacterId, ability: AbilityId) {
        self.sources.retain(|entry| *entry != (source, ability));
    }
}

impl GameState {
    /// Register an aura and grant it to every currently valid target
    ///
    /// Registering twice is a no-op; the per-target grant is idempotent too.
    pub fn register_aura_source(
        &mut self,
        source: CharacterId,
        ability_id: AbilityId,
    ) -> Result<()> {
        if self.auras.contains(source, ability_id) {
            return Ok(());
        }
        self.auras.push(source, ability_id);

        let query = self.abilities.get(ability_id)?.query.clone();
        for target in self.roster() {
            if self.validate_target(&query, source, target).is_ok() {
                self.try_grant_aura(source, ability_id, target)?;
            }
        }
        Ok(())
    }

    /// Remove one aura from the registry and revoke it everywhere
    pub fn unregister_aura(&mut self, source: CharacterId, ability_id: AbilityId) -> Result<()> {
        if !self.auras.contains(source, ability_id) {
            return Ok(());
        }
        self.auras.remove(source, ability_id);
        for target in self.roster() {
            self.revoke_aura(target, ability_id)?;
        }
        Ok(())
    }

    /// Remove every aura sourced by a character (destruction, transform)
    pub fn unregister_aura_sources(&mut self, source: CharacterId) -> Result<()> {
        let owned: Vec<AbilityId> = self
            .auras
            .entries()
            .iter()
            .filter(|(s, _)| *s == source)
            .map(|(_, a)| *a)
            .collect();
        for ability_id in owned {
            self.unregister_aura(source, ability_id)?;
        }
        Ok(())
    }

    /// Grant one aura instance to one character, if not already granted
    pub fn try_grant_aura(
        &mut self,
        source: CharacterId,
        ability_id: AbilityId,
        target: CharacterId,
    ) -> Result<()> {
        if self.characters.get(target)?.active_auras.contains(&ability_id) {
            return Ok(());
        }
        self.characters.get_mut(target)?.active_auras.insert(ability_id);

        let effect: EffectFn = self.abilities.get(ability_id)?.apply_effect.clone();
        self.run_effect(&effect, &[target])?;

        let target_name = self.characters.get(target)?.name.clone();
        let source_name = self.characters.get(source)?.name.clone();
        self.logger.verbose(&format!(
            "{} gains an aura from {}",
            target_name, source_name
        ));
        Ok(())
    }

    /// Revoke one aura instance from one character, if currently granted
    pub fn revoke_aura(&mut self, target: CharacterId, ability_id: AbilityId) -> Result<()> {
        if !self.characters.get(target)?.active_auras.contains(&ability_id) {
            return Ok(());
        }
        self.characters.get_mut(target)?.active_auras.remove(&ability_id);

        let effect: EffectFn = self.abilities.get(ability_id)?.silence_effect.clone();
        self.run_effect(&effect, &[target])?;

        let target_name = self.characters.get(target)?.name.clone();
        self.logger
            .verbose(&format!("{} loses an aura", target_name));
        Ok(())
    }

    /// Reconcile aura coverage against the current board
    ///
    /// Two passes over the registry: first revoke grants whose source died
    /// or whose target no longer matches the query, then grant to targets
    /// that newly match. Run after every board change (summon, transform,
    /// death sweep).
    pub fn reevaluate_auras(&mut self) -> Result<()> {
        let entries: Vec<(CharacterId, AbilityId)> = self.auras.entries().to_vec();
        let roster = self.roster();

        for &(source, ability_id) in &entries {
            let query = self.abilities.get(ability_id)?.query.clone();
            let source_alive = self.characters.get(source)?.is_alive();
            for &target in &roster {
                let granted = self
                    .characters
                    .get(target)?
                    .active_auras
                    .contains(&ability_id);
                if !granted {
                    continue;
                }
                let still_valid =
                    source_alive && self.validate_target(&query, source, target).is_ok();
                if !still_valid {
                    self.revoke_aura(target, ability_id)?;
                }
            }
        }

        for &(source, ability_id) in &entries {
            let (enabled, silenced, query) = {
                let ability = self.abilities.get(ability_id)?;
                (ability.enabled, ability.silenced, ability.query.clone())
            };
            if !enabled || silenced {
                continue;
            }
            if !self.characters.get(source)?.is_alive() {
                continue;
            }
            for &target in &roster {
                if self.validate_target(&query, source, target).is_ok() {
                    self.try_grant_aura(source, ability_id, target)?;
                }
            }
        }
        Ok(())
    }
}
