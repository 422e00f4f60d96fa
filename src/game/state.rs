//! Central game state
//!
//! `GameState` owns everything: the character and ability stores, the
//! players, the aura registry, the RNG and the logger. Mutation entry points
//! live in `impl GameState` blocks spread across the `game` submodules
//! (abilities, auras, effects, actions); this file holds construction, zone
//! bookkeeping and the turn/round machinery.

use crate::core::{
    Ability, AbilityId, Card, Character, CharacterId, CharacterKind, EntityStore, MinionCard,
    Player, PlayerId, TargetError, TargetQuery, BATTLEFIELD_SIZE, HERO_HEALTH, MAX_MANA,
};
use crate::game::aura::AuraRegistry;
use crate::game::logger::GameLogger;
use crate::{HearthError, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cell::RefCell;

/// Cards drawn before round one: first player draws fewer to offset the
/// initiative advantage
pub const OPENING_HAND_FIRST: usize = 3;
pub const OPENING_HAND_OTHERS: usize = 4;

/// Complete game state
///
/// `rng` sits behind a `RefCell` so read-mostly paths (target resolution)
/// can sample without taking `&mut self`. Seed it for deterministic games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub characters: EntityStore<CharacterId, Character>,

    /// Ability instances, never deallocated; a destroyed minion's silenced
    /// instances simply go unreferenced
    pub abilities: EntityStore<AbilityId, Ability>,

    /// Players in turn order
    pub players: Vec<Player>,

    pub auras: AuraRegistry,

    /// Index into `players` of the player whose turn it is
    pub turn_player: usize,

    /// One-based; mana available is `min(10, round)`
    pub round: u32,

    pub rng: RefCell<ChaCha12Rng>,

    pub logger: GameLogger,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            characters: EntityStore::new(),
            abilities: EntityStore::new(),
            players: Vec::new(),
            auras: AuraRegistry::new(),
            turn_player: 0,
            round: 1,
            rng: RefCell::new(ChaCha12Rng::seed_from_u64(0)),
            logger: GameLogger::new(),
        }
    }

    /// Re-seed the RNG for deterministic games
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = RefCell::new(ChaCha12Rng::seed_from_u64(seed));
    }

    /// Add a player with a hero and an empty battlefield
    ///
    /// The deck is used as given; `start_game` shuffles.
    pub fn add_player(&mut self, name: impl Into<String>, deck: Vec<Card>) -> PlayerId {
        let id = PlayerId::new(self.players.len() as u32);
        let name = name.into();

        let hero_id = self.characters.alloc();
        let mut hero = Character::new_slot(hero_id, id);
        hero.set_as_hero(name.clone(), HERO_HEALTH);
        self.characters.insert(hero_id, hero);

        let mut battlefield: SmallVec<[CharacterId; BATTLEFIELD_SIZE]> = SmallVec::new();
        for _ in 0..BATTLEFIELD_SIZE {
            let slot_id = self.characters.alloc();
            self.characters.insert(slot_id, Character::new_slot(slot_id, id));
            battlefield.push(slot_id);
        }

        self.players.push(Player::new(id, name, hero_id, battlefield, deck));
        id
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(id.as_u32() as usize)
            .ok_or(HearthError::EntityNotFound(id.as_u32()))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(id.as_u32() as usize)
            .ok_or(HearthError::EntityNotFound(id.as_u32()))
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.players[self.turn_player].id
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn_player]
    }

    pub fn character(&self, id: CharacterId) -> Result<&Character> {
        self.characters.get(id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Result<&mut Character> {
        self.characters.get_mut(id)
    }

    pub fn ability(&self, id: AbilityId) -> Result<&Ability> {
        self.abilities.get(id)
    }

    /// All battlefield positions in stable order: each player's hero followed
    /// by their slots, players in turn order. Includes empty slots; filtering
    /// is the target query's job.
    pub fn roster(&self) -> Vec<CharacterId> {
        let mut out = Vec::with_capacity(self.players.len() * (BATTLEFIELD_SIZE + 1));
        for player in &self.players {
            out.push(player.hero);
            out.extend(player.battlefield.iter().copied());
        }
        out
    }

    /// Does any character on this side have an active (unstealthed) taunt?
    pub fn side_has_active_taunt(&self, side: PlayerId) -> bool {
        self.characters
            .iter()
            .any(|(_, c)| c.owner == side && c.has_active_taunt())
    }

    /// Validate one candidate against a query, looking up both characters
    /// and the taunt state of the target's side
    pub fn validate_target(
        &self,
        query: &TargetQuery,
        owner: CharacterId,
        target: CharacterId,
    ) -> std::result::Result<(), TargetError> {
        let (owner, target) = match (self.characters.get(owner), self.characters.get(target)) {
            (Ok(o), Ok(t)) => (o, t),
            // An unknown id behaves like an empty slot
            _ => return Err(TargetError::TargetDead),
        };
        let side_taunt = self.side_has_active_taunt(target.owner);
        query.is_valid_target(owner, target, side_taunt)
    }

    /// Shuffle decks and deal opening hands
    pub fn start_game(&mut self) -> Result<()> {
        self.logger.minimal("The game begins!");

        {
            let mut rng = self.rng.borrow_mut();
            for player in &mut self.players {
                player.deck.shuffle(&mut *rng);
            }
        }

        let player_ids: Vec<PlayerId> = self.players.iter().map(|p| p.id).collect();
        for (idx, id) in player_ids.into_iter().enumerate() {
            let draws = if idx == 0 {
                OPENING_HAND_FIRST
            } else {
                OPENING_HAND_OTHERS
            };
            for _ in 0..draws {
                self.draw_card(id)?;
            }
        }
        Ok(())
    }

    /// Begin the current player's turn: refill mana and draw
    pub fn start_turn(&mut self) -> Result<()> {
        let player_id = self.current_player_id();
        let round = self.round;

        let hero = self.player(player_id)?.hero;
        let hero_alive = self.character(hero)?.is_alive();

        {
            let name = self.player(player_id)?.name.clone();
            self.logger
                .normal(&format!("--- Round {}: {}'s turn ---", round, name));
        }

        let player = self.player_mut(player_id)?;
        player.set_max_mana((round as i32).min(MAX_MANA));
        if hero_alive {
            player.reset_mana();
        }

        self.draw_card(player_id)?;
        self.resolve_deaths()?;
        Ok(())
    }

    /// End the current player's turn: restore minion moves and advance,
    /// skipping defeated players. Wrapping past the last seat starts a new
    /// round.
    pub fn end_turn(&mut self) -> Result<()> {
        let player_id = self.current_player_id();
        let board: Vec<CharacterId> = self.player(player_id)?.battlefield.to_vec();
        for id in board {
            self.characters.get_mut(id)?.reset_moves();
        }

        for _ in 0..self.players.len() {
            self.turn_player += 1;
            if self.turn_player >= self.players.len() {
                self.turn_player = 0;
                self.round += 1;
            }
            let next = &self.players[self.turn_player];
            if self.characters.get(next.hero)?.is_alive() {
                break;
            }
        }
        Ok(())
    }

    /// Draw one card, with fatigue and overdraw handling
    pub fn draw_card(&mut self, player_id: PlayerId) -> Result<()> {
        let name = self.player(player_id)?.name.clone();

        if self.player(player_id)?.deck.is_empty() {
            let fatigue = {
                let player = self.player_mut(player_id)?;
                player.fatigue += 1;
                player.fatigue
            };
            self.logger.normal(&format!(
                "{}'s deck is empty, they take {} fatigue damage",
                name, fatigue
            ));
            let hero = self.player(player_id)?.hero;
            self.characters.get_mut(hero)?.take_damage(fatigue);
            return Ok(());
        }

        let card = self.player_mut(player_id)?.deck.remove(0);
        if self.player(player_id)?.hand_is_full() {
            self.logger.normal(&format!(
                "{}'s hand is full! {} is discarded",
                name,
                card.name()
            ));
        } else {
            self.logger
                .verbose(&format!("{} draws {}", name, card.name()));
            self.player_mut(player_id)?.hand.push(card);
        }
        Ok(())
    }

    /// Place a minion from a card template into an empty battlefield slot
    ///
    /// Instantiates the card's abilities as fresh, dormant instances, then
    /// activates them and recomputes aura coverage for the newcomer.
    pub fn summon_minion(
        &mut self,
        player_id: PlayerId,
        slot: usize,
        card: &MinionCard,
    ) -> Result<CharacterId> {
        let slot_id = *self
            .player(player_id)?
            .battlefield
            .get(slot)
            .ok_or_else(|| HearthError::InvalidAction(format!("no battlefield slot {}", slot)))?;

        if self.characters.get(slot_id)?.kind != CharacterKind::None {
            return Err(HearthError::InvalidAction(format!(
                "battlefield slot {} is occupied",
                slot
            )));
        }

        {
            let character = self.characters.get_mut(slot_id)?;
            character.seed_minion_stats(
                card.name.clone(),
                card.description.clone(),
                card.attack,
                card.health,
            );
        }
        self.grant_card_abilities(slot_id, card)?;

        let name = self.player(player_id)?.name.clone();
        self.logger
            .normal(&format!("{} summons {}", name, card.name));

        self.refresh_character_effects(slot_id)?;
        self.reevaluate_auras()?;
        Ok(slot_id)
    }

    /// Replace a character's stats, flags and abilities wholesale from a
    /// minion template
    ///
    /// The old abilities are dropped, not silenced: the stat line is reseeded
    /// anyway and aura sources are pulled from the registry explicitly.
    /// Clearing aura membership before the reevaluation pass lets standing
    /// auras re-grant to the new form.
    pub fn transform_character(&mut self, id: CharacterId, card: &MinionCard) -> Result<()> {
        {
            let old_name = self.characters.get(id)?.name.clone();
            self.logger
                .normal(&format!("{} transforms into {}", old_name, card.name));
        }

        self.unregister_aura_sources(id)?;

        {
            let character = self.characters.get_mut(id)?;
            character.clear_battle_state();
            character.seed_minion_stats(
                card.name.clone(),
                card.description.clone(),
                card.attack,
                card.health,
            );
        }
        self.grant_card_abilities(id, card)?;
        self.refresh_character_effects(id)?;
        self.reevaluate_auras()?;
        Ok(())
    }

    fn grant_card_abilities(&mut self, id: CharacterId, card: &MinionCard) -> Result<()> {
        for template in &card.abilities {
            let ability_id = self.abilities.add(template.instantiate());
            self.characters.get_mut(id)?.effect_states.push(
                crate::core::EffectState {
                    ability: ability_id,
                    enabled: true,
                },
            );
        }
        Ok(())
    }

    /// Deal damage and log it. Death is resolved later by the sweep.
    pub fn damage_character(&mut self, id: CharacterId, amount: i32) -> Result<()> {
        let name = self.characters.get(id)?.name.clone();
        self.characters.get_mut(id)?.take_damage(amount);
        self.logger
            .normal(&format!("{} takes {} damage", name, amount));
        Ok(())
    }

    /// Heal up to max health and log it
    pub fn heal_character(&mut self, id: CharacterId, amount: i32) -> Result<()> {
        let name = self.characters.get(id)?.name.clone();
        self.characters.get_mut(id)?.restore_health(amount);
        self.logger
            .normal(&format!("{} is healed for {}", name, amount));
        Ok(())
    }

    /// Tear down a dead character: silence its own effects, pull its auras
    /// out of the registry and reset the slot
    pub fn on_destruction(&mut self, id: CharacterId) -> Result<()> {
        let name = self.characters.get(id)?.name.clone();
        self.logger.normal(&format!("{} is destroyed", name));

        self.unregister_aura_sources(id)?;

        let states: Vec<AbilityId> = self
            .characters
            .get(id)?
            .effect_states
            .iter()
            .map(|s| s.ability)
            .collect();
        for ability in states {
            self.silence_ability(id, ability)?;
        }

        self.characters.get_mut(id)?.clear_battle_state();
        Ok(())
    }

    /// Sweep the board for dead characters until the state is stable
    ///
    /// Destruction unwinds buffs, which can change other characters' health,
    /// so the sweep repeats until a pass finds nothing to do.
    pub fn resolve_deaths(&mut self) -> Result<()> {
        loop {
            let dead: Vec<CharacterId> = self
                .characters
                .iter()
                .filter(|(_, c)| c.kind != CharacterKind::None && c.health <= 0)
                .map(|(id, _)| id)
                .collect();
            if dead.is_empty() {
                return Ok(());
            }
            for id in dead {
                self.on_destruction(id)?;
            }
            self.reevaluate_auras()?;
        }
    }

    /// Forfeit: the player's hero drops to zero health
    pub fn concede(&mut self, player_id: PlayerId) -> Result<()> {
        let name = self.player(player_id)?.name.clone();
        self.logger.minimal(&format!("{} concedes!", name));
        let hero = self.player(player_id)?.hero;
        let hero_char = self.characters.get_mut(hero)?;
        hero_char.health = 0;
        self.resolve_deaths()
    }

    fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| {
            self.characters
                .get(p.hero)
                .map(|hero| hero.is_alive())
                .unwrap_or(false)
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.alive_players().count() <= 1
    }

    /// The last player standing, if the game is decided
    pub fn winner(&self) -> Option<PlayerId> {
        let mut alive = self.alive_players();
        let first = alive.next()?;
        if alive.next().is_some() {
            None
        } else {
            Some(first.id)
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
