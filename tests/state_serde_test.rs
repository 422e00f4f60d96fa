//! Full game state serialization round trips

use hearth_rs::cards::basic::{chillwind_yeti, default_deck, stormwind_champion};
use hearth_rs::core::EffectFn;
use hearth_rs::game::GameState;

fn snapshot_game() -> GameState {
    let mut game = GameState::new();
    game.logger.enable_capture();
    game.seed_rng(7);
    let alice = game.add_player("Alice", default_deck());
    let bob = game.add_player("Bob", default_deck());
    game.start_game().unwrap();

    let yeti = game.summon_minion(alice, 0, &chillwind_yeti()).unwrap();
    game.summon_minion(alice, 1, &stormwind_champion()).unwrap();
    game.summon_minion(bob, 0, &chillwind_yeti()).unwrap();
    game.damage_character(yeti, 2).unwrap();
    game
}

#[test]
fn test_state_round_trips_through_json() {
    let game = snapshot_game();
    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.round, game.round);
    assert_eq!(restored.players.len(), game.players.len());
    assert_eq!(restored.characters.len(), game.characters.len());
    assert_eq!(restored.abilities.len(), game.abilities.len());
    assert_eq!(restored.auras.len(), game.auras.len());

    for player in &game.players {
        let other = restored.player(player.id).unwrap();
        assert_eq!(other.name, player.name);
        assert_eq!(other.hand.len(), player.hand.len());
        assert_eq!(other.deck.len(), player.deck.len());
        assert_eq!(other.fatigue, player.fatigue);
    }

    for (id, character) in game.characters.iter() {
        let other = restored.character(id).unwrap();
        assert_eq!(other.kind, character.kind);
        assert_eq!(other.name, character.name);
        assert_eq!(other.attack, character.attack);
        assert_eq!(other.health, character.health);
        assert_eq!(other.max_health, character.max_health);
        assert_eq!(other.flags, character.flags);
        assert_eq!(other.active_auras, character.active_auras);
    }
}

#[test]
fn test_rng_state_survives_the_round_trip() {
    let game = snapshot_game();
    let json = serde_json::to_string(&game).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();
    let mut game = game;

    // Identical RNG state means identical random outcomes afterwards
    let alice = game.players[0].id;
    for _ in 0..3 {
        game.discard_random(alice).unwrap();
        restored.discard_random(alice).unwrap();
    }
    let hand: Vec<&str> = game.players[0].hand.iter().map(|c| c.name()).collect();
    let restored_hand: Vec<&str> =
        restored.players[0].hand.iter().map(|c| c.name()).collect();
    assert_eq!(hand, restored_hand);
}

#[test]
fn test_restored_state_keeps_playing() {
    let game = snapshot_game();
    let json = serde_json::to_string(&game).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();

    // Aura bookkeeping still works on the restored state
    let alice = restored.players[0].id;
    let yeti = restored.player(alice).unwrap().battlefield[0];
    let champion = restored.player(alice).unwrap().battlefield[1];
    assert_eq!(restored.character(yeti).unwrap().attack, 5);

    restored.character_mut(champion).unwrap().health = 0;
    restored.resolve_deaths().unwrap();
    assert_eq!(restored.character(yeti).unwrap().attack, 4);

    // And effects run as usual
    restored.run_effect(&EffectFn::Heal(2), &[yeti]).unwrap();
    assert!(restored.character(yeti).unwrap().health <= 6);
}
