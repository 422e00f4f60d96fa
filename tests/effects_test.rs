//! The effect catalog against a live board

use hearth_rs::cards::basic::{
    booty_bay_bodyguard, chillwind_yeti, default_deck, sheep,
};
use hearth_rs::core::{CharacterId, EffectFlag, EffectFn, MinionCard, PlayerId, CharacterKind, MAX_HAND};
use hearth_rs::game::GameState;

fn new_game() -> (GameState, PlayerId, PlayerId) {
    let mut game = GameState::new();
    game.logger.enable_capture();
    game.seed_rng(42);
    let alice = game.add_player("Alice", Vec::new());
    let bob = game.add_player("Bob", Vec::new());
    (game, alice, bob)
}

fn summon(game: &mut GameState, player: PlayerId, slot: usize, card: &MinionCard) -> CharacterId {
    game.summon_minion(player, slot, card).unwrap()
}

#[test]
fn test_damage_and_heal_cap() {
    let (mut game, alice, _) = new_game();
    let yeti = summon(&mut game, alice, 0, &chillwind_yeti());

    game.run_effect(&EffectFn::Damage(3), &[yeti]).unwrap();
    assert_eq!(game.character(yeti).unwrap().health, 2);

    // Healing never exceeds max health
    game.run_effect(&EffectFn::Heal(10), &[yeti]).unwrap();
    assert_eq!(game.character(yeti).unwrap().health, 5);
}

#[test]
fn test_destroy_marks_and_sweep_clears() {
    let (mut game, alice, _) = new_game();
    let yeti = summon(&mut game, alice, 0, &chillwind_yeti());

    game.run_effect(&EffectFn::Destroy, &[yeti]).unwrap();
    // Marked, not yet swept
    assert_eq!(game.character(yeti).unwrap().health, 0);
    assert_eq!(game.character(yeti).unwrap().kind, CharacterKind::Minion);

    game.resolve_deaths().unwrap();
    assert_eq!(game.character(yeti).unwrap().kind, CharacterKind::None);
    assert!(game.character(yeti).unwrap().effect_states.is_empty());
}

#[test]
fn test_sequence_runs_parts_in_order() {
    let (mut game, alice, _) = new_game();
    let yeti = summon(&mut game, alice, 0, &chillwind_yeti());

    // Damage past zero, then heal back: the minion survives because the
    // sweep only runs after the whole batch
    let effect = EffectFn::Sequence(vec![EffectFn::Damage(7), EffectFn::Heal(4)]);
    game.run_effect(&effect, &[yeti]).unwrap();
    game.resolve_deaths().unwrap();
    assert_eq!(game.character(yeti).unwrap().health, 2);
    assert!(game.character(yeti).unwrap().is_alive());
}

#[test]
fn test_transform_replaces_stats_and_abilities() {
    let (mut game, alice, _) = new_game();
    let bodyguard = summon(&mut game, alice, 0, &booty_bay_bodyguard());
    assert!(game.character(bodyguard).unwrap().has_flag(EffectFlag::Taunt));

    game.run_effect(&EffectFn::Transform(Box::new(sheep())), &[bodyguard])
        .unwrap();

    let c = game.character(bodyguard).unwrap();
    assert_eq!(c.name, "Sheep");
    assert_eq!((c.attack, c.health), (1, 1));
    assert!(!c.has_flag(EffectFlag::Taunt));
    assert!(c.effect_states.is_empty());
}

#[test]
fn test_draw_effect_targets_the_owner() {
    let (mut game, alice, _) = new_game();
    game.player_mut(alice).unwrap().deck = default_deck();
    let hero = game.player(alice).unwrap().hero;

    game.run_effect(&EffectFn::Draw(2), &[hero]).unwrap();
    assert_eq!(game.player(alice).unwrap().hand.len(), 2);
}

#[test]
fn test_discard_is_random_but_bounded() {
    let (mut game, alice, _) = new_game();
    game.player_mut(alice).unwrap().deck = default_deck();
    let hero = game.player(alice).unwrap().hero;
    for _ in 0..3 {
        game.draw_card(alice).unwrap();
    }
    assert_eq!(game.player(alice).unwrap().hand.len(), 3);

    game.run_effect(&EffectFn::Discard(2), &[hero]).unwrap();
    assert_eq!(game.player(alice).unwrap().hand.len(), 1);

    // Discarding more than the hand holds just empties it
    game.run_effect(&EffectFn::Discard(5), &[hero]).unwrap();
    assert!(game.player(alice).unwrap().hand.is_empty());
}

#[test]
fn test_overdraw_burns_the_top_card() {
    let (mut game, alice, _) = new_game();
    game.player_mut(alice).unwrap().deck = default_deck();
    let deck_size = game.player(alice).unwrap().deck.len();

    for _ in 0..(MAX_HAND + 1) {
        game.draw_card(alice).unwrap();
    }
    let player = game.player(alice).unwrap();
    assert_eq!(player.hand.len(), MAX_HAND);
    // The eleventh card left the deck but went nowhere
    assert_eq!(player.deck.len(), deck_size - (MAX_HAND + 1));
    assert_eq!(player.fatigue, 0);
}

#[test]
fn test_effects_on_an_empty_target_list_do_nothing() {
    let (mut game, alice, _) = new_game();
    let hand_before = game.player(alice).unwrap().hand.len();
    game.run_effect(&EffectFn::Draw(2), &[]).unwrap();
    game.run_effect(&EffectFn::Damage(5), &[]).unwrap();
    assert_eq!(game.player(alice).unwrap().hand.len(), hand_before);
}
