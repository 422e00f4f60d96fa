//! Aura propagation across board changes

use hearth_rs::cards::basic::{bloodfen_raptor, chillwind_yeti, sheep, stormwind_champion};
use hearth_rs::core::{CharacterId, MinionCard, PlayerId};
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

fn stats(game: &GameState, id: CharacterId) -> (i32, i32, i32) {
    let c = game.character(id).unwrap();
    (c.attack, c.health, c.max_health)
}

#[test]
fn test_aura_buffs_existing_and_future_minions() {
    let (mut game, alice, _) = new_game();

    let yeti = summon(&mut game, alice, 0, &chillwind_yeti());
    assert_eq!(stats(&game, yeti), (4, 5, 5));

    let champion = summon(&mut game, alice, 1, &stormwind_champion());
    // The standing minion picks up +1/+1, the source does not buff itself
    assert_eq!(stats(&game, yeti), (5, 6, 6));
    assert_eq!(stats(&game, champion), (7, 7, 7));

    // A newcomer is buffed on arrival
    let raptor = summon(&mut game, alice, 2, &bloodfen_raptor());
    assert_eq!(stats(&game, raptor), (4, 3, 3));
}

#[test]
fn test_aura_never_crosses_to_the_enemy() {
    let (mut game, alice, bob) = new_game();
    summon(&mut game, alice, 0, &stormwind_champion());
    let enemy = summon(&mut game, bob, 0, &bloodfen_raptor());
    assert_eq!(stats(&game, enemy), (3, 2, 2));
}

#[test]
fn test_aura_is_revoked_when_the_source_dies() {
    let (mut game, alice, _) = new_game();
    let yeti = summon(&mut game, alice, 0, &chillwind_yeti());
    let champion = summon(&mut game, alice, 1, &stormwind_champion());
    assert_eq!(stats(&game, yeti), (5, 6, 6));

    game.character_mut(champion).unwrap().health = 0;
    game.resolve_deaths().unwrap();

    assert!(!game.character(champion).unwrap().is_alive());
    assert_eq!(stats(&game, yeti), (4, 5, 5));
    assert!(game.auras.is_empty());
}

#[test]
fn test_revocation_clamps_but_does_not_wound() {
    let (mut game, alice, _) = new_game();
    let yeti = summon(&mut game, alice, 0, &chillwind_yeti());
    let champion = summon(&mut game, alice, 1, &stormwind_champion());

    // Damage the buffed yeti down to 2/6, then remove the aura: max drops
    // to 5 and current health stays at 2
    game.damage_character(yeti, 4).unwrap();
    assert_eq!(stats(&game, yeti), (5, 2, 6));

    game.character_mut(champion).unwrap().health = 0;
    game.resolve_deaths().unwrap();
    assert_eq!(stats(&game, yeti), (4, 2, 5));
}

#[test]
fn test_transformed_minion_is_regranted() {
    let (mut game, alice, _) = new_game();
    let yeti = summon(&mut game, alice, 0, &chillwind_yeti());
    summon(&mut game, alice, 1, &stormwind_champion());
    assert_eq!(stats(&game, yeti), (5, 6, 6));

    // The sheep is a fresh body; the standing aura applies to it anew
    game.transform_character(yeti, &sheep()).unwrap();
    assert_eq!(game.character(yeti).unwrap().name, "Sheep");
    assert_eq!(stats(&game, yeti), (2, 2, 2));
}

#[test]
fn test_transforming_the_source_drops_the_aura() {
    let (mut game, alice, _) = new_game();
    let yeti = summon(&mut game, alice, 0, &chillwind_yeti());
    let champion = summon(&mut game, alice, 1, &stormwind_champion());
    assert_eq!(stats(&game, yeti), (5, 6, 6));

    game.transform_character(champion, &sheep()).unwrap();
    assert!(game.auras.is_empty());
    assert_eq!(stats(&game, yeti), (4, 5, 5));
}

#[test]
fn test_stacked_auras_grant_independently() {
    let (mut game, alice, _) = new_game();
    let yeti = summon(&mut game, alice, 0, &chillwind_yeti());
    let first = summon(&mut game, alice, 1, &stormwind_champion());
    summon(&mut game, alice, 2, &stormwind_champion());

    // Two auras on the yeti, and the champions buff each other
    assert_eq!(stats(&game, yeti), (6, 7, 7));
    assert_eq!(stats(&game, first), (8, 8, 8));

    game.character_mut(first).unwrap().health = 0;
    game.resolve_deaths().unwrap();
    assert_eq!(stats(&game, yeti), (5, 6, 6));
}
