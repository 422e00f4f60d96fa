//! Interactive console controller
//!
//! Prompts on stdout, reads decisions from stdin. Bad input never reaches
//! the engine: it is reported and re-prompted here.

use crate::core::{Card, CharacterId, CharacterKind};
use crate::game::controller::{
    GameStateView, PlayerAction, PlayerController, TargetRequest, TargetResponse,
};
use std::io::{self, BufRead, Write};

#[derive(Debug, Default)]
pub struct InteractiveController;

impl InteractiveController {
    pub fn new() -> Self {
        InteractiveController
    }

    fn read_line(&self, prompt: &str) -> String {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim().to_string()
    }

    fn print_board(&self, view: &GameStateView) {
        println!();
        println!("=== Round {} ===", view.round());
        for player in view.players() {
            let hero = view.character(player.hero);
            let hero_line = hero.map(|h| h.display(false)).unwrap_or_default();
            println!("{} | Mana: {}/{}", hero_line, player.mana, player.max_mana);
            for (slot, character) in view.board(player.id).iter().enumerate() {
                if character.kind == CharacterKind::None {
                    println!("  [{}] <empty>", slot);
                } else {
                    println!("  [{}] {}", slot, character.display(false));
                }
            }
        }
    }

    fn print_hand(&self, view: &GameStateView) {
        let player = view.current_player();
        println!("{}'s hand:", player.name);
        for (index, card) in view.hand(player.id).iter().enumerate() {
            println!("  [{}] {}", index, card);
        }
    }
}

impl PlayerController for InteractiveController {
    fn choose_action(&mut self, view: &GameStateView) -> PlayerAction {
        self.print_board(view);
        self.print_hand(view);
        println!("Commands: p <card> [slot] = play | a <slot> = attack | e = end turn | c = concede");

        loop {
            let line = self.read_line("> ");
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("e") => return PlayerAction::EndTurn,
                Some("c") => return PlayerAction::Concede,
                Some("a") => {
                    if let Some(slot) = parts.next().and_then(|s| s.parse::<usize>().ok()) {
                        return PlayerAction::Attack { slot };
                    }
                    println!("Usage: a <slot>");
                }
                Some("p") => {
                    let hand_index = match parts.next().and_then(|s| s.parse::<usize>().ok()) {
                        Some(i) => i,
                        None => {
                            println!("Usage: p <card> [slot]");
                            continue;
                        }
                    };
                    let player = view.current_player();
                    match view.hand(player.id).get(hand_index) {
                        Some(Card::Spell(_)) => return PlayerAction::PlaySpell { hand_index },
                        Some(Card::Minion(_)) => {
                            match parts.next().and_then(|s| s.parse::<usize>().ok()) {
                                Some(slot) => return PlayerAction::PlayMinion { hand_index, slot },
                                None => println!("A minion needs a slot: p {} <slot>", hand_index),
                            }
                        }
                        None => println!("No card at {}", hand_index),
                    }
                }
                _ => println!("Unknown command"),
            }
        }
    }

    fn choose_target(&mut self, view: &GameStateView, request: &TargetRequest) -> TargetResponse {
        if let Some((_, reason)) = &request.invalid {
            println!("Invalid target: {}", reason);
        }
        let owner_side = match view.character(request.owner) {
            Some(character) => character.owner,
            None => return TargetResponse::Cancel,
        };

        println!("Choose a target ({} picked so far):", request.selected.len());
        loop {
            // Pick whose side first; the query's alliance rules out players
            // before any character is listed
            println!("Players:");
            for (index, player) in view.players().iter().enumerate() {
                println!("  [{}] {}", index, player.name);
            }
            println!("  f = stop selecting");
            println!("  x = cancel");

            let side = loop {
                let line = self.read_line("player> ");
                match line.as_str() {
                    "x" | "-1" => return TargetResponse::Cancel,
                    "f" => return TargetResponse::Finish,
                    other => match other.parse::<usize>() {
                        Ok(index) if index < view.players().len() => {
                            let candidate = view.players()[index].id;
                            match request.query.check_player_alliance(owner_side, candidate) {
                                Ok(()) => break candidate,
                                Err(reason) => println!("Invalid player: {}", reason),
                            }
                        }
                        _ => println!(
                            "Pick a number between 0 and {}",
                            view.players().len() - 1
                        ),
                    },
                }
            };

            let side_candidates: Vec<CharacterId> = request
                .candidates
                .iter()
                .copied()
                .filter(|id| view.character(*id).map_or(false, |c| c.owner == side))
                .collect();
            if side_candidates.is_empty() {
                println!("No valid targets on that side");
                continue;
            }

            for (index, id) in side_candidates.iter().enumerate() {
                if let Some(character) = view.character(*id) {
                    println!("  [{}] {}", index, character.display(false));
                }
            }
            println!("  b = back to player choice");
            println!("  x = cancel");

            loop {
                let line = self.read_line("target> ");
                match line.as_str() {
                    "x" | "-1" => return TargetResponse::Cancel,
                    "b" => break,
                    other => match other.parse::<usize>() {
                        Ok(index) if index < side_candidates.len() => {
                            return TargetResponse::Chosen(side_candidates[index]);
                        }
                        _ => println!(
                            "Pick a number between 0 and {}",
                            side_candidates.len()
                        ),
                    },
                }
            }
        }
    }

    fn confirm(&mut self, _view: &GameStateView, prompt: &str) -> bool {
        loop {
            let line = self.read_line(&format!("{} (y/n) ", prompt));
            match line.as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => {}
            }
        }
    }
}
