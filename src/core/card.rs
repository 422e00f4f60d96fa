//! Card templates
//!
//! Cards are read-only data: a minion template seeds a battlefield character,
//! a spell template carries one or more targeted effects. Decks and hands
//! hold owned clones of these templates.

use crate::core::{AbilityTemplate, EffectFn, TargetQuery};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A minion card: base stats plus granted abilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinionCard {
    pub name: String,
    pub cost: i32,
    pub description: String,
    pub attack: i32,
    pub health: i32,
    pub abilities: Vec<AbilityTemplate>,
}

impl MinionCard {
    pub fn new(
        name: impl Into<String>,
        cost: i32,
        description: impl Into<String>,
        attack: i32,
        health: i32,
        abilities: Vec<AbilityTemplate>,
    ) -> Self {
        MinionCard {
            name: name.into(),
            cost,
            description: description.into(),
            attack,
            health,
            abilities,
        }
    }
}

impl fmt::Display for MinionCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>20} | Mana cost: {:<2} | Attack: {:<2} | Health: {:<2} | {}",
            self.name, self.cost, self.attack, self.health, self.description
        )
    }
}

/// One targeted effect of a spell card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub description: String,
    pub effect: EffectFn,
    pub query: TargetQuery,
}

impl Spell {
    pub fn new(description: impl Into<String>, effect: EffectFn, query: TargetQuery) -> Self {
        Spell {
            description: description.into(),
            effect,
            query,
        }
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// A spell card: a sequence of spells resolved and cast together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellCard {
    pub name: String,
    pub cost: i32,
    pub description: String,
    pub spells: Vec<Spell>,
}

impl SpellCard {
    pub fn new(
        name: impl Into<String>,
        cost: i32,
        description: impl Into<String>,
        spells: Vec<Spell>,
    ) -> Self {
        SpellCard {
            name: name.into(),
            cost,
            description: description.into(),
            spells,
        }
    }
}

impl fmt::Display for SpellCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>20} | Mana cost: {:<2} | {}",
            self.name, self.cost, self.description
        )
    }
}

/// Any playable card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Card {
    Minion(MinionCard),
    Spell(SpellCard),
}

impl Card {
    pub fn name(&self) -> &str {
        match self {
            Card::Minion(c) => &c.name,
            Card::Spell(c) => &c.name,
        }
    }

    pub fn cost(&self) -> i32 {
        match self {
            Card::Minion(c) => c.cost,
            Card::Spell(c) => c.cost,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Card::Minion(c) => &c.description,
            Card::Spell(c) => &c.description,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Minion(c) => c.fmt(f),
            Card::Spell(c) => c.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_accessors() {
        let card = Card::Minion(MinionCard::new("Yeti", 4, "A yeti.", 4, 5, Vec::new()));
        assert_eq!(card.name(), "Yeti");
        assert_eq!(card.cost(), 4);
        assert_eq!(card.description(), "A yeti.");
    }
}
