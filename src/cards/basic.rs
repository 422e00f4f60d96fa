//! The basic card set
//!
//! One constructor per card, plus the default deck list. Constructors hand
//! out owned templates; decks and transforms clone freely.

use crate::cards::abilities::{
    charge_ability, friendly_minion_aura, stealth_ability, taunt_ability,
};
use crate::core::{
    Card, CountRange, EffectFn, MinionCard, SelectionMethod, Spell, SpellCard, TargetAlliance,
    TargetClass, TargetQuery,
};

// --- Minions ---

pub fn chillwind_yeti() -> MinionCard {
    MinionCard::new("Chillwind Yeti", 4, "Just a big yeti.", 4, 5, Vec::new())
}

pub fn bloodfen_raptor() -> MinionCard {
    MinionCard::new("Bloodfen Raptor", 2, "A vicious raptor.", 3, 2, Vec::new())
}

pub fn boulderfist_ogre() -> MinionCard {
    MinionCard::new("Boulderfist Ogre", 6, "Me smash.", 6, 7, Vec::new())
}

/// Transform token; not part of any deck
pub fn sheep() -> MinionCard {
    MinionCard::new("Sheep", 1, "Baa.", 1, 1, Vec::new())
}

pub fn stormwind_champion() -> MinionCard {
    MinionCard::new(
        "Stormwind Champion",
        7,
        "Your other minions have +1/+1.",
        7,
        7,
        vec![friendly_minion_aura(1, 1)],
    )
}

pub fn booty_bay_bodyguard() -> MinionCard {
    MinionCard::new(
        "Booty Bay Bodyguard",
        5,
        "Taunt.",
        6,
        6,
        vec![taunt_ability()],
    )
}

pub fn wolfrider() -> MinionCard {
    MinionCard::new("Wolfrider", 3, "Charge.", 3, 1, vec![charge_ability()])
}

pub fn spymistress() -> MinionCard {
    MinionCard::new("Spymistress", 1, "Stealth.", 3, 1, vec![stealth_ability()])
}

// --- Spells ---

pub fn fireball() -> SpellCard {
    SpellCard::new(
        "Fireball",
        4,
        "Deal 6 damage.",
        vec![Spell::new(
            "Deal 6 damage to a character",
            EffectFn::Damage(6),
            TargetQuery::new(
                TargetAlliance::All,
                TargetClass::Any,
                CountRange::exactly(1),
                SelectionMethod::Manual,
            ),
        )],
    )
}

pub fn polymorph() -> SpellCard {
    SpellCard::new(
        "Polymorph",
        4,
        "Transform a minion into a 1/1 Sheep.",
        vec![Spell::new(
            "Transform a minion into a 1/1 Sheep",
            EffectFn::Transform(Box::new(sheep())),
            TargetQuery::new(
                TargetAlliance::All,
                TargetClass::Minion,
                CountRange::exactly(1),
                SelectionMethod::Manual,
            ),
        )],
    )
}

pub fn flamestrike() -> SpellCard {
    SpellCard::new(
        "Flamestrike",
        7,
        "Deal 5 damage to all enemy minions.",
        vec![Spell::new(
            "Deal 5 damage to all enemy minions",
            EffectFn::Damage(5),
            TargetQuery::new(
                TargetAlliance::Enemy,
                TargetClass::Minion,
                CountRange::unbounded(),
                SelectionMethod::All,
            )
            .ignoring_stealth(),
        )],
    )
}

pub fn arcane_intellect() -> SpellCard {
    SpellCard::new(
        "Arcane Intellect",
        3,
        "Draw 2 cards.",
        vec![Spell::new(
            "Draw 2 cards",
            EffectFn::Draw(2),
            TargetQuery::new(
                TargetAlliance::Friendly,
                TargetClass::Hero,
                CountRange::unbounded(),
                SelectionMethod::All,
            ),
        )],
    )
}

pub fn holy_nova() -> SpellCard {
    SpellCard::new(
        "Holy Nova",
        3,
        "Deal 2 damage to all enemy minions, restore 2 health to all friendly characters.",
        vec![
            Spell::new(
                "Deal 2 damage to all enemy minions",
                EffectFn::Damage(2),
                TargetQuery::new(
                    TargetAlliance::Enemy,
                    TargetClass::Minion,
                    CountRange::unbounded(),
                    SelectionMethod::All,
                )
                .ignoring_stealth(),
            ),
            Spell::new(
                "Restore 2 health to all friendly characters",
                EffectFn::Heal(2),
                TargetQuery::new(
                    TargetAlliance::Friendly,
                    TargetClass::Any,
                    CountRange::unbounded(),
                    SelectionMethod::All,
                ),
            ),
        ],
    )
}

pub fn cataclysm() -> SpellCard {
    SpellCard::new(
        "Cataclysm",
        5,
        "Destroy all minions. Discard 2 random cards.",
        vec![
            Spell::new(
                "Destroy all minions",
                EffectFn::Destroy,
                TargetQuery::new(
                    TargetAlliance::All,
                    TargetClass::Minion,
                    CountRange::unbounded(),
                    SelectionMethod::All,
                )
                .ignoring_stealth(),
            ),
            Spell::new(
                "Discard 2 random cards",
                EffectFn::Discard(2),
                TargetQuery::new(
                    TargetAlliance::Friendly,
                    TargetClass::Hero,
                    CountRange::unbounded(),
                    SelectionMethod::All,
                ),
            ),
        ],
    )
}

pub fn deadly_shot() -> SpellCard {
    SpellCard::new(
        "Deadly Shot",
        3,
        "Destroy a random enemy minion.",
        vec![Spell::new(
            "Destroy a random enemy minion",
            EffectFn::Destroy,
            TargetQuery::new(
                TargetAlliance::Enemy,
                TargetClass::Minion,
                CountRange::exactly(1),
                SelectionMethod::Random,
            )
            .ignoring_stealth(),
        )],
    )
}

/// One copy of every deck-legal card
pub fn basic_set() -> Vec<Card> {
    vec![
        Card::Minion(chillwind_yeti()),
        Card::Minion(bloodfen_raptor()),
        Card::Minion(boulderfist_ogre()),
        Card::Minion(stormwind_champion()),
        Card::Minion(booty_bay_bodyguard()),
        Card::Minion(wolfrider()),
        Card::Minion(spymistress()),
        Card::Spell(fireball()),
        Card::Spell(polymorph()),
        Card::Spell(flamestrike()),
        Card::Spell(arcane_intellect()),
        Card::Spell(holy_nova()),
        Card::Spell(cataclysm()),
        Card::Spell(deadly_shot()),
    ]
}

/// The stock deck: two copies of the basic set
pub fn default_deck() -> Vec<Card> {
    let mut deck = basic_set();
    deck.extend(basic_set());
    deck
}
