//! hearth-rs - a turn-based collectible-card battler rules engine
//!
//! Resolves card plays, character abilities, targeting, combat, and ongoing
//! ("aura") effects across multiple players. The interesting machinery lives
//! in the target-query resolver, the ability lifecycle, and the aura
//! propagation engine; the turn loop, deck/hand management, and console I/O
//! are thin plumbing around them.

pub mod cards;
pub mod core;
pub mod error;
pub mod game;

pub use error::{HearthError, Result};
