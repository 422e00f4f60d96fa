//! Card definitions

pub mod abilities;
pub mod basic;

pub use abilities::{charge_ability, friendly_minion_aura, stealth_ability, taunt_ability};
pub use basic::{basic_set, default_deck, sheep};
