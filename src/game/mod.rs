//! Game engine: state, targeting, abilities, auras and the turn loop

pub mod abilities;
pub mod actions;
pub mod aura;
pub mod controller;
pub mod effects;
pub mod game_loop;
pub mod interactive_controller;
pub mod logger;
pub mod resolver;
pub mod scripted_controller;
pub mod state;

pub use actions::{attack_query, process_action, ActionOutcome};
pub use aura::AuraRegistry;
pub use controller::{
    GameStateView, PlayerAction, PlayerController, TargetRequest, TargetResponse,
};
pub use game_loop::{GameEndReason, GameLoop, GameResult};
pub use interactive_controller::InteractiveController;
pub use logger::{GameLogger, LogEntry, OutputFormat, OutputMode, VerbosityLevel};
pub use resolver::resolve_targets;
pub use scripted_controller::ScriptedController;
pub use state::GameState;
