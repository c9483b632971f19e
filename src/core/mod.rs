//! Core engine types: players, turn state, actions, RNG, configuration.
//!
//! These types are shared by the board, the rules and the game controller.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Accusation, ActionOutcome, GameEvent, IgnoreReason, LogEntry, Suggestion};
pub use config::{GameConfig, PlayerSeat, DEFAULT_HOME_BASE, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use state::{GameResult, Phase, TurnState};
