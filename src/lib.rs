//! # rust-cluedo
//!
//! A turn-based deduction board game engine.
//!
//! ## Design Principles
//!
//! 1. **Board knows movement, not turns**: `board` answers whether a step is
//!    legal and keeps tile occupancy in sync with player positions. It never
//!    looks at phases or dice.
//!
//! 2. **Illegal actions are statuses, not errors**: every action returns an
//!    `ActionOutcome`. Only construction, configuration and restore fail
//!    with [`Error`].
//!
//! 3. **Injectable randomness**: dice, shuffles and disproof picks all go
//!    through `RandomSource`, so tests can script exact rolls.
//!
//! ## Modules
//!
//! - `board`: positions, tiles, rooms, doors, layouts, legality
//! - `cards`: suspects, weapons, rooms, deck setup, the solution
//! - `players`: hands, notebooks, seated players
//! - `core`: player IDs, turn state, actions, event log, RNG, configuration
//! - `rules`: suggestion and accusation resolution
//! - `games::cluedo`: the game controller and snapshots
//!
//! ## Example
//!
//! ```
//! use rust_cluedo::{CluedoGame, GameConfig, Suspect};
//!
//! let config = GameConfig::new()
//!     .with_seat("Alice", Suspect::Scarlett)
//!     .with_seat("Bob", Suspect::Green)
//!     .with_seed(3);
//! let mut game = CluedoGame::from_config(&config).unwrap();
//!
//! game.roll();
//! let snapshot = game.snapshot();
//! let bytes = snapshot.to_bytes().unwrap();
//! game.restore(&rust_cluedo::GameSnapshot::from_bytes(&bytes).unwrap()).unwrap();
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod players;
pub mod rules;

pub use crate::error::{Error, Result};

pub use crate::board::{
    BoardLayout, DirtyPositions, DoorEdge, GridBoard, GridPosition, LinearPosition, Position, Room, RoomBounds,
    RoomId, Tile, TileKind, Topology,
};

pub use crate::cards::{Card, CardCategory, RoomName, Solution, Suspect, Weapon};

pub use crate::core::{
    Accusation, ActionOutcome, GameConfig, GameEvent, GameResult, GameRng, IgnoreReason, LogEntry, Phase,
    PlayerId, PlayerMap, PlayerSeat, RandomSource, ScriptedRng, Suggestion, TurnState,
};

pub use crate::players::{Hand, Mark, Notebook, Player};

pub use crate::rules::{resolve_accusation, resolve_suggestion, Disproof};

pub use crate::games::cluedo::{CluedoGame, CluedoGameBuilder, GameSnapshot, PlayerRecord};
