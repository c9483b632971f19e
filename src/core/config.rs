//! Game configuration.
//!
//! A `GameConfig` names the seats at the table, the home-base room, the RNG
//! seed and (optionally) a custom board layout. It can be built in code with
//! the `with_*` methods or loaded from TOML:
//!
//! ```toml
//! home_base = "Cellar"
//! seed = 7
//!
//! [[seats]]
//! name = "Alice"
//! token = "Scarlett"
//!
//! [[seats]]
//! name = "Bob"
//! token = "Plum"
//! ```
//!
//! Nothing is validated here; `CluedoGame::from_config` checks seat count,
//! token uniqueness and the layout when the game is built.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::BoardLayout;
use crate::cards::Suspect;
use crate::error::{Error, Result};

/// Fewest seats a game can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a game can start with (one per suspect token).
pub const MAX_PLAYERS: usize = 6;

/// Default name of the door-less accusation room.
pub const DEFAULT_HOME_BASE: &str = "Cellar";

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeat {
    pub name: String,
    pub token: Suspect,
}

impl PlayerSeat {
    pub fn new(name: impl Into<String>, token: Suspect) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seats in turn order. The first seat moves first.
    pub seats: Vec<PlayerSeat>,

    /// Room entered from any adjacent corridor and used for accusations.
    pub home_base: String,

    /// Seed for dice, deck shuffle and disproof choices.
    pub seed: u64,

    /// Custom board. `None` uses `BoardLayout::reference()`.
    pub layout: Option<BoardLayout>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: Vec::new(),
            home_base: DEFAULT_HOME_BASE.to_string(),
            seed: 42,
            layout: None,
        }
    }
}

impl GameConfig {
    /// Empty configuration with default home base and seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a seat.
    #[must_use]
    pub fn with_seat(mut self, name: impl Into<String>, token: Suspect) -> Self {
        self.seats.push(PlayerSeat::new(name, token));
        self
    }

    #[must_use]
    pub fn with_home_base(mut self, name: impl Into<String>) -> Self {
        self.home_base = name.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Number of seats configured.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// The configured layout, or the reference board.
    #[must_use]
    pub fn layout_or_reference(&self) -> BoardLayout {
        self.layout.clone().unwrap_or_else(BoardLayout::reference)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
