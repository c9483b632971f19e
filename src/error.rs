//! Structural errors raised while building, configuring or restoring a game.
//!
//! Runtime actions never return these: an action that is illegal in the
//! current phase is reported as [`crate::core::IgnoreReason`] instead.

use thiserror::Error;

use crate::cards::CardCategory;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("player count {count} is outside the supported range {min}-{max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("token {token} is assigned to more than one seat")]
    DuplicateToken { token: String },

    #[error("position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: String, size: usize },

    #[error("door edge {from} -> {to} does not join adjacent cells")]
    InvalidEdge { from: String, to: String },

    #[error("invalid door for room '{room}': {reason}")]
    InvalidDoor { room: String, reason: String },

    #[error("malformed room '{room}': {reason}")]
    MalformedRoom { room: String, reason: String },

    #[error("invalid board layout: {message}")]
    InvalidLayout { message: String },

    #[error("no room named '{name}' on this board")]
    UnknownRoom { name: String },

    #[error("no {category} card left in the deck")]
    DeckExhausted { category: CardCategory },

    #[error("snapshot references unknown player id {id}")]
    UnknownPlayer { id: u8 },

    #[error("snapshot has no record for live player id {id}")]
    MissingPlayer { id: u8 },

    #[error("snapshot lists player id {id} more than once")]
    DuplicatePlayer { id: u8 },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn out_of_bounds(position: impl std::fmt::Display, size: usize) -> Self {
        Error::OutOfBounds {
            position: position.to_string(),
            size,
        }
    }

    pub(crate) fn layout(message: impl Into<String>) -> Self {
        Error::InvalidLayout {
            message: message.into(),
        }
    }
}
