//! Turn state.
//!
//! ## Phase
//!
//! ```text
//! WaitRoll --roll--> Moving --enter room--> InRoom --suggest--> TurnOver
//!                      |                       |
//!                      +--steps run out--------+--accuse (wrong)--> WaitRoll (next player)
//! ```
//!
//! `end_turn` leaves any phase for the next active player's `WaitRoll`.
//! Once `result` is set the game is over and every action is ignored.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Where the current player is within their turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the dice.
    #[default]
    WaitRoll,
    /// Spending steps.
    Moving,
    /// Standing in a room with steps exhausted.
    InRoom,
    /// Suggestion made; only `end_turn` remains.
    TurnOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::WaitRoll => "waiting to roll",
            Phase::Moving => "moving",
            Phase::InRoom => "in a room",
            Phase::TurnOver => "turn over",
        };
        f.write_str(name)
    }
}

/// How the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Correct accusation.
    Winner(PlayerId),
    /// Every other player was eliminated.
    LastStanding(PlayerId),
}

impl GameResult {
    #[must_use]
    pub fn winner(self) -> PlayerId {
        match self {
            GameResult::Winner(p) | GameResult::LastStanding(p) => p,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self.winner() == player
    }
}

/// Mutable per-turn state, owned by the game controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Whose turn it is.
    pub current: PlayerId,

    pub phase: Phase,

    /// Steps left to spend this turn.
    pub steps_remaining: u8,

    /// Faces of the last roll, if the current player has rolled.
    pub last_roll: Option<(u8, u8)>,

    /// Turn number, starting at 1 and advancing on every hand-over.
    pub turn: u32,

    /// Set once the game is over.
    pub result: Option<GameResult>,
}

impl TurnState {
    /// Initial state: `first` to roll on turn 1.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            current: first,
            phase: Phase::WaitRoll,
            steps_remaining: 0,
            last_roll: None,
            turn: 1,
            result: None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Hand the turn to `next`.
    pub(crate) fn pass_to(&mut self, next: PlayerId) {
        self.current = next;
        self.phase = Phase::WaitRoll;
        self.steps_remaining = 0;
        self.last_roll = None;
        self.turn += 1;
    }
}
