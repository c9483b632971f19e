//! Player actions, their outcomes and the event log.
//!
//! Every controller entry point returns an [`ActionOutcome`]. Actions that
//! are not allowed right now come back as `ActionOutcome::Ignored` with an
//! [`IgnoreReason`]; they never change state, never return an error and
//! are not written to the log.
//!
//! Every state change appends a [`LogEntry`] to the game log. The log is
//! shared by all players, so it never names the card used to disprove a
//! suggestion.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::{GameResult, Phase};
use crate::board::{DirtyPositions, GridPosition, RoomId};
use crate::cards::{Card, RoomName, Suspect, Weapon};
use crate::rules::Disproof;

/// A suggestion: "it was this suspect, with this weapon, in this room".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub suspect: Suspect,
    pub weapon: Weapon,
    pub room: RoomName,
}

impl Suggestion {
    #[must_use]
    pub const fn new(suspect: Suspect, weapon: Weapon, room: RoomName) -> Self {
        Self { suspect, weapon, room }
    }

    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        [self.suspect.into(), self.weapon.into(), self.room.into()]
    }
}

/// A final accusation. Same shape as a suggestion, but checked against the
/// solution rather than other players' hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accusation {
    pub suspect: Suspect,
    pub weapon: Weapon,
    pub room: RoomName,
}

impl Accusation {
    #[must_use]
    pub const fn new(suspect: Suspect, weapon: Weapon, room: RoomName) -> Self {
        Self { suspect, weapon, room }
    }
}

/// Why an action was ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The game already has a result.
    GameOver,
    /// The action is not available in the current phase.
    WrongPhase { phase: Phase },
    /// The board does not allow this step.
    IllegalDestination { from: GridPosition, to: GridPosition },
    /// The current player is not standing in a room.
    NotInRoom,
    /// Suggestions are not made from the home base.
    InHomeBase,
    /// Accusations are only made from the home base.
    NotInHomeBase,
    /// The suggested room is not the room the player stands in.
    WrongRoom { named: RoomName },
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::GameOver => write!(f, "the game is over"),
            IgnoreReason::WrongPhase { phase } => write!(f, "not allowed while {phase}"),
            IgnoreReason::IllegalDestination { from, to } => write!(f, "cannot step from {from} to {to}"),
            IgnoreReason::NotInRoom => write!(f, "not standing in a room"),
            IgnoreReason::InHomeBase => write!(f, "no suggestions from the home base"),
            IgnoreReason::NotInHomeBase => write!(f, "accusations are made from the home base"),
            IgnoreReason::WrongRoom { named } => write!(f, "not standing in the {named}"),
        }
    }
}

/// What an action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Dice rolled; `steps` may now be spent.
    Rolled { dice: (u8, u8), steps: u8 },

    /// One step taken.
    Moved {
        to: GridPosition,
        steps_remaining: u8,
        /// Set when the step entered a room.
        entered: Option<RoomId>,
        /// Set when the step spent the last point on a corridor and the
        /// turn passed on.
        next_player: Option<PlayerId>,
        dirty: DirtyPositions<GridPosition>,
    },

    /// Suggestion resolved. `disproof` is private to the suggester.
    Suggested { suggestion: Suggestion, disproof: Option<Disproof> },

    AccusationCorrect { winner: PlayerId },

    /// The accuser is out. If one player is left, `result` is set.
    AccusationWrong {
        eliminated: PlayerId,
        next_player: PlayerId,
        result: Option<GameResult>,
    },

    TurnEnded { next_player: PlayerId },

    Ignored(IgnoreReason),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, ActionOutcome::Ignored(_))
    }
}

/// Something that happened, as recorded in the shared log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted { players: usize },
    Rolled { dice: (u8, u8), steps: u8 },
    Moved { from: GridPosition, to: GridPosition },
    EnteredRoom { room: String },
    Suggested(Suggestion),
    /// The card is deliberately absent.
    Disproved { by: PlayerId },
    NotDisproved,
    Accused { accusation: Accusation, correct: bool },
    Eliminated,
    Won(GameResult),
    TurnEnded { next_player: PlayerId },
    Restored,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { players } => write!(f, "game started with {players} players"),
            GameEvent::Rolled { dice: (a, b), steps } => write!(f, "rolled {a} + {b} = {steps}"),
            GameEvent::Moved { from, to } => write!(f, "moved {from} -> {to}"),
            GameEvent::EnteredRoom { room } => write!(f, "entered the {room}"),
            GameEvent::Suggested(s) => {
                write!(f, "suggested {} with the {} in the {}", s.suspect, s.weapon, s.room)
            }
            GameEvent::Disproved { by } => write!(f, "suggestion disproved by {by}"),
            GameEvent::NotDisproved => write!(f, "nobody could disprove the suggestion"),
            GameEvent::Accused { accusation: a, correct } => write!(
                f,
                "accused {} with the {} in the {}: {}",
                a.suspect,
                a.weapon,
                a.room,
                if *correct { "correct" } else { "wrong" }
            ),
            GameEvent::Eliminated => write!(f, "is eliminated"),
            GameEvent::Won(GameResult::Winner(p)) => write!(f, "{p} solved the case"),
            GameEvent::Won(GameResult::LastStanding(p)) => write!(f, "{p} wins as the last player standing"),
            GameEvent::TurnEnded { next_player } => write!(f, "ended turn, {next_player} to play"),
            GameEvent::Restored => write!(f, "game restored from snapshot"),
        }
    }
}

/// One log line: who did what, on which turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub turn: u32,
    pub player: PlayerId,
    pub event: GameEvent,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[turn {}] {}: {}", self.turn, self.player, self.event)
    }
}
