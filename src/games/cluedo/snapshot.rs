//! Snapshot and restore.
//!
//! A `GameSnapshot` is a plain data copy of everything needed to resume a
//! game: turn state, the solution, every player's position, hand, notebook
//! and elimination flag, and where suggestions left the weapons and the
//! unseated suspects. It carries no version
//! tag; bytes written by one build are not guaranteed to load in another.
//!
//! Restoring never half-applies. A fresh player map and board occupancy are
//! built from the snapshot and only swapped in once every check passes.
//!
//! The random source is not part of the snapshot. A restored game keeps
//! drawing from its live RNG.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::game::CluedoGame;
use crate::board::{GridBoard, GridPosition, Topology};
use crate::cards::{Card, CardCategory, RoomName, Solution, Suspect, Weapon};
use crate::core::{GameEvent, PlayerId, PlayerMap, RandomSource, TurnState};
use crate::error::{Error, Result};
use crate::players::{Hand, Mark, Notebook, Player};

/// Per-player part of a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub token: Suspect,
    pub position: GridPosition,
    pub suspects: Vec<Suspect>,
    pub weapons: Vec<Weapon>,
    pub rooms: Vec<RoomName>,
    /// Only cards with a mark other than `Unknown`.
    pub notebook: Vec<(Card, Mark)>,
    pub eliminated: bool,
}

impl PlayerRecord {
    fn hand(&self) -> Hand {
        self.suspects
            .iter()
            .map(|&s| Card::Suspect(s))
            .chain(self.weapons.iter().map(|&w| Card::Weapon(w)))
            .chain(self.rooms.iter().map(|&r| Card::Room(r)))
            .collect()
    }
}

/// Everything needed to resume a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn: TurnState,
    pub solution: Solution,
    pub players: Vec<PlayerRecord>,
    pub weapon_rooms: BTreeMap<Weapon, RoomName>,
    pub suspect_rooms: BTreeMap<Suspect, RoomName>,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// The record for one player, if present.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.players.iter().find(|r| r.id == id)
    }
}

impl<R: RandomSource> CluedoGame<R> {
    /// Copy out the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let players = self
            .players
            .iter()
            .map(|(id, p)| PlayerRecord {
                id,
                name: p.name().to_string(),
                token: p.token(),
                position: p.position(),
                suspects: p
                    .hand_in(CardCategory::Suspect)
                    .filter_map(|c| match c {
                        Card::Suspect(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
                weapons: p
                    .hand_in(CardCategory::Weapon)
                    .filter_map(|c| match c {
                        Card::Weapon(w) => Some(w),
                        _ => None,
                    })
                    .collect(),
                rooms: p
                    .hand_in(CardCategory::Room)
                    .filter_map(|c| match c {
                        Card::Room(r) => Some(r),
                        _ => None,
                    })
                    .collect(),
                notebook: p.notebook().marked().collect(),
                eliminated: p.is_eliminated(),
            })
            .collect();

        GameSnapshot {
            turn: self.turn.clone(),
            solution: self.solution,
            players,
            weapon_rooms: self.weapon_rooms.clone(),
            suspect_rooms: self.suspect_rooms.clone(),
        }
    }

    /// Replace the game state with a snapshot.
    ///
    /// Fails without changing anything if the snapshot names a player this
    /// game does not have (`UnknownPlayer`), omits one it does have
    /// (`MissingPlayer`), lists one twice (`DuplicatePlayer`), or puts a
    /// player somewhere nobody can stand.
    pub fn restore(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        match self.prepare_restore(snapshot) {
            Ok((players, board)) => {
                self.players = players;
                self.board = board;
                self.turn = snapshot.turn.clone();
                self.solution = snapshot.solution;
                self.weapon_rooms = snapshot.weapon_rooms.clone();
                self.suspect_rooms = snapshot.suspect_rooms.clone();
                info!(turn = self.turn.turn, player = %self.turn.current, "game restored");
                self.record(GameEvent::Restored);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "snapshot rejected");
                Err(err)
            }
        }
    }

    fn prepare_restore(&self, snapshot: &GameSnapshot) -> Result<(PlayerMap<Player<GridPosition>>, GridBoard)> {
        for (i, record) in snapshot.players.iter().enumerate() {
            if !self.players.contains(record.id) {
                return Err(Error::UnknownPlayer { id: record.id.0 });
            }
            if snapshot.players[..i].iter().any(|r| r.id == record.id) {
                return Err(Error::DuplicatePlayer { id: record.id.0 });
            }
        }
        if !self.players.contains(snapshot.turn.current) {
            return Err(Error::UnknownPlayer {
                id: snapshot.turn.current.0,
            });
        }

        let mut players = self.players.clone();
        for (id, player) in players.iter_mut() {
            let record = snapshot.player(id).ok_or(Error::MissingPlayer { id: id.0 })?;

            let tile = self.board.tile_at(record.position)?;
            if !tile.can_hold_players() {
                return Err(Error::layout(format!(
                    "{id} cannot stand on {} tile {}",
                    tile.identifier(),
                    record.position
                )));
            }

            player.set_position(record.position);
            player.set_hand(record.hand());
            player.set_notebook(record.notebook.iter().copied().collect::<Notebook>());
            player.set_eliminated(record.eliminated);
        }

        let mut board = self.board.clone();
        board.clear_occupancy();
        for player in players.values() {
            board.place_player(player)?;
        }

        Ok((players, board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::cluedo::CluedoGameBuilder;

    fn game() -> CluedoGame {
        CluedoGameBuilder::new()
            .seat("Alice", Suspect::Scarlett)
            .seat("Bob", Suspect::Mustard)
            .build()
            .unwrap()
    }

    #[test]
    fn test_snapshot_lists_every_player() {
        let game = game();
        let snap = game.snapshot();
        assert_eq!(snap.players.len(), 2);
        let cards: usize = snap
            .players
            .iter()
            .map(|r| r.suspects.len() + r.weapons.len() + r.rooms.len())
            .sum();
        assert_eq!(cards, 18);
        assert_eq!(snap.solution, game.solution);
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut game = game();
        let mut snap = game.snapshot();
        let mut extra = snap.players[0].clone();
        extra.id = PlayerId::new(5);
        snap.players.push(extra);

        let before = game.snapshot();
        assert!(matches!(game.restore(&snap), Err(Error::UnknownPlayer { id: 5 })));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let mut game = game();
        let before = game.snapshot();

        let mut snap = before.clone();
        let mut twin = snap.players[1].clone();
        twin.eliminated = true;
        snap.players.push(twin);

        assert!(matches!(game.restore(&snap), Err(Error::DuplicatePlayer { id: 1 })));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_missing_player_rejected() {
        let mut game = game();
        let mut snap = game.snapshot();
        snap.players.pop();
        assert!(matches!(game.restore(&snap), Err(Error::MissingPlayer { id: 1 })));
    }

    #[test]
    fn test_bad_position_leaves_game_untouched() {
        let mut game = game();
        let before = game.snapshot();

        let mut snap = before.clone();
        snap.players[0].position = GridPosition::new(7, 7);
        snap.players[1].position = GridPosition::new(0, 0);
        assert!(matches!(game.restore(&snap), Err(Error::InvalidLayout { .. })));

        snap.players[1].position = GridPosition::new(99, 0);
        assert!(matches!(game.restore(&snap), Err(Error::OutOfBounds { .. })));

        assert_eq!(game.snapshot(), before);
        let alice = before.players[0].position;
        assert_eq!(game.board().occupants(alice), vec![PlayerId::new(0)]);
        assert!(game.board().occupants(GridPosition::new(7, 7)).is_empty());
    }

    #[test]
    fn test_bytes_round_trip() {
        let snap = game().snapshot();
        let bytes = snap.to_bytes().unwrap();
        assert_eq!(GameSnapshot::from_bytes(&bytes).unwrap(), snap);
        assert!(matches!(GameSnapshot::from_bytes(&bytes[..3]), Err(Error::Codec(_))));
    }
}
