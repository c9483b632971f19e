//! Board topology: tile lookup, movement legality and occupancy.
//!
//! The board answers "can a player step from A to B" independent of whose
//! turn it is. It never validates turn rules and `move_player` does not
//! re-check legality: the controller asks `is_legal_destination` first.
//!
//! ## Legal steps on a grid
//!
//! - corridor → adjacent corridor
//! - corridor → any cell of a room that has a door whose corridor side is
//!   the starting cell
//! - room → the corridor side of one of that room's doors
//! - the home-base room ignores its door list: it is entered from, and left
//!   to, any corridor cell touching its rectangle

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use super::position::{GridPosition, Position};
use super::room::Room;
use super::tile::{RoomId, Tile};
use crate::cards::Suspect;
use crate::core::PlayerId;
use crate::error::{Error, Result};
use crate::players::Player;

/// Positions whose occupancy changed during a move.
///
/// Returned instead of notifying observers; UI code redraws these cells.
pub type DirtyPositions<P> = SmallVec<[P; 2]>;

/// Board topology, generic over the coordinate type.
pub trait Topology {
    type Pos: Position;

    /// The tile at `pos`, or `OutOfBounds`.
    fn tile_at(&self, pos: Self::Pos) -> Result<&Tile>;

    /// Whether a single step from `from` to `to` is allowed by the board.
    fn is_legal_destination(&self, from: Self::Pos, to: Self::Pos) -> bool;

    /// Record a player on the tile at its current position.
    fn place_player(&mut self, player: &Player<Self::Pos>) -> Result<()>;

    /// Move a player, keeping tile occupancy and player position in step.
    ///
    /// Does not check `is_legal_destination`. Fails only if `to` is out of
    /// bounds or cannot hold players.
    fn move_player(&mut self, player: &mut Player<Self::Pos>, to: Self::Pos) -> Result<DirtyPositions<Self::Pos>>;

    /// Players standing at `pos`; empty when out of bounds.
    fn occupants(&self, pos: Self::Pos) -> Vec<PlayerId> {
        self.tile_at(pos)
            .map(|tile| tile.occupants().collect())
            .unwrap_or_default()
    }
}

/// Square grid board for the deduction game.
#[derive(Clone, Debug)]
pub struct GridBoard {
    size: usize,
    tiles: Vec<Tile>,
    rooms: Vec<Room>,
    room_index: FxHashMap<String, RoomId>,
    home_base: RoomId,
    starts: BTreeMap<Suspect, GridPosition>,
}

impl GridBoard {
    /// Assemble a board from already-validated parts.
    pub(crate) fn from_parts(
        size: usize,
        tiles: Vec<Tile>,
        rooms: Vec<Room>,
        home_base: &str,
        starts: BTreeMap<Suspect, GridPosition>,
    ) -> Result<Self> {
        debug_assert_eq!(tiles.len(), size * size);

        let room_index = rooms
            .iter()
            .enumerate()
            .map(|(i, room)| {
                let id = u8::try_from(i).map_err(|_| Error::layout(format!("too many rooms: {}", rooms.len())))?;
                Ok((room.name().to_string(), RoomId(id)))
            })
            .collect::<Result<FxHashMap<String, RoomId>>>()?;

        let home_base = *room_index.get(home_base).ok_or_else(|| Error::UnknownRoom {
            name: home_base.to_string(),
        })?;

        Ok(Self {
            size,
            tiles,
            rooms,
            room_index,
            home_base,
            starts,
        })
    }

    /// Width and height of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, pos: GridPosition) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index_of(&self, pos: GridPosition) -> Result<usize> {
        if self.in_bounds(pos) {
            Ok(pos.row * self.size + pos.col)
        } else {
            Err(Error::out_of_bounds(pos, self.size))
        }
    }

    fn tile_mut(&mut self, pos: GridPosition) -> Result<&mut Tile> {
        let idx = self.index_of(pos)?;
        Ok(&mut self.tiles[idx])
    }

    /// Every cell with its tile, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (GridPosition, &Tile)> {
        let size = self.size;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (GridPosition::new(i / size, i % size), tile))
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    #[must_use]
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.room_index.get(name).copied()
    }

    #[must_use]
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.room_id(name).and_then(|id| self.room(id))
    }

    /// The room containing `pos`, if `pos` is a room tile.
    #[must_use]
    pub fn room_at(&self, pos: GridPosition) -> Option<&Room> {
        self.tile_at(pos).ok()?.room_id().and_then(|id| self.room(id))
    }

    #[must_use]
    pub fn home_base(&self) -> RoomId {
        self.home_base
    }

    #[must_use]
    pub fn is_home_base(&self, room: RoomId) -> bool {
        room == self.home_base
    }

    /// Start cell for a token.
    #[must_use]
    pub fn start_of(&self, token: Suspect) -> Option<GridPosition> {
        self.starts.get(&token).copied()
    }

    fn can_enter(&self, room: RoomId, from: GridPosition) -> bool {
        let Some(r) = self.room(room) else {
            return false;
        };
        if self.is_home_base(room) {
            r.bounds().touches(from)
        } else {
            r.has_door_at(from)
        }
    }

    fn can_exit(&self, room: RoomId, to: GridPosition) -> bool {
        let Some(r) = self.room(room) else {
            return false;
        };
        if self.is_home_base(room) {
            r.bounds().touches(to)
        } else {
            r.doors().iter().any(|d| d.corridor_side() == to)
        }
    }

    /// Every legal single-step destination from `from`.
    ///
    /// For room entries one cell per room is returned (the door's room
    /// side, or the nearest boundary cell for the home base).
    #[must_use]
    pub fn neighbors(&self, from: GridPosition) -> Vec<GridPosition> {
        let mut steps = Vec::new();
        let Ok(tile) = self.tile_at(from) else {
            return steps;
        };

        match tile {
            Tile::Corridor { .. } => {
                for next in from.neighbors() {
                    if self.is_legal_destination(from, next) && !steps.contains(&next) {
                        steps.push(next);
                    }
                }
                for room in &self.rooms {
                    for door in room.doors() {
                        let entry = door.room_side();
                        if door.corridor_side() == from && !steps.contains(&entry) {
                            steps.push(entry);
                        }
                    }
                }
            }
            Tile::Room { room, .. } => {
                if let Some(r) = self.room(*room) {
                    if self.is_home_base(*room) {
                        let bounds = r.bounds();
                        for cell in bounds.cells().filter(|&c| bounds.on_boundary(c)) {
                            for next in cell.neighbors() {
                                if self.is_legal_destination(from, next) && !steps.contains(&next) {
                                    steps.push(next);
                                }
                            }
                        }
                    } else {
                        for door in r.doors() {
                            let exit = door.corridor_side();
                            if self.is_legal_destination(from, exit) && !steps.contains(&exit) {
                                steps.push(exit);
                            }
                        }
                    }
                }
            }
            Tile::Border => {}
        }

        steps.sort();
        steps
    }

    /// Remove every player from every tile.
    pub(crate) fn clear_occupancy(&mut self) {
        for tile in &mut self.tiles {
            tile.clear_occupants();
        }
    }
}

impl Topology for GridBoard {
    type Pos = GridPosition;

    fn tile_at(&self, pos: GridPosition) -> Result<&Tile> {
        let idx = self.index_of(pos)?;
        Ok(&self.tiles[idx])
    }

    fn is_legal_destination(&self, from: GridPosition, to: GridPosition) -> bool {
        let (Ok(from_tile), Ok(to_tile)) = (self.tile_at(from), self.tile_at(to)) else {
            return false;
        };

        match (from_tile, to_tile) {
            (_, Tile::Border) => false,
            (Tile::Corridor { .. }, Tile::Corridor { .. }) => from.is_adjacent(to),
            (Tile::Corridor { .. }, Tile::Room { room, .. }) => self.can_enter(*room, from),
            (Tile::Room { room, .. }, Tile::Corridor { .. }) => self.can_exit(*room, to),
            _ => false,
        }
    }

    fn place_player(&mut self, player: &Player<GridPosition>) -> Result<()> {
        let at = player.position();
        let tile = self.tile_mut(at)?;
        if !tile.add_occupant(player.id()) {
            return Err(Error::layout(format!("{} cannot stand on border tile {at}", player.id())));
        }
        Ok(())
    }

    fn move_player(&mut self, player: &mut Player<GridPosition>, to: GridPosition) -> Result<DirtyPositions<GridPosition>> {
        if !self.tile_at(to)?.can_hold_players() {
            return Err(Error::layout(format!("{} cannot stand on border tile {to}", player.id())));
        }

        let from = player.position();
        if let Ok(tile) = self.tile_mut(from) {
            tile.remove_occupant(player.id());
        }
        self.tile_mut(to)?.add_occupant(player.id());
        player.set_position(to);

        debug!(player = %player.id(), %from, %to, "player moved");

        let mut dirty = DirtyPositions::new();
        dirty.push(from);
        if from != to {
            dirty.push(to);
        }
        Ok(dirty)
    }
}
