//! Board cells.
//!
//! Every cell is exactly one `Tile` variant. Tiles are dispatched by
//! `match`; the shared capabilities are `occupants`, `is_walkable` and
//! `kind`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Index of a room in its board's room table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u8);

impl RoomId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a tile is, without its occupants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Corridor,
    Room(RoomId),
    Border,
}

/// One board cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    /// Walkable. Any number of players may share it.
    Corridor { occupants: BTreeSet<PlayerId> },
    /// Part of a room. Entered and left only through the room's doors.
    Room { room: RoomId, occupants: BTreeSet<PlayerId> },
    /// Impassable edge filler. Never holds players.
    Border,
}

impl Tile {
    #[must_use]
    pub fn corridor() -> Self {
        Tile::Corridor {
            occupants: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn room(room: RoomId) -> Self {
        Tile::Room {
            room,
            occupants: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Corridor { .. } => TileKind::Corridor,
            Tile::Room { room, .. } => TileKind::Room(*room),
            Tile::Border => TileKind::Border,
        }
    }

    /// Short lowercase label for log lines.
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        match self {
            Tile::Corridor { .. } => "corridor",
            Tile::Room { .. } => "room",
            Tile::Border => "border",
        }
    }

    /// Corridors are the only through-tiles.
    #[must_use]
    pub fn is_walkable(&self) -> bool {
        matches!(self, Tile::Corridor { .. })
    }

    /// True for tiles a player may stand on.
    #[must_use]
    pub fn can_hold_players(&self) -> bool {
        !matches!(self, Tile::Border)
    }

    #[must_use]
    pub fn room_id(&self) -> Option<RoomId> {
        match self {
            Tile::Room { room, .. } => Some(*room),
            _ => None,
        }
    }

    /// Players standing on this tile, in seat order.
    pub fn occupants(&self) -> impl Iterator<Item = PlayerId> + '_ {
        let set = match self {
            Tile::Corridor { occupants } | Tile::Room { occupants, .. } => Some(occupants),
            Tile::Border => None,
        };
        set.into_iter().flatten().copied()
    }

    #[must_use]
    pub fn is_occupied_by(&self, player: PlayerId) -> bool {
        self.occupants().any(|p| p == player)
    }

    /// Returns false for `Border`, which never holds players.
    pub(crate) fn add_occupant(&mut self, player: PlayerId) -> bool {
        match self {
            Tile::Corridor { occupants } | Tile::Room { occupants, .. } => {
                occupants.insert(player);
                true
            }
            Tile::Border => false,
        }
    }

    pub(crate) fn remove_occupant(&mut self, player: PlayerId) -> bool {
        match self {
            Tile::Corridor { occupants } | Tile::Room { occupants, .. } => occupants.remove(&player),
            Tile::Border => false,
        }
    }

    pub(crate) fn clear_occupants(&mut self) {
        if let Tile::Corridor { occupants } | Tile::Room { occupants, .. } = self {
            occupants.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Tile::corridor().kind(), TileKind::Corridor);
        assert_eq!(Tile::room(RoomId(3)).kind(), TileKind::Room(RoomId(3)));
        assert_eq!(Tile::Border.kind(), TileKind::Border);
        assert_eq!(Tile::room(RoomId(3)).identifier(), "room");
    }

    #[test]
    fn test_walkability() {
        assert!(Tile::corridor().is_walkable());
        assert!(!Tile::room(RoomId(0)).is_walkable());
        assert!(!Tile::Border.is_walkable());

        assert!(Tile::room(RoomId(0)).can_hold_players());
        assert!(!Tile::Border.can_hold_players());
    }

    #[test]
    fn test_occupancy() {
        let mut tile = Tile::corridor();
        assert!(tile.add_occupant(PlayerId::new(2)));
        assert!(tile.add_occupant(PlayerId::new(0)));

        let players: Vec<_> = tile.occupants().collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(2)]);

        assert!(tile.remove_occupant(PlayerId::new(2)));
        assert!(!tile.remove_occupant(PlayerId::new(2)));
        assert!(tile.is_occupied_by(PlayerId::new(0)));

        tile.clear_occupants();
        assert_eq!(tile.occupants().count(), 0);
    }

    #[test]
    fn test_border_holds_nobody() {
        let mut border = Tile::Border;
        assert!(!border.add_occupant(PlayerId::new(0)));
        assert_eq!(border.occupants().count(), 0);
    }
}
