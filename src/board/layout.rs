//! Text board layouts.
//!
//! A `BoardLayout` describes a board as ASCII rows plus a legend:
//!
//! - `#` is a border cell
//! - `.` is a corridor cell
//! - any other character must be a room key from `rooms`
//!
//! Layouts deserialize from TOML, so a config file can carry a custom board.
//!
//! ```
//! use rust_cluedo::board::{BoardLayout, GridPosition, Topology};
//!
//! let board = BoardLayout::reference().build("Cellar").unwrap();
//! assert_eq!(board.size(), 24);
//! assert!(board.room_by_name("Kitchen").is_some());
//! assert!(board.tile_at(GridPosition::new(7, 7)).unwrap().is_walkable());
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::position::GridPosition;
use super::room::{DoorEdge, Room, RoomBounds};
use super::tile::{RoomId, Tile};
use super::topology::GridBoard;
use crate::cards::Suspect;
use crate::error::{Error, Result};

/// Legend entry mapping a grid character to a room name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomKey {
    pub key: char,
    pub name: String,
}

/// A door, given as its room-side and corridor-side cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSpec {
    pub room: String,
    pub inside: [usize; 2],
    pub outside: [usize; 2],
}

/// Where a token starts the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSpec {
    pub token: Suspect,
    pub at: [usize; 2],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub rows: Vec<String>,
    pub rooms: Vec<RoomKey>,
    #[serde(default)]
    pub doors: Vec<DoorSpec>,
    #[serde(default)]
    pub starts: Vec<StartSpec>,
}

const BORDER: char = '#';
const CORRIDOR: char = '.';
/// Room ids are a single byte.
const MAX_ROOMS: usize = u8::MAX as usize;

const REFERENCE_ROWS: [&str; 24] = [
    "########.######.########",
    "#KKKKK...BBBBBB...CCCCC#",
    "#KKKKK...BBBBBB...CCCCC#",
    "#KKKKK...BBBBBB...CCCCC#",
    "#KKKKK...BBBBBB...CCCCC#",
    "#KKKKK...BBBBBB........#",
    "#........BBBBBB.........",
    "#......................#",
    "#.................RRRRR#",
    "#DDDDDD...XXXX....RRRRR#",
    "#DDDDDD...XXXX....RRRRR#",
    "#DDDDDD...XXXX....RRRRR#",
    "#DDDDDD...XXXX.........#",
    "#DDDDDD...XXXX.........#",
    "#DDDDDD...........LLLLL#",
    "#.................LLLLL#",
    "..................LLLLL#",
    "#.................LLLLL#",
    "#OOOOOO..HHHHHH........#",
    "#OOOOOO..HHHHHH.........",
    "#OOOOOO..HHHHHH...SSSSS#",
    "#OOOOOO..HHHHHH...SSSSS#",
    "#OOOOOO..HHHHHH...SSSSS#",
    "#######.################",
];

const REFERENCE_ROOMS: [(char, &str); 10] = [
    ('K', "Kitchen"),
    ('B', "Ballroom"),
    ('C', "Conservatory"),
    ('D', "Dining Room"),
    ('X', "Cellar"),
    ('R', "Billiard Room"),
    ('L', "Library"),
    ('O', "Lounge"),
    ('H', "Hall"),
    ('S', "Study"),
];

const REFERENCE_DOORS: [(&str, [usize; 2], [usize; 2]); 16] = [
    ("Kitchen", [5, 4], [6, 4]),
    ("Ballroom", [6, 10], [7, 10]),
    ("Ballroom", [3, 9], [3, 8]),
    ("Ballroom", [3, 14], [3, 15]),
    ("Conservatory", [4, 19], [5, 19]),
    ("Dining Room", [12, 6], [12, 7]),
    ("Dining Room", [14, 3], [15, 3]),
    ("Billiard Room", [9, 18], [9, 17]),
    ("Billiard Room", [11, 21], [12, 21]),
    ("Library", [14, 20], [13, 20]),
    ("Library", [16, 18], [16, 17]),
    ("Lounge", [18, 5], [17, 5]),
    ("Hall", [18, 11], [17, 11]),
    ("Hall", [18, 12], [17, 12]),
    ("Hall", [20, 14], [20, 15]),
    ("Study", [20, 18], [20, 17]),
];

const REFERENCE_STARTS: [(Suspect, [usize; 2]); 6] = [
    (Suspect::Scarlett, [23, 7]),
    (Suspect::Mustard, [16, 0]),
    (Suspect::White, [0, 8]),
    (Suspect::Green, [0, 15]),
    (Suspect::Peacock, [6, 23]),
    (Suspect::Plum, [19, 23]),
];

impl BoardLayout {
    /// The built-in 24×24 board: nine card rooms and a door-less Cellar.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            rows: REFERENCE_ROWS.iter().map(|r| r.to_string()).collect(),
            rooms: REFERENCE_ROOMS
                .iter()
                .map(|&(key, name)| RoomKey {
                    key,
                    name: name.to_string(),
                })
                .collect(),
            doors: REFERENCE_DOORS
                .iter()
                .map(|&(room, inside, outside)| DoorSpec {
                    room: room.to_string(),
                    inside,
                    outside,
                })
                .collect(),
            starts: REFERENCE_STARTS
                .iter()
                .map(|&(token, at)| StartSpec { token, at })
                .collect(),
        }
    }

    /// Validate the layout and build a board.
    ///
    /// `home_base` names the room entered from any adjacent corridor cell.
    pub fn build(&self, home_base: &str) -> Result<GridBoard> {
        let size = self.rows.len();
        if size == 0 {
            return Err(Error::layout("layout has no rows"));
        }
        for (r, row) in self.rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size {
                return Err(Error::layout(format!(
                    "row {r} has {width} cells, expected {size} for a square board"
                )));
            }
        }

        if self.rooms.len() > MAX_ROOMS {
            return Err(Error::layout(format!(
                "{} rooms declared, at most {MAX_ROOMS} are supported",
                self.rooms.len()
            )));
        }

        let mut keys: FxHashMap<char, RoomId> = FxHashMap::default();
        for (i, entry) in self.rooms.iter().enumerate() {
            if entry.key == BORDER || entry.key == CORRIDOR {
                return Err(Error::layout(format!("room key '{}' is reserved", entry.key)));
            }
            if keys.insert(entry.key, RoomId(i as u8)).is_some() {
                return Err(Error::layout(format!("room key '{}' is used twice", entry.key)));
            }
            if self.rooms[..i].iter().any(|other| other.name == entry.name) {
                return Err(Error::layout(format!("room name '{}' is used twice", entry.name)));
            }
        }

        let mut tiles = Vec::with_capacity(size * size);
        let mut cells: Vec<Vec<GridPosition>> = vec![Vec::new(); self.rooms.len()];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let tile = match ch {
                    BORDER => Tile::Border,
                    CORRIDOR => Tile::corridor(),
                    key => {
                        let id = *keys.get(&key).ok_or_else(|| {
                            Error::layout(format!("unknown character '{key}' at ({r}, {c})"))
                        })?;
                        cells[id.index()].push(GridPosition::new(r, c));
                        Tile::room(id)
                    }
                };
                tiles.push(tile);
            }
        }

        let mut rooms = Vec::with_capacity(self.rooms.len());
        for (entry, cells) in self.rooms.iter().zip(&cells) {
            rooms.push(room_from_cells(&entry.name, cells)?);
        }

        let mut by_name: FxHashMap<&str, usize> = FxHashMap::default();
        for (i, entry) in self.rooms.iter().enumerate() {
            by_name.insert(entry.name.as_str(), i);
        }
        let corridor_at = |p: GridPosition| {
            p.row < size && p.col < size && matches!(tiles[p.row * size + p.col], Tile::Corridor { .. })
        };

        for door in &self.doors {
            let idx = *by_name.get(door.room.as_str()).ok_or_else(|| Error::UnknownRoom {
                name: door.room.clone(),
            })?;
            let edge = DoorEdge::new(door.inside.into(), door.outside.into())?;
            if !corridor_at(edge.corridor_side()) {
                return Err(Error::InvalidDoor {
                    room: door.room.clone(),
                    reason: format!("corridor side {} is not a corridor tile", edge.corridor_side()),
                });
            }
            rooms[idx].add_door(edge)?;
        }

        let mut starts = BTreeMap::new();
        for start in &self.starts {
            let at = GridPosition::from(start.at);
            if !corridor_at(at) {
                return Err(Error::layout(format!("start cell {at} for {} is not a corridor", start.token)));
            }
            starts.insert(start.token, at);
        }

        debug!(size, rooms = rooms.len(), doors = self.doors.len(), "board layout built");
        GridBoard::from_parts(size, tiles, rooms, home_base, starts)
    }
}

/// A room's cells must exactly fill their bounding rectangle.
fn room_from_cells(name: &str, cells: &[GridPosition]) -> Result<Room> {
    let malformed = |reason: String| Error::MalformedRoom {
        room: name.to_string(),
        reason,
    };

    let (Some(min_row), Some(max_row), Some(min_col), Some(max_col)) = (
        cells.iter().map(|p| p.row).min(),
        cells.iter().map(|p| p.row).max(),
        cells.iter().map(|p| p.col).min(),
        cells.iter().map(|p| p.col).max(),
    ) else {
        return Err(malformed("room has no cells on the grid".to_string()));
    };

    let bounds = RoomBounds {
        min_row,
        max_row,
        min_col,
        max_col,
    };
    if bounds.area() != cells.len() {
        return Err(malformed(format!(
            "{} cells do not fill the {} cell rectangle",
            cells.len(),
            bounds.area()
        )));
    }
    Room::from_bounds(name, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Topology;
    use crate::cards::RoomName;

    fn small(rows: &[&str]) -> BoardLayout {
        BoardLayout {
            rows: rows.iter().map(|r| r.to_string()).collect(),
            rooms: vec![
                RoomKey { key: 'K', name: "Kitchen".into() },
                RoomKey { key: 'X', name: "Cellar".into() },
            ],
            doors: vec![],
            starts: vec![],
        }
    }

    #[test]
    fn test_reference_builds() {
        let board = BoardLayout::reference().build("Cellar").unwrap();
        assert_eq!(board.rooms().len(), 10);
        for name in RoomName::ALL {
            let room = board.room_by_name(name.name()).unwrap();
            assert_eq!(room.card(), Some(name));
            assert!(!room.doors().is_empty(), "{} has no doors", room.name());
        }
        let cellar = board.room_by_name("Cellar").unwrap();
        assert!(cellar.doors().is_empty());
        assert_eq!(board.home_base(), board.room_id("Cellar").unwrap());
    }

    #[test]
    fn test_every_cell_has_one_tile() {
        let board = BoardLayout::reference().build("Cellar").unwrap();
        assert_eq!(board.tiles().count(), 24 * 24);
        for (pos, tile) in board.tiles() {
            if let Some(id) = tile.room_id() {
                assert!(board.room(id).unwrap().contains(pos));
            }
        }
    }

    #[test]
    fn test_not_square() {
        let layout = small(&["###", "#.#"]);
        assert!(matches!(layout.build("Cellar"), Err(Error::InvalidLayout { .. })));
    }

    #[test]
    fn test_unknown_character() {
        let layout = small(&["KKX", "K?X", "..."]);
        assert!(matches!(layout.build("Cellar"), Err(Error::InvalidLayout { .. })));
    }

    #[test]
    fn test_room_must_be_rectangular() {
        let layout = small(&["KK.X", "K..X", "....", "...."]);
        assert!(matches!(layout.build("Cellar"), Err(Error::MalformedRoom { .. })));
    }

    #[test]
    fn test_missing_home_base() {
        let layout = small(&["KK.X", "KK.X", "....", "...."]);
        assert!(matches!(layout.build("Attic"), Err(Error::UnknownRoom { .. })));
        assert!(layout.build("Cellar").is_ok());
    }

    #[test]
    fn test_room_count_fits_room_ids() {
        let mut layout = small(&["KK.X", "KK.X", "....", "...."]);
        for i in 0..254u32 {
            let key = char::from_u32(0x100 + i).unwrap();
            layout.rooms.push(RoomKey { key, name: format!("Annex {i}") });
        }
        let err = layout.build("Cellar").unwrap_err();
        assert!(matches!(&err, Error::InvalidLayout { message } if message.contains("256 rooms")), "{err}");
    }

    #[test]
    fn test_door_checks() {
        let mut layout = small(&["KK.X", "KK.X", "....", "####"]);
        layout.doors.push(DoorSpec { room: "Kitchen".into(), inside: [1, 1], outside: [2, 1] });
        assert!(layout.build("Cellar").is_ok());

        // Corridor side on the border.
        layout.doors[0] = DoorSpec { room: "Kitchen".into(), inside: [1, 1], outside: [1, 2] };
        layout.rows[1] = "KK#X".into();
        assert!(matches!(layout.build("Cellar"), Err(Error::InvalidDoor { .. })));

        layout.doors[0] = DoorSpec { room: "Pantry".into(), inside: [1, 1], outside: [2, 1] };
        assert!(matches!(layout.build("Cellar"), Err(Error::UnknownRoom { .. })));

        layout.doors[0] = DoorSpec { room: "Kitchen".into(), inside: [1, 1], outside: [3, 1] };
        assert!(matches!(layout.build("Cellar"), Err(Error::InvalidEdge { .. })));
    }

    #[test]
    fn test_start_must_be_corridor() {
        let mut layout = small(&["KK.X", "KK.X", "....", "...."]);
        layout.starts.push(StartSpec { token: Suspect::Plum, at: [0, 0] });
        assert!(matches!(layout.build("Cellar"), Err(Error::InvalidLayout { .. })));

        layout.starts[0].at = [3, 3];
        let board = layout.build("Cellar").unwrap();
        assert_eq!(board.start_of(Suspect::Plum), Some(GridPosition::new(3, 3)));
        assert_eq!(board.start_of(Suspect::White), None);
        assert!(board.tile_at(GridPosition::new(3, 3)).unwrap().is_walkable());
    }

    #[test]
    fn test_layout_from_toml() {
        let text = r##"
            rows = ["KK.X", "KK.X", "....", "...."]
            rooms = [{ key = "K", name = "Kitchen" }, { key = "X", name = "Cellar" }]
            doors = [{ room = "Kitchen", inside = [1, 0], outside = [2, 0] }]
            starts = [{ token = "Green", at = [3, 0] }]
        "##;
        let layout: BoardLayout = toml::from_str(text).unwrap();
        let board = layout.build("Cellar").unwrap();
        assert!(board.is_legal_destination(GridPosition::new(2, 0), GridPosition::new(1, 0)));
    }
}
