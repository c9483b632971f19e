//! Rectangular rooms and the door edges that lead into them.

use serde::{Deserialize, Serialize};

use super::position::{GridPosition, Position};
use crate::cards::RoomName;
use crate::error::{Error, Result};

/// A legal crossing between a room cell and the corridor cell beside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorEdge {
    room_side: GridPosition,
    corridor_side: GridPosition,
}

impl DoorEdge {
    /// Fails with `InvalidEdge` unless the endpoints are exactly one step apart.
    pub fn new(room_side: GridPosition, corridor_side: GridPosition) -> Result<Self> {
        if !room_side.is_adjacent(corridor_side) {
            return Err(Error::InvalidEdge {
                from: room_side.to_string(),
                to: corridor_side.to_string(),
            });
        }
        Ok(Self { room_side, corridor_side })
    }

    #[must_use]
    pub fn room_side(&self) -> GridPosition {
        self.room_side
    }

    #[must_use]
    pub fn corridor_side(&self) -> GridPosition {
        self.corridor_side
    }
}

/// Inclusive row/column bounds of a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomBounds {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl RoomBounds {
    #[must_use]
    pub fn contains(&self, p: GridPosition) -> bool {
        (self.min_row..=self.max_row).contains(&p.row) && (self.min_col..=self.max_col).contains(&p.col)
    }

    /// Inside the rectangle and on its outermost ring.
    #[must_use]
    pub fn on_boundary(&self, p: GridPosition) -> bool {
        self.contains(p)
            && (p.row == self.min_row || p.row == self.max_row || p.col == self.min_col || p.col == self.max_col)
    }

    /// Outside the rectangle and one step from it.
    #[must_use]
    pub fn touches(&self, p: GridPosition) -> bool {
        if self.contains(p) {
            return false;
        }
        let row_gap = gap(p.row, self.min_row, self.max_row);
        let col_gap = gap(p.col, self.min_col, self.max_col);
        row_gap + col_gap == 1
    }

    #[must_use]
    pub fn area(&self) -> usize {
        (self.max_row - self.min_row + 1) * (self.max_col - self.min_col + 1)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridPosition> + '_ {
        (self.min_row..=self.max_row)
            .flat_map(move |row| (self.min_col..=self.max_col).map(move |col| GridPosition::new(row, col)))
    }
}

fn gap(value: usize, min: usize, max: usize) -> usize {
    if value < min {
        min - value
    } else if value > max {
        value - max
    } else {
        0
    }
}

/// A named rectangular room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    name: String,
    bounds: RoomBounds,
    doors: Vec<DoorEdge>,
}

impl Room {
    /// Build a room from the corner points of its outline, in walking order.
    ///
    /// The outline must have at least four points, and every consecutive
    /// pair (including last back to first) must share a row or a column.
    /// The room covers the bounding rectangle of the outline.
    pub fn from_outline(name: impl Into<String>, outline: &[GridPosition]) -> Result<Self> {
        let name = name.into();
        let malformed = |reason: String| Error::MalformedRoom {
            room: name.clone(),
            reason,
        };

        if outline.len() < 4 {
            return Err(malformed(format!(
                "outline has {} points, at least 4 are required",
                outline.len()
            )));
        }

        for (i, &a) in outline.iter().enumerate() {
            let b = outline[(i + 1) % outline.len()];
            if a.row != b.row && a.col != b.col {
                return Err(malformed(format!("perimeter is not closed between {a} and {b}")));
            }
        }

        let bounds = RoomBounds {
            min_row: outline.iter().map(|p| p.row).min().unwrap_or_default(),
            max_row: outline.iter().map(|p| p.row).max().unwrap_or_default(),
            min_col: outline.iter().map(|p| p.col).min().unwrap_or_default(),
            max_col: outline.iter().map(|p| p.col).max().unwrap_or_default(),
        };

        Ok(Self {
            name,
            bounds,
            doors: Vec::new(),
        })
    }

    /// Build a room directly from its bounds.
    pub fn from_bounds(name: impl Into<String>, bounds: RoomBounds) -> Result<Self> {
        let corners = [
            GridPosition::new(bounds.min_row, bounds.min_col),
            GridPosition::new(bounds.min_row, bounds.max_col),
            GridPosition::new(bounds.max_row, bounds.max_col),
            GridPosition::new(bounds.max_row, bounds.min_col),
        ];
        Self::from_outline(name, &corners)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room card for this room, if it has one.
    #[must_use]
    pub fn card(&self) -> Option<RoomName> {
        RoomName::from_name(&self.name)
    }

    #[must_use]
    pub fn bounds(&self) -> RoomBounds {
        self.bounds
    }

    #[must_use]
    pub fn contains(&self, p: GridPosition) -> bool {
        self.bounds.contains(p)
    }

    #[must_use]
    pub fn doors(&self) -> &[DoorEdge] {
        &self.doors
    }

    /// Add a door edge.
    ///
    /// Fails with `InvalidDoor` if the room side is not on the room's
    /// boundary or the corridor side lies inside the room.
    pub fn add_door(&mut self, edge: DoorEdge) -> Result<()> {
        if !self.bounds.on_boundary(edge.room_side) {
            return Err(Error::InvalidDoor {
                room: self.name.clone(),
                reason: format!("{} is not on the room boundary", edge.room_side),
            });
        }
        if self.bounds.contains(edge.corridor_side) {
            return Err(Error::InvalidDoor {
                room: self.name.clone(),
                reason: format!("corridor side {} is inside the room", edge.corridor_side),
            });
        }
        if !self.doors.contains(&edge) {
            self.doors.push(edge);
        }
        Ok(())
    }

    /// True if some door's corridor side is `p`.
    #[must_use]
    pub fn has_door_at(&self, p: GridPosition) -> bool {
        self.doors
            .iter()
            .any(|d| d.corridor_side == p && self.bounds.contains(d.room_side))
    }
}
