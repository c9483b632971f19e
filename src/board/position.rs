//! Board coordinates.
//!
//! `Position` is the abstraction the board and players are generic over.
//! The deduction board uses `GridPosition` (row, column on a square grid);
//! a race-style track would use `LinearPosition` (index along the track).

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A coordinate on some board.
pub trait Position: Copy + Eq + Ord + Hash + Debug + Display {
    /// Number of single steps between two positions, ignoring tiles.
    fn distance(self, other: Self) -> usize;

    /// True if exactly one step apart.
    fn is_adjacent(self, other: Self) -> bool {
        self.distance(other) == 1
    }
}

/// A (row, column) cell on a square grid. Row 0 is the top edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The up to four orthogonal neighbours (N, E, S, W), clipped at zero.
    ///
    /// Neighbours past the far edge are still returned; callers check bounds.
    pub fn neighbors(self) -> impl Iterator<Item = GridPosition> {
        let north = self.row.checked_sub(1).map(|row| GridPosition::new(row, self.col));
        let east = Some(GridPosition::new(self.row, self.col + 1));
        let south = Some(GridPosition::new(self.row + 1, self.col));
        let west = self.col.checked_sub(1).map(|col| GridPosition::new(self.row, col));
        [north, east, south, west].into_iter().flatten()
    }
}

impl Position for GridPosition {
    fn distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for GridPosition {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<[usize; 2]> for GridPosition {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An index along a one-dimensional track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LinearPosition(pub usize);

impl Position for LinearPosition {
    fn distance(self, other: Self) -> usize {
        self.0.abs_diff(other.0)
    }
}

impl Display for LinearPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
