//! Board topology: positions, tiles, rooms and door-gated movement.
//!
//! The grid board is built from a `BoardLayout`; all movement questions go
//! through the `Topology` trait.

pub mod layout;
pub mod position;
pub mod room;
pub mod tile;
pub mod topology;

pub use layout::{BoardLayout, DoorSpec, RoomKey, StartSpec};
pub use position::{GridPosition, LinearPosition, Position};
pub use room::{DoorEdge, Room, RoomBounds};
pub use tile::{RoomId, Tile, TileKind};
pub use topology::{DirtyPositions, GridBoard, Topology};
