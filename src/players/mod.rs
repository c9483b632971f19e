//! Player and hand model.
//!
//! - `Player`: identity, token, position, hand and notebook
//! - `Hand`: private card set (idempotent `add_card`)
//! - `Notebook`: UI-only deduction marks

pub mod notebook;
pub mod player;

pub use notebook::{Mark, Notebook};
pub use player::{Hand, Player};
