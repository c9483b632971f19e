//! Card system: the three card categories, the deck and the hidden solution.
//!
//! ## Key Types
//!
//! - `Card`: Tagged union of `Suspect`, `Weapon` and `RoomName`
//! - `CardCategory`: Which of the three disjoint sets a card belongs to
//! - `Solution`: The withheld suspect + weapon + room triple
//!
//! Setup helpers (`build_deck`, `draw_solution`, `deal_remainder`) run once
//! when a game is built and never again.

pub mod card;
pub mod deck;

pub use card::{Card, CardCategory, RoomName, Suspect, Weapon};
pub use deck::{build_deck, deal_remainder, draw_solution, Solution};
