//! The deduction game: board movement, suggestions, accusations.
//!
//! ## Turn flow
//!
//! 1. `roll` two dice.
//! 2. `move_to` one cell at a time. Entering a room stops movement.
//! 3. In a card room, `suggest`; in the home base, `accuse`.
//! 4. `end_turn`.
//!
//! ```
//! use rust_cluedo::cards::Suspect;
//! use rust_cluedo::core::{ActionOutcome, Phase};
//! use rust_cluedo::games::cluedo::CluedoGameBuilder;
//!
//! let mut game = CluedoGameBuilder::new()
//!     .seat("Alice", Suspect::Scarlett)
//!     .seat("Bob", Suspect::Plum)
//!     .build()
//!     .unwrap();
//!
//! assert!(matches!(game.roll(), ActionOutcome::Rolled { .. }));
//! assert_eq!(game.phase(), Phase::Moving);
//! ```

mod game;
mod snapshot;

pub use game::{CluedoGame, CluedoGameBuilder};
pub use snapshot::{GameSnapshot, PlayerRecord};
