//! Game rules that read hands and the solution but never touch the board.
//!
//! - `resolve_suggestion`: who disproves, and with which card
//! - `resolve_accusation`: exact match against the solution

pub mod resolver;

pub use resolver::{resolve_accusation, resolve_suggestion, Disproof};
