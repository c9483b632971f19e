//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rust_cluedo::board::{BoardLayout, DoorSpec, RoomKey, StartSpec};
use rust_cluedo::{CluedoGame, CluedoGameBuilder, GridPosition, ScriptedRng, Suspect};

pub fn gp(row: usize, col: usize) -> GridPosition {
    GridPosition::new(row, col)
}

/// 8×8 board: Kitchen (rows 1-2, cols 1-2) with one door at (2, 1) -> (3, 1),
/// and the door-less Cellar (rows 4-5, cols 5-6).
pub fn small_layout() -> BoardLayout {
    BoardLayout {
        rows: [
            "########", //
            "#KK....#",
            "#KK....#",
            "#......#",
            "#....XX#",
            "#....XX#",
            "#......#",
            "########",
        ]
        .iter()
        .map(|r| r.to_string())
        .collect(),
        rooms: vec![
            RoomKey { key: 'K', name: "Kitchen".into() },
            RoomKey { key: 'X', name: "Cellar".into() },
        ],
        doors: vec![DoorSpec { room: "Kitchen".into(), inside: [2, 1], outside: [3, 1] }],
        starts: vec![
            StartSpec { token: Suspect::Scarlett, at: [3, 6] },
            StartSpec { token: Suspect::Mustard, at: [6, 1] },
            StartSpec { token: Suspect::White, at: [1, 4] },
            StartSpec { token: Suspect::Green, at: [6, 6] },
        ],
    }
}

pub fn seats(count: usize) -> CluedoGameBuilder {
    let names = ["Alice", "Bob", "Carol", "Dave"];
    let tokens = [Suspect::Scarlett, Suspect::Mustard, Suspect::White, Suspect::Green];
    let mut builder = CluedoGameBuilder::new().layout(small_layout()).seed(11);
    for i in 0..count {
        builder = builder.seat(names[i], tokens[i]);
    }
    builder
}

/// A game on the small board with queued die faces.
pub fn small_game(count: usize, rolls: impl IntoIterator<Item = u8>) -> CluedoGame<ScriptedRng> {
    seats(count)
        .build_with_rng(ScriptedRng::new(11).with_rolls(rolls))
        .unwrap()
}

/// Roll `1 + 1` and step from (3, 6) straight into the Cellar.
pub fn enter_cellar(game: &mut CluedoGame<ScriptedRng>) {
    game.rng_mut().push_rolls([1, 1]);
    game.roll();
    game.move_to(gp(4, 6));
}
