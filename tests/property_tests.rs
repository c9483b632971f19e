//! Property tests for board legality, occupancy, dealing, rotation and accusations.

use proptest::prelude::*;

use rust_cluedo::board::{BoardLayout, GridBoard};
use rust_cluedo::cards::{build_deck, deal_remainder, draw_solution};
use rust_cluedo::{
    resolve_accusation, Accusation, Card, CluedoGameBuilder, GameRng, GridPosition, Hand, Player, PlayerId,
    Position, RoomName, Solution, Suspect, Tile, Topology, Weapon,
};

fn reference() -> GridBoard {
    BoardLayout::reference().build("Cellar").unwrap()
}

fn assert_occupancy_consistent(board: &GridBoard, players: &[Player<GridPosition>]) {
    for (pos, tile) in board.tiles() {
        let mut expected: Vec<PlayerId> = players.iter().filter(|p| p.position() == pos).map(|p| p.id()).collect();
        expected.sort();
        let recorded: Vec<PlayerId> = tile.occupants().collect();
        assert_eq!(recorded, expected, "occupancy drifted at {pos}");
    }
}

proptest! {
    /// Legal destinations are never borders, and corridor pairs are legal only when adjacent.
    #[test]
    fn prop_legality_respects_tiles(fr in 0usize..26, fc in 0usize..26, tr in 0usize..26, tc in 0usize..26) {
        let board = reference();
        let from = GridPosition::new(fr, fc);
        let to = GridPosition::new(tr, tc);

        if board.is_legal_destination(from, to) {
            let to_tile = board.tile_at(to).unwrap();
            prop_assert!(!matches!(to_tile, Tile::Border));
            let from_tile = board.tile_at(from).unwrap();
            if from_tile.is_walkable() && to_tile.is_walkable() {
                prop_assert_eq!(from.distance(to), 1);
            }
            prop_assert!(!matches!(from_tile, Tile::Border));
        }
    }

    /// Random legal walks keep tile occupancy equal to player positions.
    #[test]
    fn prop_random_walks_keep_occupancy(choices in proptest::collection::vec((0usize..3, 0usize..8), 1..120)) {
        let mut board = reference();
        let mut players: Vec<Player<GridPosition>> = [Suspect::Scarlett, Suspect::Green, Suspect::Plum]
            .into_iter()
            .enumerate()
            .map(|(i, token)| {
                Player::new(PlayerId::new(i as u8), format!("P{i}"), token, board.start_of(token).unwrap())
            })
            .collect();
        for p in &players {
            board.place_player(p).unwrap();
        }

        for (who, pick) in choices {
            let from = players[who].position();
            let options = board.neighbors(from);
            if options.is_empty() {
                continue;
            }
            let to = options[pick % options.len()];
            prop_assert!(board.is_legal_destination(from, to));
            let dirty = board.move_player(&mut players[who], to).unwrap();
            prop_assert!(dirty.contains(&from) && dirty.contains(&to));
            assert_occupancy_consistent(&board, &players);
        }
    }

    /// Dealing partitions the 18 non-solution cards; hand sizes differ by at most one.
    #[test]
    fn prop_deal_partitions(seats in 2usize..=6, seed in any::<u64>()) {
        let mut deck = build_deck(&mut GameRng::new(seed));
        let solution = draw_solution(&mut deck).unwrap();
        let mut hands = vec![Hand::new(); seats];
        deal_remainder(deck, hands.iter_mut()).unwrap();

        let total: usize = hands.iter().map(Hand::len).sum();
        prop_assert_eq!(total, 18);
        for card in Card::all() {
            let holders = hands.iter().filter(|h| h.has_card(card)).count();
            let expected = usize::from(!solution.contains(card));
            prop_assert_eq!(holders, expected, "{}", card);
        }
        let max = hands.iter().map(Hand::len).max().unwrap();
        let min = hands.iter().map(Hand::len).min().unwrap();
        prop_assert!(max - min <= 1);
    }

    /// Turn rotation visits every active player once per cycle and skips the eliminated.
    #[test]
    fn prop_rotation_skips_eliminated(seats in 2usize..=6, mask in any::<u8>()) {
        let mut builder = CluedoGameBuilder::new();
        for (i, token) in Suspect::ALL.iter().take(seats).enumerate() {
            builder = builder.seat(format!("P{i}"), *token);
        }
        let mut game = builder.build().unwrap();

        // Seat 0 always stays active so the game is not already decided.
        let mut snap = game.snapshot();
        for record in snap.players.iter_mut().skip(1) {
            record.eliminated = mask & (1 << record.id.0) != 0;
        }
        game.restore(&snap).unwrap();

        let active = game.active_players();
        prop_assert!(active.contains(&PlayerId::new(0)));

        let mut seen = Vec::new();
        for _ in 0..active.len() {
            game.end_turn();
            seen.push(game.current_player());
        }
        prop_assert_eq!(seen.last().copied(), Some(PlayerId::new(0)));
        seen.sort();
        prop_assert_eq!(seen, active);
    }

    /// An accusation is correct iff it names exactly the solution.
    #[test]
    fn prop_accusation_exact_match(
        s in 0usize..6, w in 0usize..6, r in 0usize..9,
        a in 0usize..6, b in 0usize..6, c in 0usize..9,
    ) {
        let solution = Solution::new(Suspect::ALL[s], Weapon::ALL[w], RoomName::ALL[r]);
        let accusation = Accusation::new(Suspect::ALL[a], Weapon::ALL[b], RoomName::ALL[c]);
        prop_assert_eq!(resolve_accusation(&accusation, &solution), (s, w, r) == (a, b, c));
    }
}
