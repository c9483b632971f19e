//! Suggestion and accusation resolution.
//!
//! Suggestions are checked against the other players' hands, never against
//! the solution. Accusations are checked against the solution only.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Position;
use crate::cards::{Card, Solution};
use crate::core::{Accusation, PlayerId, PlayerMap, RandomSource, Suggestion};
use crate::players::Player;

/// A card shown privately to the suggester.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disproof {
    pub by: PlayerId,
    pub card: Card,
}

/// Find the first player after `suggester`, in seating order, holding any of
/// the suggested cards. Eliminated players still answer.
///
/// When that player holds more than one of the cards, the one shown is
/// chosen uniformly at random.
pub fn resolve_suggestion<P: Position>(
    players: &PlayerMap<Player<P>>,
    suggester: PlayerId,
    suggestion: &Suggestion,
    rng: &mut impl RandomSource,
) -> Option<Disproof> {
    let candidates = suggestion.cards();

    for seat in players.seats_after(suggester) {
        let matching = players[seat].hand().matching(&candidates);
        if let Some(idx) = rng.pick_index(matching.len()) {
            debug!(by = %seat, options = matching.len(), "suggestion disproved");
            return Some(Disproof {
                by: seat,
                card: matching[idx],
            });
        }
    }
    None
}

/// True iff all three cards match the solution.
#[must_use]
pub fn resolve_accusation(accusation: &Accusation, solution: &Solution) -> bool {
    accusation.suspect == solution.suspect && accusation.weapon == solution.weapon && accusation.room == solution.room
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LinearPosition;
    use crate::cards::{RoomName, Suspect, Weapon};
    use crate::core::ScriptedRng;

    fn table(hands: Vec<Vec<Card>>) -> PlayerMap<Player<LinearPosition>> {
        PlayerMap::from_vec(
            hands
                .into_iter()
                .enumerate()
                .map(|(i, cards)| {
                    let mut p = Player::new(PlayerId::new(i as u8), format!("P{i}"), Suspect::ALL[i], LinearPosition(0));
                    for card in cards {
                        p.add_card(card);
                    }
                    p
                })
                .collect(),
        )
    }

    fn suggestion() -> Suggestion {
        Suggestion::new(Suspect::Plum, Weapon::Rope, RoomName::Hall)
    }

    #[test]
    fn test_first_holder_after_suggester() {
        let players = table(vec![
            vec![Card::Suspect(Suspect::Plum)],
            vec![],
            vec![Card::Weapon(Weapon::Rope)],
            vec![Card::Room(RoomName::Hall)],
        ]);
        let mut rng = ScriptedRng::new(1);

        // Player 0 holds Plum but is the suggester; player 2 is next holder.
        let disproof = resolve_suggestion(&players, PlayerId::new(0), &suggestion(), &mut rng).unwrap();
        assert_eq!(disproof, Disproof { by: PlayerId::new(2), card: Card::Weapon(Weapon::Rope) });

        // Wraps around the table.
        let disproof = resolve_suggestion(&players, PlayerId::new(3), &suggestion(), &mut rng).unwrap();
        assert_eq!(disproof.by, PlayerId::new(0));
    }

    #[test]
    fn test_eliminated_players_still_disprove() {
        let mut players = table(vec![vec![], vec![Card::Room(RoomName::Hall)]]);
        players[PlayerId::new(1)].set_eliminated(true);
        let mut rng = ScriptedRng::new(1);

        let disproof = resolve_suggestion(&players, PlayerId::new(0), &suggestion(), &mut rng);
        assert_eq!(disproof.map(|d| d.by), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_nobody_holds_a_card() {
        let players = table(vec![
            vec![Card::Suspect(Suspect::Green)],
            vec![Card::Weapon(Weapon::Dagger)],
        ]);
        let mut rng = ScriptedRng::new(1);
        assert!(resolve_suggestion(&players, PlayerId::new(0), &suggestion(), &mut rng).is_none());
    }

    #[test]
    fn test_suggester_own_cards_ignored() {
        let players = table(vec![suggestion().cards().to_vec(), vec![]]);
        let mut rng = ScriptedRng::new(1);
        assert!(resolve_suggestion(&players, PlayerId::new(0), &suggestion(), &mut rng).is_none());
    }

    #[test]
    fn test_shown_card_is_one_of_the_matches() {
        let players = table(vec![vec![], suggestion().cards().to_vec()]);
        for seed in 0..20 {
            let mut rng = ScriptedRng::new(seed);
            let disproof = resolve_suggestion(&players, PlayerId::new(0), &suggestion(), &mut rng).unwrap();
            assert!(suggestion().cards().contains(&disproof.card));
        }
    }

    #[test]
    fn test_accusation_exact_match() {
        let solution = Solution::new(Suspect::White, Weapon::Wrench, RoomName::Study);
        assert!(resolve_accusation(&Accusation::new(Suspect::White, Weapon::Wrench, RoomName::Study), &solution));
        assert!(!resolve_accusation(&Accusation::new(Suspect::Green, Weapon::Wrench, RoomName::Study), &solution));
        assert!(!resolve_accusation(&Accusation::new(Suspect::White, Weapon::Rope, RoomName::Study), &solution));
        assert!(!resolve_accusation(&Accusation::new(Suspect::White, Weapon::Wrench, RoomName::Hall), &solution));
    }
}
