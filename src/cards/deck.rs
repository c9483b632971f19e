//! One-time game setup: shuffled deck, hidden solution, dealt hands.
//!
//! ## Setup Order
//!
//! 1. [`build_deck`] shuffles all 21 cards.
//! 2. [`draw_solution`] withholds the first card of each category.
//! 3. [`deal_remainder`] hands out the remaining 18 cards round-robin.
//!
//! ```
//! use rust_cluedo::cards::{build_deck, draw_solution};
//! use rust_cluedo::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = build_deck(&mut rng);
//! let solution = draw_solution(&mut deck).unwrap();
//!
//! assert_eq!(deck.len(), 18);
//! assert!(solution.cards().iter().all(|card| !deck.contains(card)));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::{Card, CardCategory, RoomName, Suspect, Weapon};
use crate::core::RandomSource;
use crate::error::{Error, Result};
use crate::players::Hand;

/// The hidden suspect + weapon + room triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    pub suspect: Suspect,
    pub weapon: Weapon,
    pub room: RoomName,
}

impl Solution {
    #[must_use]
    pub const fn new(suspect: Suspect, weapon: Weapon, room: RoomName) -> Self {
        Self { suspect, weapon, room }
    }

    /// The three solution cards, in category order.
    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Suspect(self.suspect),
            Card::Weapon(self.weapon),
            Card::Room(self.room),
        ]
    }

    /// Check if a card is part of the solution.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }
}

/// Build the full deck in a random order.
pub fn build_deck(rng: &mut impl RandomSource) -> Vec<Card> {
    let mut deck: Vec<Card> = Card::all().collect();
    rng.shuffle(&mut deck);
    deck
}

/// Remove and return the first card of each category.
///
/// Fails with `DeckExhausted` if a category has no card left.
pub fn draw_solution(deck: &mut Vec<Card>) -> Result<Solution> {
    let suspect = match take_first(deck, CardCategory::Suspect)? {
        Card::Suspect(s) => s,
        _ => return Err(Error::DeckExhausted { category: CardCategory::Suspect }),
    };
    let weapon = match take_first(deck, CardCategory::Weapon)? {
        Card::Weapon(w) => w,
        _ => return Err(Error::DeckExhausted { category: CardCategory::Weapon }),
    };
    let room = match take_first(deck, CardCategory::Room)? {
        Card::Room(r) => r,
        _ => return Err(Error::DeckExhausted { category: CardCategory::Room }),
    };

    debug!(remaining = deck.len(), "solution drawn");
    Ok(Solution { suspect, weapon, room })
}

fn take_first(deck: &mut Vec<Card>, category: CardCategory) -> Result<Card> {
    let idx = deck
        .iter()
        .position(|card| card.category() == category)
        .ok_or(Error::DeckExhausted { category })?;
    Ok(deck.remove(idx))
}

/// Deal every remaining card one at a time, cycling through `hands` in order.
///
/// Hand sizes end up differing by at most one. Dealing to no hands is a
/// structural error.
pub fn deal_remainder<'a>(deck: Vec<Card>, hands: impl IntoIterator<Item = &'a mut Hand>) -> Result<()> {
    let mut hands: Vec<&mut Hand> = hands.into_iter().collect();
    if hands.is_empty() {
        return Err(Error::InvalidPlayerCount { count: 0, min: 1, max: usize::MAX });
    }

    let seats = hands.len();
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % seats].add_card(card);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_build_deck_is_a_permutation() {
        let mut rng = GameRng::new(3);
        let mut deck = build_deck(&mut rng);
        assert_eq!(deck.len(), 21);

        deck.sort();
        let mut all: Vec<_> = Card::all().collect();
        all.sort();
        assert_eq!(deck, all);
    }

    #[test]
    fn test_build_deck_reproducible() {
        let a = build_deck(&mut GameRng::new(99));
        let b = build_deck(&mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_solution_takes_first_of_each() {
        let mut deck = vec![
            Card::Weapon(Weapon::Rope),
            Card::Room(RoomName::Hall),
            Card::Suspect(Suspect::Green),
            Card::Weapon(Weapon::Dagger),
            Card::Suspect(Suspect::Plum),
        ];

        let solution = draw_solution(&mut deck).unwrap();

        assert_eq!(solution, Solution::new(Suspect::Green, Weapon::Rope, RoomName::Hall));
        assert_eq!(deck, vec![Card::Weapon(Weapon::Dagger), Card::Suspect(Suspect::Plum)]);
    }

    #[test]
    fn test_draw_solution_exhausted() {
        let mut deck = vec![Card::Suspect(Suspect::White), Card::Weapon(Weapon::Wrench)];
        let err = draw_solution(&mut deck).unwrap_err();
        assert!(matches!(err, Error::DeckExhausted { category: CardCategory::Room }));
    }

    #[test]
    fn test_deal_round_robin() {
        let deck: Vec<Card> = Weapon::ALL.into_iter().map(Card::Weapon).take(5).collect();
        let mut hands = vec![Hand::new(), Hand::new()];

        deal_remainder(deck, hands.iter_mut()).unwrap();

        assert_eq!(hands[0].len(), 3);
        assert_eq!(hands[1].len(), 2);
        assert!(hands[0].has_card(Card::Weapon(Weapon::Candlestick)));
        assert!(hands[1].has_card(Card::Weapon(Weapon::Dagger)));
        assert!(hands[0].has_card(Card::Weapon(Weapon::LeadPipe)));
    }

    #[test]
    fn test_deal_to_nobody_fails() {
        let empty: Vec<&mut Hand> = Vec::new();
        assert!(deal_remainder(vec![Card::Weapon(Weapon::Rope)], empty).is_err());
    }

    #[test]
    fn test_solution_contains() {
        let solution = Solution::new(Suspect::Mustard, Weapon::Revolver, RoomName::Study);
        assert!(solution.contains(Card::Weapon(Weapon::Revolver)));
        assert!(!solution.contains(Card::Room(RoomName::Hall)));
    }
}
