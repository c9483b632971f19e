//! Per-player state: identity, token, position and private hand.
//!
//! A player's position is only ever changed by the board
//! ([`crate::board::Topology::move_player`]), so occupancy recorded on tiles
//! and positions recorded on players cannot drift apart.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::notebook::Notebook;
use crate::board::Position;
use crate::cards::{Card, CardCategory, Suspect};
use crate::core::PlayerId;

/// A player's private set of cards.
///
/// Backed by a persistent ordered set: cloning for snapshots is O(1) and
/// iteration order is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: OrdSet<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. Adding a card already held is a no-op.
    ///
    /// Returns true if the card was new.
    pub fn add_card(&mut self, card: Card) -> bool {
        self.cards.insert(card).is_none()
    }

    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Cards of one category.
    pub fn in_category(&self, category: CardCategory) -> impl Iterator<Item = Card> + '_ {
        self.iter().filter(move |card| card.category() == category)
    }

    /// Cards from `candidates` that this hand holds, in candidate order.
    #[must_use]
    pub fn matching(&self, candidates: &[Card]) -> Vec<Card> {
        candidates.iter().copied().filter(|&card| self.has_card(card)).collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player<P> {
    id: PlayerId,
    name: String,
    token: Suspect,
    position: P,
    hand: Hand,
    notebook: Notebook,
    eliminated: bool,
}

impl<P: Position> Player<P> {
    /// Create a player standing at `position`.
    ///
    /// The board must still be told about the player
    /// ([`crate::board::Topology::place_player`]) before it shows up in tile
    /// occupancy.
    pub fn new(id: PlayerId, name: impl Into<String>, token: Suspect, position: P) -> Self {
        Self {
            id,
            name: name.into(),
            token,
            position,
            hand: Hand::new(),
            notebook: Notebook::new(),
            eliminated: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The suspect token this player moves, which is also their colour.
    #[must_use]
    pub fn token(&self) -> Suspect {
        self.token
    }

    #[must_use]
    pub fn position(&self) -> P {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: P) {
        self.position = position;
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.has_card(card)
    }

    /// Held cards of one category.
    pub fn hand_in(&self, category: CardCategory) -> impl Iterator<Item = Card> + '_ {
        self.hand.in_category(category)
    }

    /// Add a card to this player's hand. Idempotent.
    pub fn add_card(&mut self, card: Card) -> bool {
        self.hand.add_card(card)
    }

    #[must_use]
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    /// Mutable notebook access for UI code. The engine never writes here.
    pub fn notebook_mut(&mut self) -> &mut Notebook {
        &mut self.notebook
    }

    pub(crate) fn set_notebook(&mut self, notebook: Notebook) {
        self.notebook = notebook;
    }

    /// True once this player has made a wrong accusation.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    pub(crate) fn set_eliminated(&mut self, eliminated: bool) {
        self.eliminated = eliminated;
    }
}
