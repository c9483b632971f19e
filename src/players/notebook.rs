//! Private deduction notebook.
//!
//! Client-side aid only: the engine never reads or writes marks, and no
//! game outcome depends on them. Snapshots carry them so a restored game
//! keeps each player's notes.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Tri-state mark a player puts next to a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Unknown,
    Suspected,
    RuledOut,
}

/// Card → mark table. Cards never marked read as `Unknown`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    marks: OrdMap<Card, Mark>,
}

impl Notebook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mark for a card. Marking `Unknown` clears the entry.
    pub fn mark(&mut self, card: Card, mark: Mark) {
        if mark == Mark::Unknown {
            self.marks.remove(&card);
        } else {
            self.marks.insert(card, mark);
        }
    }

    #[must_use]
    pub fn mark_of(&self, card: Card) -> Mark {
        self.marks.get(&card).copied().unwrap_or_default()
    }

    /// Every card of the deck with its mark, in deck order.
    pub fn entries(&self) -> impl Iterator<Item = (Card, Mark)> + '_ {
        Card::all().map(move |card| (card, self.mark_of(card)))
    }

    /// Cards with a mark other than `Unknown`.
    pub fn marked(&self) -> impl Iterator<Item = (Card, Mark)> + '_ {
        self.marks.iter().map(|(&card, &mark)| (card, mark))
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

impl FromIterator<(Card, Mark)> for Notebook {
    fn from_iter<I: IntoIterator<Item = (Card, Mark)>>(iter: I) -> Self {
        let mut notebook = Notebook::new();
        for (card, mark) in iter {
            notebook.mark(card, mark);
        }
        notebook
    }
}
