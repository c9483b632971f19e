//! Card identities: three disjoint categories of the reference deck.
//!
//! A `Card` is a tagged union over `Suspect`, `Weapon` and `RoomName`.
//! Each category is a closed enum with an `ALL` table in deck order, so the
//! deck is always 6 + 6 + 9 cards.

use serde::{Deserialize, Serialize};

/// One of the three card categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Suspect,
    Weapon,
    Room,
}

impl CardCategory {
    /// All categories, in the order solution cards are drawn.
    pub const ALL: [CardCategory; 3] = [CardCategory::Suspect, CardCategory::Weapon, CardCategory::Room];
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardCategory::Suspect => "suspect",
            CardCategory::Weapon => "weapon",
            CardCategory::Room => "room",
        };
        f.write_str(name)
    }
}

/// A suspect. Also used as a player's token and colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suspect {
    Scarlett,
    Mustard,
    White,
    Green,
    Peacock,
    Plum,
}

impl Suspect {
    pub const ALL: [Suspect; 6] = [
        Suspect::Scarlett,
        Suspect::Mustard,
        Suspect::White,
        Suspect::Green,
        Suspect::Peacock,
        Suspect::Plum,
    ];

    /// Display name as printed on the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suspect::Scarlett => "Miss Scarlett",
            Suspect::Mustard => "Colonel Mustard",
            Suspect::White => "Mrs. White",
            Suspect::Green => "Reverend Green",
            Suspect::Peacock => "Mrs. Peacock",
            Suspect::Plum => "Professor Plum",
        }
    }

    /// Token colour.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Suspect::Scarlett => "red",
            Suspect::Mustard => "yellow",
            Suspect::White => "white",
            Suspect::Green => "green",
            Suspect::Peacock => "blue",
            Suspect::Plum => "purple",
        }
    }
}

impl std::fmt::Display for Suspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weapon {
    Candlestick,
    Dagger,
    LeadPipe,
    Revolver,
    Rope,
    Wrench,
}

impl Weapon {
    pub const ALL: [Weapon; 6] = [
        Weapon::Candlestick,
        Weapon::Dagger,
        Weapon::LeadPipe,
        Weapon::Revolver,
        Weapon::Rope,
        Weapon::Wrench,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Weapon::Candlestick => "Candlestick",
            Weapon::Dagger => "Dagger",
            Weapon::LeadPipe => "Lead Pipe",
            Weapon::Revolver => "Revolver",
            Weapon::Rope => "Rope",
            Weapon::Wrench => "Wrench",
        }
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A room card. Its `name()` is the name the board uses for the matching room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomName {
    Kitchen,
    Ballroom,
    Conservatory,
    DiningRoom,
    BilliardRoom,
    Library,
    Lounge,
    Hall,
    Study,
}

impl RoomName {
    pub const ALL: [RoomName; 9] = [
        RoomName::Kitchen,
        RoomName::Ballroom,
        RoomName::Conservatory,
        RoomName::DiningRoom,
        RoomName::BilliardRoom,
        RoomName::Library,
        RoomName::Lounge,
        RoomName::Hall,
        RoomName::Study,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RoomName::Kitchen => "Kitchen",
            RoomName::Ballroom => "Ballroom",
            RoomName::Conservatory => "Conservatory",
            RoomName::DiningRoom => "Dining Room",
            RoomName::BilliardRoom => "Billiard Room",
            RoomName::Library => "Library",
            RoomName::Lounge => "Lounge",
            RoomName::Hall => "Hall",
            RoomName::Study => "Study",
        }
    }

    /// Look up the room card for a board room name.
    ///
    /// Returns `None` for rooms that have no card (the home base).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|room| room.name() == name)
    }
}

impl std::fmt::Display for RoomName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card of the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Suspect(Suspect),
    Weapon(Weapon),
    Room(RoomName),
}

impl Card {
    #[must_use]
    pub const fn category(self) -> CardCategory {
        match self {
            Card::Suspect(_) => CardCategory::Suspect,
            Card::Weapon(_) => CardCategory::Weapon,
            Card::Room(_) => CardCategory::Room,
        }
    }

    /// Every card of the reference deck, unshuffled.
    pub fn all() -> impl Iterator<Item = Card> {
        Suspect::ALL
            .into_iter()
            .map(Card::Suspect)
            .chain(Weapon::ALL.into_iter().map(Card::Weapon))
            .chain(RoomName::ALL.into_iter().map(Card::Room))
    }
}

impl From<Suspect> for Card {
    fn from(suspect: Suspect) -> Self {
        Card::Suspect(suspect)
    }
}

impl From<Weapon> for Card {
    fn from(weapon: Weapon) -> Self {
        Card::Weapon(weapon)
    }
}

impl From<RoomName> for Card {
    fn from(room: RoomName) -> Self {
        Card::Room(room)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Suspect(s) => write!(f, "{s}"),
            Card::Weapon(w) => write!(f, "{w}"),
            Card::Room(r) => write!(f, "{r}"),
        }
    }
}
