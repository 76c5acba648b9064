//! Playing cards with a point value fixed at construction.
//!
//! Face cards are worth 10 and numbered cards their number. An ace is worth
//! 1 or 11, picked at random when the card is built and never revisited,
//! even if the hand holding it busts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::CardError;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Hearts => "Hearts",
        }
    }
}

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// Point value of a non-ace rank; `None` for the ace.
    #[must_use]
    pub const fn fixed_value(self) -> Option<u8> {
        match self {
            Rank::Ace => None,
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Four => Some(4),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Seven => Some(7),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => Some(10),
        }
    }
}

/// The two values an ace can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AceValue {
    One,
    Eleven,
}

impl AceValue {
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            AceValue::One => 1,
            AceValue::Eleven => 11,
        }
    }

    /// 1 or 11 with equal probability.
    pub fn random(rng: &mut GameRng) -> Self {
        if rng.gen_bool(0.5) {
            AceValue::Eleven
        } else {
            AceValue::One
        }
    }
}

/// An immutable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: Rank,
    value: u8,
}

/// Unchecked wire form of `Card`.
#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    rank: Rank,
    value: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        let valid = match raw.rank.fixed_value() {
            Some(v) => raw.value == v,
            None => raw.value == AceValue::One.points() || raw.value == AceValue::Eleven.points(),
        };
        if !valid {
            return Err(CardError::InvalidValue {
                rank: raw.rank,
                value: raw.value,
            });
        }
        Ok(Self {
            suit: raw.suit,
            rank: raw.rank,
            value: raw.value,
        })
    }
}

impl Card {
    /// Build a card. An ace's value is drawn from `rng` here, once.
    pub fn new(suit: Suit, rank: Rank, rng: &mut GameRng) -> Self {
        let ace = match rank {
            Rank::Ace => AceValue::random(rng),
            _ => AceValue::One,
        };
        Self::with_ace_value(suit, rank, ace)
    }

    /// Build a card with a chosen ace value. `ace` is ignored for other ranks.
    #[must_use]
    pub const fn with_ace_value(suit: Suit, rank: Rank, ace: AceValue) -> Self {
        let value = match rank.fixed_value() {
            Some(v) => v,
            None => ace.points(),
        };
        Self { suit, rank, value }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Same suit and rank, regardless of the ace value drawn.
    #[must_use]
    pub fn same_face(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl fmt::Display for Card {
    /// Format like `Queen of Hearts`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}
