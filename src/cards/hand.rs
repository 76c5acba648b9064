//! A participant's cards and their total.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// Totals above this bust.
pub const BUST_LIMIT: u32 = 21;

/// Cards held by one participant, in the order they were dealt.
///
/// Append-only during a round; `clear` empties it between rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

/// What a renderer may show of a hidden hand: the first card plus a count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialReveal {
    pub shown: Option<Card>,
    pub hidden: usize,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dealt card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of card values.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.value())).sum()
    }

    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BUST_LIMIT
    }

    #[must_use]
    pub fn partial_reveal(&self) -> PartialReveal {
        PartialReveal {
            shown: self.cards.first().copied(),
            hidden: self.cards.len().saturating_sub(1),
        }
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
