//! A single 52-card deck dealt without replacement.

use tracing::trace;

use crate::core::GameRng;
use crate::error::DeckError;

use super::card::{Card, Rank, Suit};
use super::hand::Hand;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// The undealt cards of one round.
///
/// Aces get their value when the deck is built. Each draw picks uniformly
/// among the remaining cards and removes the pick for good; the deck is
/// never reshuffled or refilled.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: GameRng,
}

impl Deck {
    /// Build a full deck, drawing ace values and later picks from `rng`.
    pub fn new(mut rng: GameRng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank, &mut rng));
            }
        }
        Self { cards, rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Remove and return one remaining card, chosen uniformly.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let idx = self.rng.gen_range_usize(0..self.cards.len());
        let card = self.cards.swap_remove(idx);
        trace!(%card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Draw one card into `hand`.
    pub fn deal_to(&mut self, hand: &mut Hand) -> Result<Card, DeckError> {
        let card = self.draw()?;
        hand.add(card);
        Ok(card)
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The undealt cards, in no meaningful order.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }
}
