//! Hit/stay decisions.
//!
//! `DrawPolicy` is the seam between a hand and whoever decides to draw.
//! The dealer's policy is fixed; `StandOn` lets the simulator stand in for
//! the human participant.

use serde::{Deserialize, Serialize};

use super::hand::Hand;

/// Total at which the dealer stops drawing.
pub const DEALER_STAND_THRESHOLD: u32 = 17;

/// Draw another card or stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawDecision {
    Hit,
    Stay,
}

/// Decides whether a hand takes another card.
pub trait DrawPolicy {
    fn decide(&self, hand: &Hand) -> DrawDecision;
}

/// The dealer: stay at 17 or more, otherwise hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DealerPolicy;

impl DrawPolicy for DealerPolicy {
    fn decide(&self, hand: &Hand) -> DrawDecision {
        StandOn(DEALER_STAND_THRESHOLD).decide(hand)
    }
}

/// Stay once the total reaches the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandOn(pub u32);

impl DrawPolicy for StandOn {
    fn decide(&self, hand: &Hand) -> DrawDecision {
        if hand.total() >= self.0 {
            DrawDecision::Stay
        } else {
            DrawDecision::Hit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::{AceValue, Card, Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        ranks
            .iter()
            .map(|&r| Card::with_ace_value(Suit::Clubs, r, AceValue::One))
            .collect()
    }

    #[test]
    fn test_dealer_hits_below_17() {
        assert_eq!(DealerPolicy.decide(&hand_of(&[Rank::Ten, Rank::Six])), DrawDecision::Hit);
        assert_eq!(DealerPolicy.decide(&Hand::new()), DrawDecision::Hit);
    }

    #[test]
    fn test_dealer_stays_at_17_or_more() {
        assert_eq!(DealerPolicy.decide(&hand_of(&[Rank::Ten, Rank::Seven])), DrawDecision::Stay);
        assert_eq!(
            DealerPolicy.decide(&hand_of(&[Rank::King, Rank::Queen, Rank::Five])),
            DrawDecision::Stay
        );
    }

    #[test]
    fn test_stand_on_threshold() {
        let policy = StandOn(12);
        assert_eq!(policy.decide(&hand_of(&[Rank::Five, Rank::Six])), DrawDecision::Hit);
        assert_eq!(policy.decide(&hand_of(&[Rank::Five, Rank::Seven])), DrawDecision::Stay);
    }
}
