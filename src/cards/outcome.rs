//! Deciding the winner of a finished card round.

use serde::{Deserialize, Serialize};

use super::hand::Hand;

/// Who won the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Tie,
}

/// Which rule settled the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeReason {
    PlayerBust,
    DealerBust,
    HigherTotal,
    EqualTotals,
}

/// Outcome plus the final totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub outcome: Outcome,
    pub reason: OutcomeReason,
    pub player_total: u32,
    pub dealer_total: u32,
}

/// Compares final hands.
///
/// Player bust is checked first, so a double bust goes to the dealer.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomeResolver;

impl OutcomeResolver {
    #[must_use]
    pub fn resolve(player: &Hand, dealer: &Hand) -> Resolution {
        let player_total = player.total();
        let dealer_total = dealer.total();

        let (outcome, reason) = if player.is_bust() {
            (Outcome::DealerWins, OutcomeReason::PlayerBust)
        } else if dealer.is_bust() {
            (Outcome::PlayerWins, OutcomeReason::DealerBust)
        } else if player_total > dealer_total {
            (Outcome::PlayerWins, OutcomeReason::HigherTotal)
        } else if dealer_total > player_total {
            (Outcome::DealerWins, OutcomeReason::HigherTotal)
        } else {
            (Outcome::Tie, OutcomeReason::EqualTotals)
        };

        Resolution {
            outcome,
            reason,
            player_total,
            dealer_total,
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
            .map(|&r| Card::with_ace_value(Suit::Hearts, r, AceValue::Eleven))
            .collect()
    }

    #[test]
    fn test_double_bust_goes_to_dealer() {
        let player = hand_of(&[Rank::King, Rank::Queen, Rank::Five]);
        let dealer = hand_of(&[Rank::King, Rank::Six, Rank::Nine]);
        let res = OutcomeResolver::resolve(&player, &dealer);
        assert_eq!(res.outcome, Outcome::DealerWins);
        assert_eq!(res.reason, OutcomeReason::PlayerBust);
    }

    #[test]
    fn test_dealer_bust() {
        let player = hand_of(&[Rank::Two, Rank::Three]);
        let dealer = hand_of(&[Rank::King, Rank::Six, Rank::Nine]);
        let res = OutcomeResolver::resolve(&player, &dealer);
        assert_eq!(res.outcome, Outcome::PlayerWins);
        assert_eq!(res.reason, OutcomeReason::DealerBust);
    }

    #[test]
    fn test_higher_total_wins() {
        let player = hand_of(&[Rank::King, Rank::Nine]);
        let dealer = hand_of(&[Rank::King, Rank::Seven]);
        assert_eq!(OutcomeResolver::resolve(&player, &dealer).outcome, Outcome::PlayerWins);
        assert_eq!(OutcomeResolver::resolve(&dealer, &player).outcome, Outcome::DealerWins);
    }

    #[test]
    fn test_equal_totals_tie() {
        let player = hand_of(&[Rank::King, Rank::Queen]);
        let dealer = hand_of(&[Rank::Jack, Rank::Ten]);
        let res = OutcomeResolver::resolve(&player, &dealer);
        assert_eq!(res.outcome, Outcome::Tie);
        assert_eq!(res.reason, OutcomeReason::EqualTotals);
        assert_eq!((res.player_total, res.dealer_total), (20, 20));
    }
}
