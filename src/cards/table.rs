//! Round flow for the card game.
//!
//! A `Round` owns a fresh deck and both hands. It moves through
//! `PlayerTurn` -> `DealerTurn` -> `Finished`; a player bust skips the
//! dealer's turn. A `Table` keeps the participants' names and a running
//! tally, and builds every round from a newly forked RNG stream so no round
//! state survives into the next.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::GameRng;
use crate::error::TableError;

use super::card::Card;
use super::deck::Deck;
use super::hand::{Hand, PartialReveal};
use super::outcome::{Outcome, OutcomeResolver, Resolution};
use super::policy::{DrawDecision, DrawPolicy};

/// Cards each participant receives before the player's turn.
pub const OPENING_CARDS: usize = 2;

/// Names the dealer is drawn from.
pub const DEALER_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];

/// A named participant and their hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub hand: Hand,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }
}

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    PlayerTurn,
    DealerTurn,
    Finished,
}

/// One round: a fresh deck, the player, and the dealer.
#[derive(Clone, Debug)]
pub struct Round {
    deck: Deck,
    player: Participant,
    dealer: Participant,
    phase: RoundPhase,
}

impl Round {
    /// Build a deck from `rng` and deal two cards to the player, then two to
    /// the dealer.
    pub fn deal(player: Participant, dealer: Participant, rng: GameRng) -> Result<Self, TableError> {
        let mut round = Self {
            deck: Deck::new(rng),
            player,
            dealer,
            phase: RoundPhase::PlayerTurn,
        };
        round.player.hand.clear();
        round.dealer.hand.clear();

        for _ in 0..OPENING_CARDS {
            round.deck.deal_to(&mut round.player.hand)?;
        }
        for _ in 0..OPENING_CARDS {
            round.deck.deal_to(&mut round.dealer.hand)?;
        }

        // Two eleven-valued aces bust on the deal.
        if round.player.hand.is_bust() {
            round.phase = RoundPhase::Finished;
        }
        debug!(
            player_total = round.player.hand.total(),
            dealer_shows = ?round.dealer.hand.partial_reveal().shown,
            "opening deal"
        );
        Ok(round)
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn player(&self) -> &Participant {
        &self.player
    }

    #[must_use]
    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// The dealer's hand as shown while the player is still deciding.
    #[must_use]
    pub fn dealer_reveal(&self) -> PartialReveal {
        self.dealer.hand.partial_reveal()
    }

    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining_count()
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), TableError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TableError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Deal the player another card. A bust ends the round.
    pub fn player_hit(&mut self) -> Result<Card, TableError> {
        self.expect_phase(RoundPhase::PlayerTurn)?;
        let card = self.deck.deal_to(&mut self.player.hand)?;
        debug!(%card, total = self.player.hand.total(), "player hit");
        if self.player.hand.is_bust() {
            self.phase = RoundPhase::Finished;
        }
        Ok(card)
    }

    /// End the player's turn.
    pub fn player_stay(&mut self) -> Result<(), TableError> {
        self.expect_phase(RoundPhase::PlayerTurn)?;
        debug!(total = self.player.hand.total(), "player stays");
        self.phase = RoundPhase::DealerTurn;
        Ok(())
    }

    /// Apply one dealer decision. The round finishes on a stay or a bust.
    pub fn dealer_step(&mut self, policy: &dyn DrawPolicy) -> Result<DrawDecision, TableError> {
        self.expect_phase(RoundPhase::DealerTurn)?;
        let decision = policy.decide(&self.dealer.hand);
        match decision {
            DrawDecision::Stay => {
                debug!(total = self.dealer.hand.total(), "dealer stays");
                self.phase = RoundPhase::Finished;
            }
            DrawDecision::Hit => {
                let card = self.deck.deal_to(&mut self.dealer.hand)?;
                debug!(%card, total = self.dealer.hand.total(), "dealer hit");
                if self.dealer.hand.is_bust() {
                    self.phase = RoundPhase::Finished;
                }
            }
        }
        Ok(decision)
    }

    /// Run the dealer's turn to completion.
    pub fn dealer_play(&mut self, policy: &dyn DrawPolicy) -> Result<(), TableError> {
        while self.phase == RoundPhase::DealerTurn {
            self.dealer_step(policy)?;
        }
        Ok(())
    }

    /// Play the player's side with `policy`, then the dealer's with `dealer`.
    pub fn play_out(&mut self, player: &dyn DrawPolicy, dealer: &dyn DrawPolicy) -> Result<Resolution, TableError> {
        while self.phase == RoundPhase::PlayerTurn {
            match player.decide(&self.player.hand) {
                DrawDecision::Hit => {
                    self.player_hit()?;
                }
                DrawDecision::Stay => self.player_stay()?,
            }
        }
        self.dealer_play(dealer)?;
        self.resolve()
    }

    /// The result of a finished round.
    pub fn resolve(&self) -> Result<Resolution, TableError> {
        self.expect_phase(RoundPhase::Finished)?;
        Ok(OutcomeResolver::resolve(&self.player.hand, &self.dealer.hand))
    }
}

/// Results across rounds at one table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player_wins += 1,
            Outcome::DealerWins => self.dealer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.player_wins + self.dealer_wins + self.ties
    }
}

/// The player's seat against one dealer, across repeated rounds.
#[derive(Clone, Debug)]
pub struct Table {
    player_name: String,
    dealer_name: String,
    rng: GameRng,
    tally: Tally,
}

impl Table {
    /// Seat a player. The dealer's name is drawn from `DEALER_NAMES`.
    pub fn new(player_name: impl Into<String>, rng: GameRng) -> Self {
        let dealer_name = rng
            .for_context("dealer-name")
            .choose(&DEALER_NAMES)
            .copied()
            .unwrap_or(DEALER_NAMES[0]);
        Self {
            player_name: player_name.into(),
            dealer_name: dealer_name.to_string(),
            rng,
            tally: Tally::default(),
        }
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn dealer_name(&self) -> &str {
        &self.dealer_name
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Deal a new round from a fresh deck.
    pub fn new_round(&mut self) -> Result<Round, TableError> {
        Round::deal(
            Participant::new(self.player_name.clone()),
            Participant::new(self.dealer_name.clone()),
            self.rng.fork(),
        )
    }

    /// Count a finished round's outcome.
    pub fn record(&mut self, resolution: &Resolution) {
        self.tally.record(resolution.outcome);
        info!(
            outcome = ?resolution.outcome,
            reason = ?resolution.reason,
            player_total = resolution.player_total,
            dealer_total = resolution.dealer_total,
            "card round finished"
        );
    }
}
