//! The twenty-one card game.
//!
//! - `card`: suits, ranks and the construction-time ace value
//! - `deck`: 52 cards dealt uniformly without replacement
//! - `hand`: totals and bust detection
//! - `policy`: hit/stay decisions, including the dealer's fixed rule
//! - `outcome`: winner resolution with player-bust precedence
//! - `table`: round phases and the per-table tally

pub mod card;
pub mod deck;
pub mod hand;
pub mod outcome;
pub mod policy;
pub mod table;

pub use card::{AceValue, Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use hand::{Hand, PartialReveal, BUST_LIMIT};
pub use outcome::{Outcome, OutcomeReason, OutcomeResolver, Resolution};
pub use policy::{DealerPolicy, DrawDecision, DrawPolicy, StandOn, DEALER_STAND_THRESHOLD};
pub use table::{Participant, Round, RoundPhase, Table, Tally, DEALER_NAMES, OPENING_CARDS};
