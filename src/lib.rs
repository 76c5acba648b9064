//! # parlor-games
//!
//! Engines for two turn-based games against an automated opponent.
//!
//! ## Games
//!
//! 1. **Grid game** (tic-tac-toe): a 3×3 board scanned over eight fixed
//!    lines, and a four-tier heuristic opponent (win, block, center, random).
//!
//! 2. **Card game** (twenty-one): a 52-card deck dealt without replacement,
//!    aces valued 1 or 11 once at construction, bust above 21, a dealer who
//!    stays on 17, and player-bust-first outcome resolution.
//!
//! ## Architecture
//!
//! - **Injected Randomness**: every random choice goes through a seeded
//!   `GameRng`, so decks and opponent moves are reproducible.
//!
//! - **Fresh Round State**: boards, decks and hands are built new for
//!   each round rather than reset in place.
//!
//! - **No I/O**: prompting and rendering belong to the caller. The crate
//!   only computes next states and outcomes.
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG
//! - `grid`: Board, opponent strategy, best-of-five session
//! - `cards`: Card, deck, hand, dealer policy, outcome, round flow
//! - `sim`: Seeded automated runs of both games
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod grid;
pub mod cards;
pub mod sim;

// Re-export commonly used types
pub use crate::core::GameRng;

pub use crate::error::{CardError, ConfigError, DeckError, GridError, SimError, TableError};

pub use crate::grid::{
    CellId, Decision, GridAgent, GridBoard, GridMatch, GridOutcome, Mark, MoveRule,
    OpponentStrategy, RandomMover, Side,
};

pub use crate::cards::{
    AceValue, Card, DealerPolicy, Deck, DrawDecision, DrawPolicy, Hand, Outcome,
    OutcomeReason, OutcomeResolver, Rank, Resolution, Round, RoundPhase, Suit, Table,
};

pub use crate::sim::{SimConfig, SimReport};
