//! Error types for both engines and the simulator configuration.
//!
//! Only caller defects and exhausted resources are errors. Ties, busts and
//! "no winner" are ordinary return values.

use std::path::PathBuf;

use crate::cards::{Rank, RoundPhase};
use crate::grid::CellId;

/// Errors raised by the grid game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell {0} is not on the board (expected 1-9)")]
    InvalidCell(u8),

    #[error("cell {0} is already marked")]
    CellOccupied(CellId),

    #[error("invalid mark {0:?} (expected X or O)")]
    InvalidMark(String),

    #[error("both participants hold the same mark")]
    SameMarks,

    #[error("the round is already over")]
    RoundOver,

    #[error("it is not this participant's turn")]
    NotYourTurn,

    #[error("board slot {slot} holds cell {found}")]
    MisplacedCell { slot: usize, found: CellId },
}

/// Errors raised when a card is rebuilt from serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("a {rank:?} cannot be worth {value}")]
    InvalidValue { rank: Rank, value: u8 },
}

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("cannot draw from an empty deck")]
    Empty,
}

/// Errors raised while driving a card round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("action requires the {expected:?} phase but the round is in {actual:?}")]
    WrongPhase {
        expected: RoundPhase,
        actual: RoundPhase,
    },
}

/// Errors surfaced by a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("grid game error: {0}")]
    Grid(#[from] GridError),

    #[error("card table error: {0}")]
    Table(#[from] TableError),
}

/// Errors that can occur when loading simulator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
