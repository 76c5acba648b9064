//! The 3×3 grid marking game.
//!
//! - `board`: cells, marks, the eight fixed lines and line scanning
//! - `strategy`: the four-tier heuristic opponent and a random stand-in
//! - `session`: turn order and best-of-five scoring

pub mod board;
pub mod session;
pub mod strategy;

pub use board::{Cell, CellId, GridBoard, GridOutcome, Line, Mark, CELL_COUNT, LINES};
pub use session::{GridMatch, Scoreboard, Side, GRAND_WINNER_SCORE};
pub use strategy::{Decision, GridAgent, MoveRule, OpponentStrategy, RandomMover};
