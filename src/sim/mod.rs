//! Seeded, non-interactive runs of both games.
//!
//! Used by the `parlor-sim` binary and by end-to-end tests.

pub mod config;
pub mod runner;

pub use config::SimConfig;
pub use runner::{run, run_card_rounds, run_grid_matches, GridSummary, SimReport};
