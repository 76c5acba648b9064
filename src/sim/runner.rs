//! Automated play of both games.
//!
//! The grid matches pit a `RandomMover` (standing in for the human) against
//! the heuristic opponent. The card rounds use a `StandOn` player against
//! the dealer policy. All randomness comes from `SimConfig::seed`, so a
//! report can be reproduced exactly.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::{DealerPolicy, StandOn, Table, Tally};
use crate::core::GameRng;
use crate::error::SimError;
use crate::grid::{GridAgent, GridMatch, OpponentStrategy, RandomMover, Side};

use super::config::SimConfig;

/// Aggregated grid results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSummary {
    pub human_matches: u32,
    pub opponent_matches: u32,
    /// Matches that hit `max_rounds_per_match` without a winner.
    pub unfinished_matches: u32,
    pub rounds: u32,
    pub tied_rounds: u32,
}

/// Everything a run produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimReport {
    pub seed: u64,
    pub grid: GridSummary,
    pub cards: Tally,
}

/// Play `config.grid_matches` best-of-five matches.
pub fn run_grid_matches(config: &SimConfig) -> Result<GridSummary, SimError> {
    let root = GameRng::new(config.seed);
    let mut opponent = OpponentStrategy::new(root.for_context("grid-opponent"));
    let mut stand_in = RandomMover::new(root.for_context("grid-human"));
    let mut summary = GridSummary::default();

    for match_index in 0..config.grid_matches {
        let mut game = GridMatch::new(config.human_mark, config.first_mover);

        while game.match_winner().is_none() && game.rounds_played() < config.max_rounds_per_match {
            while game.round_outcome().is_none() {
                let side = game.current_turn();
                let agent: &mut dyn GridAgent = match side {
                    Side::Human => &mut stand_in,
                    Side::Opponent => &mut opponent,
                };
                game.play_agent(side, agent)?;
            }
            game.next_round();
        }

        let scores = game.scores();
        summary.rounds += game.rounds_played();
        summary.tied_rounds += scores.ties;
        match game.match_winner() {
            Some(Side::Human) => summary.human_matches += 1,
            Some(Side::Opponent) => summary.opponent_matches += 1,
            None => {
                warn!(match_index, rounds = game.rounds_played(), "grid match hit the round limit");
                summary.unfinished_matches += 1;
            }
        }
        debug!(match_index, ?scores, "grid match finished");
    }

    Ok(summary)
}

/// Play `config.card_rounds` rounds at one table.
pub fn run_card_rounds(config: &SimConfig) -> Result<Tally, SimError> {
    let root = GameRng::new(config.seed);
    let mut table = Table::new("Player", root.for_context("cards"));
    let player = StandOn(config.stand_on);

    for _ in 0..config.card_rounds {
        let mut round = table.new_round()?;
        let resolution = round.play_out(&player, &DealerPolicy)?;
        table.record(&resolution);
    }

    Ok(table.tally())
}

/// Run both games.
pub fn run(config: &SimConfig) -> Result<SimReport, SimError> {
    info!(seed = config.seed, "starting simulation");
    let report = SimReport {
        seed: config.seed,
        grid: run_grid_matches(config)?,
        cards: run_card_rounds(config)?,
    };
    info!(?report, "simulation finished");
    Ok(report)
}
