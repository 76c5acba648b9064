//! Automated grid opponents.
//!
//! - `OpponentStrategy`: the fixed four-tier heuristic (win, block, center, random)
//! - `RandomMover`: uniform random moves, used as a stand-in participant
//!
//! Both implement `GridAgent` so a session can drive either one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::GameRng;

use super::board::{CellId, GridBoard, Mark};

/// Why a cell was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRule {
    /// Complete our own line.
    WinMove,
    /// Fill the cell that would complete the other side's line.
    BlockMove,
    /// Take the center.
    CenterMove,
    /// Uniform choice among empty cells.
    RandomMove,
}

impl MoveRule {
    /// Heuristic tiers, highest priority first.
    pub const PRIORITY: [MoveRule; 4] = [
        MoveRule::WinMove,
        MoveRule::BlockMove,
        MoveRule::CenterMove,
        MoveRule::RandomMove,
    ];
}

/// A chosen cell and the rule that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub cell: CellId,
    pub rule: MoveRule,
}

/// Something that picks the next cell for one side of the board.
pub trait GridAgent {
    /// Choose an empty cell for `own`. Returns `None` only on a full board.
    fn choose_cell(&mut self, board: &GridBoard, own: Mark, other: Mark) -> Option<Decision>;

    /// Display name for logs.
    fn name(&self) -> &str;
}

/// Four-tier heuristic opponent.
///
/// Not a search: it never looks for forks, and it must not be upgraded to one.
#[derive(Clone, Debug)]
pub struct OpponentStrategy {
    rng: GameRng,
}

impl OpponentStrategy {
    /// Create a strategy drawing its fallback moves from `rng`.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a strategy from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Decide the next cell for `own`, given the human's mark `human`.
    pub fn decide(&mut self, board: &GridBoard, own: Mark, human: Mark) -> Option<Decision> {
        MoveRule::PRIORITY.iter().find_map(|&rule| {
            let cell = match rule {
                MoveRule::WinMove => board.completing_cell_for(own),
                MoveRule::BlockMove => board.completing_cell_for(human),
                MoveRule::CenterMove => board
                    .mark_at(CellId::CENTER)
                    .is_none()
                    .then_some(CellId::CENTER),
                MoveRule::RandomMove => self.rng.choose(&board.unmarked_cells()).copied(),
            }?;
            Some(Decision { cell, rule })
        })
    }
}

impl GridAgent for OpponentStrategy {
    fn choose_cell(&mut self, board: &GridBoard, own: Mark, other: Mark) -> Option<Decision> {
        let decision = self.decide(board, own, other);
        if let Some(d) = decision {
            debug!(cell = %d.cell, rule = ?d.rule, mark = %own, "opponent move");
        }
        decision
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

/// Picks uniformly among empty cells.
#[derive(Clone, Debug)]
pub struct RandomMover {
    rng: GameRng,
}

impl RandomMover {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl GridAgent for RandomMover {
    fn choose_cell(&mut self, board: &GridBoard, own: Mark, _other: Mark) -> Option<Decision> {
        let cell = self.rng.choose(&board.unmarked_cells()).copied()?;
        debug!(cell = %cell, mark = %own, "random move");
        Some(Decision {
            cell,
            rule: MoveRule::RandomMove,
        })
    }

    fn name(&self) -> &str {
        "Random"
    }
}
