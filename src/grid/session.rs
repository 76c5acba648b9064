//! Round and match bookkeeping for the grid game.
//!
//! A `GridMatch` runs best-of-five: rounds are played until one side has
//! `GRAND_WINNER_SCORE` wins. Each round gets a fresh board and the same
//! side opens every round.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GridError;

use super::board::{CellId, GridBoard, GridOutcome, Mark};
use super::strategy::GridAgent;

/// Round wins needed to take the match.
pub const GRAND_WINNER_SCORE: u32 = 5;

/// The two sides of a grid match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// Round wins per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub human: u32,
    pub opponent: u32,
    pub ties: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Opponent => self.opponent,
        }
    }

    fn credit(&mut self, winner: Option<Side>) {
        match winner {
            Some(Side::Human) => self.human += 1,
            Some(Side::Opponent) => self.opponent += 1,
            None => self.ties += 1,
        }
    }
}

/// A best-of-five grid match between a human and an automated opponent.
#[derive(Clone, Debug)]
pub struct GridMatch {
    human_mark: Mark,
    opponent_mark: Mark,
    first_mover: Side,
    turn: Side,
    board: GridBoard,
    scores: Scoreboard,
    rounds_played: u32,
}

impl GridMatch {
    /// Start a match. The opponent takes the mark the human did not choose.
    pub fn new(human_mark: Mark, first_mover: Side) -> Self {
        Self {
            human_mark,
            opponent_mark: human_mark.other(),
            first_mover,
            turn: first_mover,
            board: GridBoard::new(),
            scores: Scoreboard::default(),
            rounds_played: 0,
        }
    }

    /// Start a match with explicitly chosen marks, which must differ.
    pub fn with_marks(human_mark: Mark, opponent_mark: Mark, first_mover: Side) -> Result<Self, GridError> {
        if human_mark == opponent_mark {
            return Err(GridError::SameMarks);
        }
        Ok(Self::new(human_mark, first_mover))
    }

    #[must_use]
    pub fn board(&self) -> &GridBoard {
        &self.board
    }

    #[must_use]
    pub fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human_mark,
            Side::Opponent => self.opponent_mark,
        }
    }

    /// The side holding `mark`.
    #[must_use]
    pub fn side_of(&self, mark: Mark) -> Side {
        if mark == self.human_mark {
            Side::Human
        } else {
            Side::Opponent
        }
    }

    #[must_use]
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    #[must_use]
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The current round's result, if it has ended.
    #[must_use]
    pub fn round_outcome(&self) -> Option<GridOutcome> {
        self.board.outcome()
    }

    /// Play the human's chosen cell.
    pub fn play_human(&mut self, cell: CellId) -> Result<Option<GridOutcome>, GridError> {
        self.play(Side::Human, cell)
    }

    /// Let the agent pick and play the opponent's cell.
    pub fn play_opponent(&mut self, agent: &mut dyn GridAgent) -> Result<Option<GridOutcome>, GridError> {
        self.play_agent(Side::Opponent, agent)
    }

    /// Let an agent choose and play the cell for `side`.
    pub fn play_agent(&mut self, side: Side, agent: &mut dyn GridAgent) -> Result<Option<GridOutcome>, GridError> {
        if self.board.is_terminal() {
            return Err(GridError::RoundOver);
        }
        let own = self.mark_of(side);
        let decision = agent
            .choose_cell(&self.board, own, own.other())
            .ok_or(GridError::RoundOver)?;
        debug!(agent = agent.name(), ?side, cell = %decision.cell, rule = ?decision.rule, "agent move");
        self.play(side, decision.cell)
    }

    /// Place `side`'s mark and pass the turn.
    ///
    /// Returns the round outcome once the move ends the round; the score is
    /// credited at that point.
    pub fn play(&mut self, side: Side, cell: CellId) -> Result<Option<GridOutcome>, GridError> {
        if self.board.is_terminal() {
            return Err(GridError::RoundOver);
        }
        if side != self.turn {
            return Err(GridError::NotYourTurn);
        }
        self.board.occupy(cell, self.mark_of(side))?;
        self.turn = side.other();

        let outcome = self.board.outcome();
        if let Some(result) = outcome {
            let winner = match result {
                GridOutcome::Win(mark) => Some(self.side_of(mark)),
                GridOutcome::Tie => None,
            };
            self.scores.credit(winner);
            self.rounds_played += 1;
            info!(round = self.rounds_played, ?winner, scores = ?self.scores, "grid round finished");
        }
        Ok(outcome)
    }

    /// The side that reached `GRAND_WINNER_SCORE`, if any.
    #[must_use]
    pub fn match_winner(&self) -> Option<Side> {
        [Side::Human, Side::Opponent]
            .into_iter()
            .find(|&side| self.scores.score(side) >= GRAND_WINNER_SCORE)
    }

    /// Begin the next round on a fresh board, with the original first mover.
    pub fn next_round(&mut self) {
        self.board = GridBoard::new();
        self.turn = self.first_mover;
    }

    /// Clear the scores and start over ("play again").
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
        self.rounds_played = 0;
        self.next_round();
    }
}
