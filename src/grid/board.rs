//! The 3×3 board: cells, marks, the fixed win lines and line scanning.
//!
//! Cells are numbered 1-9 left to right, top to bottom:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A participant's symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark held by the other participant.
    #[must_use]
    pub const fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Parses `"X"` or `"O"`, ignoring case and surrounding whitespace.
impl FromStr for Mark {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(GridError::InvalidMark(other.to_string())),
        }
    }
}

/// Identity of a cell, always in 1..=9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellId(u8);

impl CellId {
    /// The center cell.
    pub const CENTER: CellId = CellId(5);

    /// Create a cell id, rejecting anything outside 1..=9.
    pub fn new(id: u8) -> Result<Self, GridError> {
        if (1..=CELL_COUNT as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(GridError::InvalidCell(id))
        }
    }

    /// Get the raw id (1-9).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate over all nine cell ids in ascending order.
    pub fn all() -> impl Iterator<Item = CellId> {
        (1..=CELL_COUNT as u8).map(CellId)
    }

    const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for CellId {
    type Error = GridError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        CellId::new(id)
    }
}

impl From<CellId> for u8 {
    fn from(cell: CellId) -> u8 {
        cell.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three cells that win when held by one mark.
pub type Line = [CellId; 3];

/// The eight win lines in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    [CellId(1), CellId(2), CellId(3)],
    [CellId(4), CellId(5), CellId(6)],
    [CellId(7), CellId(8), CellId(9)],
    [CellId(1), CellId(4), CellId(7)],
    [CellId(2), CellId(5), CellId(8)],
    [CellId(3), CellId(6), CellId(9)],
    [CellId(1), CellId(5), CellId(9)],
    [CellId(3), CellId(5), CellId(7)],
];

/// A single cell and its current mark (`None` = empty).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub mark: Option<Mark>,
}

impl Cell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }
}

/// Terminal result of one grid round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridOutcome {
    /// A line was completed by this mark.
    Win(Mark),
    /// The board filled with no completed line.
    Tie,
}

/// The board. Always holds exactly nine cells, each id exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct GridBoard {
    cells: [Cell; CELL_COUNT],
}

/// Unchecked wire form of `GridBoard`.
#[derive(Deserialize)]
struct RawBoard {
    cells: [Cell; CELL_COUNT],
}

impl TryFrom<RawBoard> for GridBoard {
    type Error = GridError;

    /// Slot `i` must hold cell `i + 1`.
    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        for (slot, cell) in raw.cells.iter().enumerate() {
            if cell.id.index() != slot {
                return Err(GridError::MisplacedCell { slot, found: cell.id });
            }
        }
        Ok(Self { cells: raw.cells })
    }
}

impl GridBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [Cell { id: CellId(1), mark: None }; CELL_COUNT];
        for id in CellId::all() {
            cells[id.index()].id = id;
        }
        Self { cells }
    }

    /// Mark an empty cell.
    ///
    /// Fails without touching the board if the cell is already marked.
    pub fn occupy(&mut self, cell: CellId, mark: Mark) -> Result<(), GridError> {
        let slot = &mut self.cells[cell.index()];
        if slot.mark.is_some() {
            return Err(GridError::CellOccupied(cell));
        }
        slot.mark = Some(mark);
        Ok(())
    }

    /// Get the mark in a cell.
    #[must_use]
    pub fn mark_at(&self, cell: CellId) -> Option<Mark> {
        self.cells[cell.index()].mark
    }

    /// All nine cells in ascending id order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Empty cells in ascending id order.
    #[must_use]
    pub fn unmarked_cells(&self) -> Vec<CellId> {
        self.cells
            .iter()
            .filter(|c| c.is_empty())
            .map(|c| c.id)
            .collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// The mark holding the first completed line in scan order.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().and_then(|line| self.mark_at(line[0]))
    }

    /// The first completed line in scan order.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        LINES.iter().copied().find(|line| {
            let [a, b, c] = line.map(|id| self.mark_at(id));
            a.is_some() && a == b && b == c
        })
    }

    /// True if some line holds exactly two `mark` cells and one empty cell.
    #[must_use]
    pub fn has_two_in_a_row_for(&self, mark: Mark) -> bool {
        self.completing_cell_for(mark).is_some()
    }

    /// The empty cell of the first line (in scan order) where `mark`
    /// holds the other two cells.
    #[must_use]
    pub fn completing_cell_for(&self, mark: Mark) -> Option<CellId> {
        LINES.iter().find_map(|line| {
            let mut held = 0;
            let mut empty = None;
            for &id in line {
                match self.mark_at(id) {
                    Some(m) if m == mark => held += 1,
                    Some(_) => return None,
                    None => empty = Some(id),
                }
            }
            if held == 2 {
                empty
            } else {
                None
            }
        })
    }

    /// `Some` once a line is complete or the board is full.
    #[must_use]
    pub fn outcome(&self) -> Option<GridOutcome> {
        match self.winner() {
            Some(mark) => Some(GridOutcome::Win(mark)),
            None if self.is_full() => Some(GridOutcome::Tie),
            None => None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.mark = None;
        }
    }
}

impl Default for GridBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u8) -> CellId {
        CellId::new(n).unwrap()
    }

    fn board_with(marks: &[(u8, Mark)]) -> GridBoard {
        let mut board = GridBoard::new();
        for &(n, mark) in marks {
            board.occupy(id(n), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = GridBoard::new();
        assert_eq!(board.unmarked_cells(), CellId::all().collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), None);
        for (i, cell) in board.cells().iter().enumerate() {
            assert_eq!(cell.id.get() as usize, i + 1);
        }
    }

    #[test]
    fn test_cell_id_bounds() {
        assert_eq!(CellId::new(0), Err(GridError::InvalidCell(0)));
        assert_eq!(CellId::new(10), Err(GridError::InvalidCell(10)));
        assert_eq!(CellId::new(9).map(CellId::get), Ok(9));
        assert_eq!(CellId::CENTER.get(), 5);
    }

    #[test]
    fn test_mark_parse() {
        assert_eq!("X".parse::<Mark>(), Ok(Mark::X));
        assert_eq!(" o ".parse::<Mark>(), Ok(Mark::O));
        assert_eq!(
            "Z".parse::<Mark>(),
            Err(GridError::InvalidMark("Z".to_string()))
        );
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_occupy_rejects_marked_cell() {
        let mut board = board_with(&[(1, Mark::X)]);
        assert_eq!(board.occupy(id(1), Mark::O), Err(GridError::CellOccupied(id(1))));
        assert_eq!(board.mark_at(id(1)), Some(Mark::X));
    }

    #[test]
    fn test_unmarked_cells_ascending() {
        let board = board_with(&[(5, Mark::X), (1, Mark::O), (9, Mark::X)]);
        let ids: Vec<u8> = board.unmarked_cells().iter().map(|c| c.get()).collect();
        assert_eq!(ids, vec![2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_row_column_diagonal_wins() {
        let row = board_with(&[(4, Mark::O), (5, Mark::O), (6, Mark::O)]);
        assert_eq!(row.winner(), Some(Mark::O));

        let col = board_with(&[(3, Mark::X), (6, Mark::X), (9, Mark::X)]);
        assert_eq!(col.winner(), Some(Mark::X));
        assert_eq!(col.winning_line(), Some([id(3), id(6), id(9)]));

        let diag = board_with(&[(3, Mark::X), (5, Mark::X), (7, Mark::X)]);
        assert_eq!(diag.outcome(), Some(GridOutcome::Win(Mark::X)));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(1, Mark::X), (2, Mark::X), (3, Mark::O)]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        // X O X
        // X O O
        // O X X
        let board = board_with(&[
            (1, Mark::X),
            (2, Mark::O),
            (3, Mark::X),
            (4, Mark::X),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::X),
            (9, Mark::X),
        ]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Some(GridOutcome::Tie));
        assert!(board.unmarked_cells().is_empty());
    }

    #[test]
    fn test_winner_scan_order_tie_break() {
        // Unreachable in play: two completed lines. Rows are scanned first.
        let mut board = GridBoard::new();
        for n in [4, 5, 6] {
            board.cells[n - 1].mark = Some(Mark::X);
        }
        for n in [7, 8, 9] {
            board.cells[n - 1].mark = Some(Mark::O);
        }
        assert_eq!(board.winner(), Some(Mark::X));
        assert_eq!(board.winning_line(), Some(LINES[1]));
    }

    #[test]
    fn test_completing_cell() {
        let board = board_with(&[(1, Mark::X), (2, Mark::X)]);
        assert_eq!(board.completing_cell_for(Mark::X), Some(id(3)));
        assert!(board.has_two_in_a_row_for(Mark::X));
        assert_eq!(board.completing_cell_for(Mark::O), None);
        assert!(!board.has_two_in_a_row_for(Mark::O));
    }

    #[test]
    fn test_completing_cell_blocked_line() {
        let board = board_with(&[(1, Mark::X), (2, Mark::X), (3, Mark::O)]);
        assert_eq!(board.completing_cell_for(Mark::X), None);
    }

    #[test]
    fn test_completing_cell_first_line_wins() {
        let board = board_with(&[(5, Mark::O), (9, Mark::O), (4, Mark::O), (2, Mark::X)]);
        // Row 2 (4,5,6) is found before diagonal (1,5,9).
        assert_eq!(board.completing_cell_for(Mark::O), Some(id(6)));
    }

    #[test]
    fn test_reset() {
        let mut board = board_with(&[(1, Mark::X), (5, Mark::O)]);
        board.reset();
        assert_eq!(board, GridBoard::new());
    }

    #[test]
    fn test_serialization() {
        let board = board_with(&[(1, Mark::X), (5, Mark::O)]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: GridBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);

        assert!(serde_json::from_str::<CellId>("0").is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_cells() {
        let cells = vec![serde_json::json!({ "id": 5, "mark": null }); CELL_COUNT];
        let json = serde_json::json!({ "cells": cells }).to_string();
        let err = serde_json::from_str::<GridBoard>(&json).unwrap_err();
        assert!(err.to_string().contains("board slot 0 holds cell 5"));
    }

    #[test]
    fn test_deserialize_rejects_swapped_cells() {
        let board = GridBoard::new();
        let mut value = serde_json::to_value(&board).unwrap();
        value["cells"][0]["id"] = 2.into();
        value["cells"][1]["id"] = 1.into();
        assert!(serde_json::from_value::<GridBoard>(value).is_err());
    }
}
