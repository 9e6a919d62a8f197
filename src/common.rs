//! Common types for the game: positions, shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// A zero-based (row, col) coordinate that is always inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Checked constructor, rejecting anything outside `[0, BOARD_SIZE)`.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Position {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Step by a signed offset, returning `None` when it leaves the board.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Position> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Position::new(row, col).ok()
    }

    /// The in-bounds 8-neighbourhood (orthogonal and diagonal) of this cell.
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| !(dr == 0 && dc == 0))
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Every position on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        let n = BOARD_SIZE as usize;
        (0..n).flat_map(move |r| (0..n).map(move |c| Position { row: r as u8, col: c as u8 }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a shot that landed on a previously unfired cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// Shot struck a ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
}

/// Errors returned by board, placement and targeting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// The cell was already fired upon.
    AlreadyShot(Position),
    /// Ship run leaves the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship, diagonals included.
    ShipAdjacent,
    /// No valid spot was found for a ship of this length.
    PlacementExhausted { length: usize },
    /// Every cell has already been selected as a target.
    TargetsExhausted,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::AlreadyShot(pos) => write!(f, "Cell {} was already fired upon", pos),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAdjacent => write!(f, "Ship placement touches another ship"),
            BoardError::PlacementExhausted { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            BoardError::TargetsExhausted => write!(f, "No untargeted cells remain"),
        }
    }
}

impl core::error::Error for BoardError {}
