//! Ship definitions and straight-run placement geometry.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Position};
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Axis-aligned heading of a ship, measured from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Row and column step for one cell in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A straight run of cells on the board: origin, heading and length.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    origin: Position,
    direction: Direction,
    length: usize,
    mask: BB,
}

impl Ship {
    /// Lay out a ship of `length` cells from `origin` heading `direction`.
    /// Fails with `ShipOutOfBounds` if any cell would leave the grid.
    pub fn new(origin: Position, direction: Direction, length: usize) -> Result<Self, BoardError> {
        let (dr, dc) = direction.delta();
        let mut mask = BB::new();
        for i in 0..length as isize {
            let cell = origin
                .offset(dr * i, dc * i)
                .ok_or(BoardError::ShipOutOfBounds)?;
            mask.set(cell.row(), cell.col())?;
        }
        Ok(Ship {
            origin,
            direction,
            length,
            mask,
        })
    }

    /// Cells of the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (dr, dc) = self.direction.delta();
        // In bounds: checked in `new`.
        (0..self.length as isize).filter_map(move |i| self.origin.offset(dr * i, dc * i))
    }

    /// Whether `pos` is one of this ship's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.mask.get(pos.row(), pos.col()).unwrap_or(false)
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: {}, direction: {:?}, length: {} }}",
            self.origin, self.direction, self.length,
        )
    }
}
