//! Game board state: one owned grid of cells plus the ships placed on it.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Position};
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const N: usize = BOARD_SIZE as usize;

/// Grid of cells as handed to rendering code.
pub type Grid = [[Cell; N]; N];

/// State of a single cell. Only `Water → WaterHit` and `Ship → ShipHit`
/// are legal transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Cell {
    #[default]
    Water,
    Ship,
    WaterHit,
    ShipHit,
}

impl Cell {
    /// Returns `true` once the cell has been fired upon.
    pub fn is_fired(self) -> bool {
        matches!(self, Cell::WaterHit | Cell::ShipHit)
    }

    /// State after being fired upon, or `None` if already fired.
    pub fn struck(self) -> Option<Cell> {
        match self {
            Cell::Water => Some(Cell::WaterHit),
            Cell::Ship => Some(Cell::ShipHit),
            Cell::WaterHit | Cell::ShipHit => None,
        }
    }

    /// How the cell appears under `visibility`.
    pub fn seen(self, visibility: Visibility) -> Cell {
        match (self, visibility) {
            (Cell::Ship, Visibility::Concealed) => Cell::Water,
            (cell, _) => cell,
        }
    }
}

/// Which read view of a board to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Owner's view: un-hit ship cells are shown.
    Revealed,
    /// Opponent's view: un-hit ship cells look like water.
    Concealed,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an all-water board with no ships.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Water; N]; N],
            ships: Vec::new(),
        }
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Overwrite a cell. Transition legality is the caller's concern.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Bounds-checked lookup by raw indices.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Position::new(row, col).map(|pos| self.get(pos))
    }

    /// Returns `true` while any cell is still an un-hit `Ship`.
    pub fn has_ships_remaining(&self) -> bool {
        self.cells.iter().flatten().any(|&c| c == Cell::Ship)
    }

    /// Number of un-hit ship cells.
    pub fn ships_remaining(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == Cell::Ship).count()
    }

    /// Ships placed on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Mask of every cell holding a ship, hit or not.
    pub fn ship_mask(&self) -> BB {
        self.mask_where(|c| matches!(c, Cell::Ship | Cell::ShipHit))
    }

    /// Mask of every cell already fired upon.
    pub fn fired_mask(&self) -> BB {
        self.mask_where(Cell::is_fired)
    }

    fn mask_where(&self, pred: impl Fn(Cell) -> bool) -> BB {
        BB::from_fn(|r, c| pred(self.cells[r][c]))
    }

    /// Check that `ship` lands on water only and does not touch any
    /// existing ship, diagonals included.
    pub fn can_place(&self, ship: &Ship) -> Result<(), BoardError> {
        if ship.cells().any(|pos| self.get(pos) != Cell::Water) {
            return Err(BoardError::ShipOverlaps);
        }
        let occupied = self.mask_where(|c| c == Cell::Ship);
        if !(occupied.dilate() & ship.mask()).is_empty() {
            return Err(BoardError::ShipAdjacent);
        }
        Ok(())
    }

    /// Validate and record a ship, marking its cells `Ship`.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.can_place(&ship)?;
        for pos in ship.cells() {
            self.set(pos, Cell::Ship);
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Copy of the grid as seen under `visibility`.
    pub fn view(&self, visibility: Visibility) -> Grid {
        let mut grid = self.cells;
        for cell in grid.iter_mut().flatten() {
            *cell = cell.seen(visibility);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ ships: {:?}", self.ships)?;
        for row in self.cells.iter() {
            write!(f, " ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Water => '.',
                    Cell::Ship => 'S',
                    Cell::WaterHit => 'o',
                    Cell::ShipHit => 'X',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
