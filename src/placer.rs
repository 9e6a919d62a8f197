//! Randomized fleet placement under the no-overlap, no-touching rule.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Position};
use crate::config::{BOARD_SIZE, SHIPS, SHIP_PLACEMENT_ATTEMPTS, SHIP_SEARCH_RETRIES};
use crate::ship::{Direction, Ship, ShipType};

/// Places fleets on boards using an owned, injectable random generator.
///
/// Each ship is found by drawing a uniform origin and a uniform direction up
/// to `attempts` times; a run that leaves the grid, lands on a ship or
/// touches one is discarded. When a search comes up empty it is re-run up to
/// `retries` times before the ship is reported as `PlacementExhausted`.
pub struct FleetPlacer<R> {
    rng: R,
    attempts: usize,
    retries: usize,
}

impl<R: Rng> FleetPlacer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            attempts: SHIP_PLACEMENT_ATTEMPTS,
            retries: SHIP_SEARCH_RETRIES,
        }
    }

    /// Override the per-search candidate budget and the per-ship retry count.
    pub fn with_limits(mut self, attempts: usize, retries: usize) -> Self {
        self.attempts = attempts;
        self.retries = retries;
        self
    }

    /// Give the generator back, e.g. to seed something else from it.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Draw one uniformly random candidate run, which may be invalid.
    pub fn random_candidate(&mut self, length: usize) -> Result<Ship, BoardError> {
        let n = BOARD_SIZE as usize;
        let origin = Position::new(self.rng.random_range(0..n), self.rng.random_range(0..n))?;
        let direction = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
        Ship::new(origin, direction, length)
    }

    /// Single search: returns the first valid run for `length` on `board`.
    pub fn find_placement(&mut self, board: &Board, length: usize) -> Result<Ship, BoardError> {
        for _ in 0..self.attempts {
            let ship = match self.random_candidate(length) {
                Ok(ship) => ship,
                Err(BoardError::ShipOutOfBounds) => continue,
                Err(e) => return Err(e),
            };
            if board.can_place(&ship).is_ok() {
                return Ok(ship);
            }
        }
        Err(BoardError::PlacementExhausted { length })
    }

    /// Place one ship, re-running the search a bounded number of times.
    pub fn place_ship(&mut self, board: &mut Board, length: usize) -> Result<Ship, BoardError> {
        for retry in 0..=self.retries {
            match self.find_placement(board, length) {
                Ok(ship) => {
                    board.place(ship)?;
                    return Ok(ship);
                }
                Err(BoardError::PlacementExhausted { .. }) => {
                    debug!("no spot for length {} (retry {})", length, retry);
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::PlacementExhausted { length })
    }

    /// Place every ship of `fleet`, in order, onto `board`.
    pub fn place_fleet(&mut self, board: &mut Board, fleet: &[ShipType]) -> Result<(), BoardError> {
        for def in fleet {
            let ship = self.place_ship(board, def.length())?;
            debug!("placed {} at {:?}", def.name(), ship);
        }
        Ok(())
    }

    /// Fresh board carrying the standard fleet.
    pub fn generate(&mut self) -> Result<Board, BoardError> {
        let mut board = Board::new();
        self.place_fleet(&mut board, &SHIPS)?;
        Ok(board)
    }
}
