//! Scripted opponent targeting: uniform random over cells not yet chosen.

use log::debug;
use rand::Rng;

use crate::{
    bitboard::BitBoard,
    common::{BoardError, Position},
    config::BOARD_SIZE,
};

/// Bitboard type alias for convenience.
type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Picks shot coordinates, never repeating one.
pub struct OpponentAi<R> {
    rng: R,
    chosen: BB,
}

impl<R: Rng> OpponentAi<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            chosen: BB::new(),
        }
    }

    /// Cells this instance may still return.
    pub fn remaining(&self) -> usize {
        (!self.chosen).count_ones()
    }

    /// Cells already returned.
    pub fn chosen(&self) -> BB {
        self.chosen
    }

    /// Uniformly random cell from those never returned before.
    pub fn select_target(&mut self) -> Result<Position, BoardError> {
        let open = !self.chosen;
        let count = open.count_ones();
        if count == 0 {
            return Err(BoardError::TargetsExhausted);
        }
        let pick = self.rng.random_range(0..count);
        let (row, col) = open
            .iter_set_bits()
            .nth(pick)
            .ok_or(BoardError::TargetsExhausted)?;
        self.chosen.set(row, col)?;
        let pos = Position::new(row, col)?;
        debug!("opponent targets {} ({} left)", pos, count - 1);
        Ok(pos)
    }
}
