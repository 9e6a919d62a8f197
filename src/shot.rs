use log::debug;

use crate::board::{Board, Cell};
use crate::common::{BoardError, Position, ShotOutcome};

/// Fire at `pos`, flipping exactly one cell on success.
///
/// Cells already fired upon yield `AlreadyShot` and leave the board as it was.
pub fn fire(board: &mut Board, pos: Position) -> Result<ShotOutcome, BoardError> {
    let cell = board.get(pos);
    let struck = cell.struck().ok_or(BoardError::AlreadyShot(pos))?;
    board.set(pos, struck);
    let outcome = if struck == Cell::ShipHit {
        ShotOutcome::Hit
    } else {
        ShotOutcome::Miss
    };
    debug!("shot at {} -> {:?}", pos, outcome);
    Ok(outcome)
}
