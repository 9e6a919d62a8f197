//! Commonly used types and utilities for ease of import.

pub use crate::{
    fire, Board, BoardError, Cell, Direction, FleetPlacer, Game, GameError, OpponentAi, Phase,
    Position, Ship, ShotOutcome, Side, Turn, Visibility,
};

#[cfg(feature = "std")]
pub use crate::{coord_to_string, init_logging, parse_coord, render_board, render_side_by_side};
