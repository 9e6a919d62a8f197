#![cfg(feature = "std")]

//! Text coordinates such as `A5` or `5A`: column letter plus 1-based row.

use crate::{common::Position, config::BOARD_SIZE};

/// Parse a coordinate. The first letter names the column and every digit,
/// concatenated, forms the row; `,` counts as whitespace. Returns `None`
/// when either part is missing or falls outside the board.
pub fn parse_coord(input: &str) -> Option<Position> {
    let text = input.trim().replace(',', " ").to_ascii_uppercase();
    let letter = text.chars().find(|ch| ch.is_ascii_alphabetic())?;
    let digits: String = text.chars().filter(|ch| ch.is_ascii_digit()).collect();
    let row: usize = digits.parse().ok()?;
    if row == 0 || row > BOARD_SIZE as usize {
        return None;
    }
    let col = (letter as u8 - b'A') as usize;
    Position::new(row - 1, col).ok()
}

/// Inverse of [`parse_coord`]: `(4, 0)` becomes `A5`.
pub fn coord_to_string(pos: Position) -> String {
    let col = (b'A' + pos.col() as u8) as char;
    format!("{}{}", col, pos.row() + 1)
}
