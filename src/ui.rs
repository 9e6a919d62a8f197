#![cfg(feature = "std")]

use crate::{
    board::{Board, Cell, Visibility},
    config::BOARD_SIZE,
};

/// Glyph for a cell as it should appear under `visibility`.
pub fn cell_glyph(cell: Cell, visibility: Visibility) -> char {
    match cell.seen(visibility) {
        Cell::Water => '·',
        Cell::Ship => '■',
        Cell::WaterHit => 'o',
        Cell::ShipHit => 'X',
    }
}

fn column_header() -> String {
    let letters: Vec<String> = (0..BOARD_SIZE)
        .map(|c| ((b'A' + c) as char).to_string())
        .collect();
    format!("   {}", letters.join(" "))
}

/// Header plus one line per row, row numbers starting at 1.
pub fn render_board(board: &Board, visibility: Visibility) -> Vec<String> {
    let grid = board.view(visibility);
    let mut lines = vec![column_header()];
    for (r, row) in grid.iter().enumerate() {
        let glyphs: Vec<String> = row
            .iter()
            .map(|&cell| cell_glyph(cell, Visibility::Revealed).to_string())
            .collect();
        lines.push(format!("{:>2} {}", r + 1, glyphs.join(" ")));
    }
    lines
}

/// Two titled boards next to each other: `left` fully revealed, `right`
/// shown under `right_visibility`.
pub fn render_side_by_side(
    left: &Board,
    right: &Board,
    left_title: &str,
    right_title: &str,
    right_visibility: Visibility,
) -> String {
    let mut left_lines = vec![left_title.to_string()];
    left_lines.extend(render_board(left, Visibility::Revealed));
    let mut right_lines = vec![right_title.to_string()];
    right_lines.extend(render_board(right, right_visibility));

    let width = left_lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;
    left_lines
        .iter()
        .zip(right_lines.iter())
        .map(|(l, r)| format!("{:<width$}{}", l, r, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
