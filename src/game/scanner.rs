//! Run-length scanning through a freshly placed piece.
//!
//! Every scan walks the whole board line through the anchor cell, not just
//! outward from it, and keeps the longest run of the anchor's marker seen.

use super::board::{Board, Cell, COLS, ROWS};

/// Run length that wins the game. A drop wins only when its longest run is
/// exactly this long, so closing a gap into a run of five does not count.
pub const WIN_LENGTH: usize = 4;

/// Longest run of the marker at `(row, col)` along the vertical, horizontal
/// and both diagonal lines through that cell. Returns 0 when the cell holds
/// no marker.
pub fn longest_run(board: &Board, row: usize, col: usize) -> usize {
    let target = board.get(row, col);
    if !matches!(target, Cell::Marker(_)) {
        return 0;
    }

    vertical_run(board, col, target)
        .max(horizontal_run(board, row, target))
        .max(falling_diagonal_run(board, row, col, target))
        .max(rising_diagonal_run(board, row, col, target))
}

/// Whether the piece at `(row, col)` completes a line of exactly
/// [`WIN_LENGTH`].
pub fn is_winning_cell(board: &Board, row: usize, col: usize) -> bool {
    longest_run(board, row, col) == WIN_LENGTH
}

/// Top-left end of the `\` diagonal through `(row, col)`.
pub fn falling_diagonal_origin(row: usize, col: usize) -> (usize, usize) {
    debug_assert!(row < ROWS && col < COLS);
    let shift = row.min(col);
    (row - shift, col - shift)
}

/// Bottom-left end of the `/` diagonal through `(row, col)`.
pub fn rising_diagonal_origin(row: usize, col: usize) -> (usize, usize) {
    debug_assert!(row < ROWS && col < COLS);
    let shift = (ROWS - 1 - row).min(col);
    (row + shift, col - shift)
}

fn max_run(cells: impl Iterator<Item = Cell>, target: Cell) -> usize {
    let mut run = 0;
    let mut best = 0;
    for cell in cells {
        run = if cell == target { run + 1 } else { 0 };
        best = best.max(run);
    }
    best
}

fn vertical_run(board: &Board, col: usize, target: Cell) -> usize {
    max_run((0..ROWS).map(|row| board.get(row, col)), target)
}

fn horizontal_run(board: &Board, row: usize, target: Cell) -> usize {
    max_run((0..COLS).map(|col| board.get(row, col)), target)
}

fn falling_diagonal_run(board: &Board, row: usize, col: usize, target: Cell) -> usize {
    let (start_row, start_col) = falling_diagonal_origin(row, col);
    let cells = (start_row..ROWS)
        .zip(start_col..COLS)
        .map(|(r, c)| board.get(r, c));
    max_run(cells, target)
}

fn rising_diagonal_run(board: &Board, row: usize, col: usize, target: Cell) -> usize {
    let (start_row, start_col) = rising_diagonal_origin(row, col);
    let cells = (0..=start_row)
        .rev()
        .zip(start_col..COLS)
        .map(|(r, c)| board.get(r, c));
    max_run(cells, target)
}
