use std::fmt;

use super::player::Marker;

pub const ROWS: usize = 5;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Vetoed,
    Marker(Marker),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Vetoed => 'X',
            Cell::Marker(marker) => marker.symbol(),
        }
    }
}

/// Fixed 7x5 grid stored column by column. Row 0 is the top, row 4 the bottom;
/// columns are 0-based here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; ROWS]; COLS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 4 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[col][row]
    }

    fn top(&self, col: usize) -> Option<Cell> {
        self.cells.get(col).map(|column| column[0])
    }

    /// Whether the column can still take a piece (its top cell is empty).
    pub fn is_column_open(&self, col: usize) -> bool {
        self.top(col) == Some(Cell::Empty)
    }

    pub fn is_column_vetoed(&self, col: usize) -> bool {
        self.top(col) == Some(Cell::Vetoed)
    }

    /// Whether any column currently holds vetoed cells.
    pub fn contains_veto(&self) -> bool {
        (0..COLS).any(|col| self.is_column_vetoed(col))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, marker: Marker) -> Result<usize, DropError> {
        let column = self.cells.get_mut(col).ok_or(DropError::InvalidColumn)?;

        // Filled cells are contiguous from the bottom, so the landing row is
        // the last empty one before the first non-empty cell.
        let landing = column
            .iter()
            .take_while(|&&cell| cell == Cell::Empty)
            .count()
            .checked_sub(1)
            .ok_or(DropError::ColumnFull)?;

        column[landing] = marker.to_cell();
        Ok(landing)
    }

    /// Fill every empty cell of the column with the veto sentinel. Occupied
    /// cells are left alone. Returns how many cells were vetoed.
    pub fn apply_veto(&mut self, col: usize) -> usize {
        self.replace_in_column(col, Cell::Empty, Cell::Vetoed)
    }

    /// Turn every vetoed cell of the column back into an empty one. Returns how
    /// many cells were restored.
    pub fn clear_vetoes(&mut self, col: usize) -> usize {
        self.replace_in_column(col, Cell::Vetoed, Cell::Empty)
    }

    fn replace_in_column(&mut self, col: usize, from: Cell, to: Cell) -> usize {
        let Some(column) = self.cells.get_mut(col) else {
            return 0;
        };
        let mut replaced = 0;
        for cell in column.iter_mut().filter(|cell| **cell == from) {
            *cell = to;
            replaced += 1;
        }
        replaced
    }

    /// Columns not yet topped out with real markers. A vetoed column counts,
    /// since it reopens once the veto expires.
    pub fn available_column_count(&self) -> usize {
        (0..COLS)
            .filter(|&col| matches!(self.top(col), Some(Cell::Empty | Cell::Vetoed)))
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| matches!(self.top(col), Some(Cell::Marker(_))))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!("{}+", "+---".repeat(COLS));

        for row in 0..ROWS {
            writeln!(f, "{separator}")?;
            for col in 0..COLS {
                write!(f, "| {} ", self.get(row, col).symbol())?;
            }
            writeln!(f, "|")?;
        }

        writeln!(f, "{separator}")?;
        for col in 0..COLS {
            write!(f, "  {} ", col + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(symbol: char) -> Marker {
        Marker::new(symbol).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.available_column_count(), COLS);
        assert!(!board.contains_veto());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, marker('A')).unwrap();
        assert_eq!(row, 4); // Should land at bottom
        assert_eq!(board.get(4, 3), Cell::Marker(marker('A')));

        let row = board.drop_piece(3, marker('B')).unwrap();
        assert_eq!(row, 3); // Should land on top of first piece
        assert_eq!(board.get(3, 3), Cell::Marker(marker('B')));
    }

    #[test]
    fn test_drop_never_disturbs_other_columns() {
        let mut board = Board::new();
        board.drop_piece(0, marker('A')).unwrap();
        board.drop_piece(6, marker('B')).unwrap();
        let before = board;

        board.drop_piece(2, marker('A')).unwrap();

        for col in (0..COLS).filter(|&col| col != 2) {
            for row in 0..ROWS {
                assert_eq!(board.get(row, col), before.get(row, col));
            }
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, marker('A')).unwrap();
        }

        assert!(!board.is_column_open(0));
        assert_eq!(board.drop_piece(0, marker('B')), Err(DropError::ColumnFull));
        assert_eq!(board.available_column_count(), COLS - 1);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, marker('A')), Err(DropError::InvalidColumn));
        assert!(!board.is_column_open(7));
        assert!(!board.is_column_vetoed(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, marker('A')).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.available_column_count(), 0);
    }

    #[test]
    fn test_veto_fills_only_empty_cells() {
        let mut board = Board::new();
        board.drop_piece(2, marker('A')).unwrap();
        board.drop_piece(2, marker('B')).unwrap();

        assert_eq!(board.apply_veto(2), ROWS - 2);
        assert!(board.is_column_vetoed(2));
        assert!(!board.is_column_open(2));
        assert!(board.contains_veto());
        for row in 0..ROWS - 2 {
            assert_eq!(board.get(row, 2), Cell::Vetoed);
        }
        assert_eq!(board.get(3, 2), Cell::Marker(marker('B')));
        assert_eq!(board.get(4, 2), Cell::Marker(marker('A')));
    }

    #[test]
    fn test_clear_vetoes_restores_exactly_the_vetoed_cells() {
        let mut board = Board::new();
        board.drop_piece(4, marker('A')).unwrap();
        let before = board;

        board.apply_veto(4);
        assert_eq!(board.clear_vetoes(4), ROWS - 1);

        assert_eq!(board, before);
        assert!(board.is_column_open(4));
    }

    #[test]
    fn test_vetoed_column_counts_as_available() {
        let mut board = Board::new();
        board.apply_veto(1);
        assert_eq!(board.available_column_count(), COLS);
        assert!(!board.is_full());
    }

    #[test]
    fn test_render_layout() {
        let mut board = Board::new();
        board.drop_piece(0, marker('A')).unwrap();
        board.apply_veto(6);

        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2 * ROWS + 2);
        assert_eq!(lines[0], "+---+---+---+---+---+---+---+");
        assert_eq!(lines[1], "| _ | _ | _ | _ | _ | _ | X |");
        assert_eq!(lines[9], "| A | _ | _ | _ | _ | _ | X |");
        assert_eq!(lines[11], "  1   2   3   4   5   6   7 ");
    }
}
