use super::coord::{Coordinate, COLS, ROWS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Holds the display mark of the player who dropped the piece.
    Occupied(char),
}

impl Cell {
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    pub fn mark(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// The drop grid. Cells are only ever written at the current height of
/// their column, so a cell is occupied only if every cell below it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a position. Row 0 is the bottom.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row][coord.column]
    }

    /// Number of pieces in `col`, which is also the row the next piece lands on.
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLS`. Callers validate column input first.
    pub fn column_height(&self, col: usize) -> usize {
        assert!(col < COLS, "column {col} out of range 0..{COLS}");
        self.cells
            .iter()
            .filter(|row| row[col].is_occupied())
            .count()
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || self.column_height(col) == ROWS
    }

    /// Drop `mark` into `col` and return where it landed.
    ///
    /// On error the board is left untouched.
    pub fn place(&mut self, col: usize, mark: char) -> Result<Coordinate, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }

        let row = self.column_height(col);
        if row == ROWS {
            return Err(MoveError::ColumnFull { column: col });
        }

        self.cells[row][col] = Cell::Occupied(mark);
        Ok(Coordinate::new(col, row))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Total number of occupied cells.
    pub fn piece_count(&self) -> usize {
        (0..COLS).map(|col| self.column_height(col)).sum()
    }

    /// Rows from the bottom (row 0) up.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell; COLS]> + ExactSizeIterator + '_ {
        self.cells.iter()
    }

    /// Every cell with its coordinate, row-major from the bottom-left.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, &cell)| (Coordinate::new(column, row), cell))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for (_, cell) in board.cells() {
            assert_eq!(cell, Cell::Empty);
        }
        for col in 0..COLS {
            assert_eq!(board.column_height(col), 0);
        }
    }

    #[test]
    fn test_place_stacks_from_bottom() {
        let mut board = Board::new();

        let first = board.place(3, '@').unwrap();
        assert_eq!(first, Coordinate::new(3, 0));
        assert_eq!(board.get(first), Cell::Occupied('@'));

        let second = board.place(3, '$').unwrap();
        assert_eq!(second, Coordinate::new(3, 1));
        assert_eq!(board.get(second), Cell::Occupied('$'));
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.place(0, '@').unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(
            board.place(0, '$'),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
        assert_eq!(board.column_height(0), ROWS);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.place(COLS, '@'),
            Err(MoveError::InvalidColumn { column: COLS })
        );
        assert!(board.is_column_full(COLS));
        assert_eq!(board, Board::new());
    }

    #[test]
    #[should_panic]
    fn test_column_height_out_of_range_panics() {
        Board::new().column_height(COLS);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place(col, '@').unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.piece_count(), ROWS * COLS);
    }

    #[test]
    fn test_cells_are_row_major_from_bottom() {
        let mut board = Board::new();
        board.place(1, '@').unwrap();

        let coords: Vec<Coordinate> = board.cells().map(|(c, _)| c).take(COLS + 1).collect();
        assert_eq!(coords[0], Coordinate::new(0, 0));
        assert_eq!(coords[COLS - 1], Coordinate::new(COLS - 1, 0));
        assert_eq!(coords[COLS], Coordinate::new(0, 1));

        let bottom = board.rows().next().unwrap();
        assert_eq!(bottom[1].mark(), Some('@'));
        assert_eq!(board.rows().count(), ROWS);
    }
}
