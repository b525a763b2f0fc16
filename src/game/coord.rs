pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning run.
pub const RUN_LENGTH: usize = 4;

/// A board position. Row 0 is the bottom of the board.
///
/// Ordering is by column first, then row. The vertical win check relies on
/// this: all pieces of one column are visited together, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub column: usize,
    pub row: usize,
}

impl Coordinate {
    pub const fn new(column: usize, row: usize) -> Self {
        Coordinate { column, row }
    }

    /// Whether this coordinate lies on the board.
    pub fn in_bounds(self) -> bool {
        self.column < COLS && self.row < ROWS
    }

    /// Step `n` times along `direction`. Returns `None` when the result would
    /// leave the board.
    pub fn step(self, direction: Direction, n: isize) -> Option<Coordinate> {
        let (dc, dr) = direction.delta();
        let column = self.column.checked_add_signed(dc * n)?;
        let row = self.row.checked_add_signed(dr * n)?;
        let next = Coordinate { column, row };
        next.in_bounds().then_some(next)
    }
}

/// The four lines a run can lie on. Each is walked in its positive
/// direction; the opposite direction is the same line walked backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Vertical,
    Horizontal,
    /// `/`: column and row both increase.
    Rising,
    /// `\`: column increases, row decreases.
    Falling,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::Rising,
        Direction::Falling,
    ];

    /// (column delta, row delta) of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::Rising => (1, 1),
            Direction::Falling => (1, -1),
        }
    }
}
