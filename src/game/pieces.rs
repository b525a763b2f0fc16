use std::collections::BTreeSet;

use super::coord::{Coordinate, Direction, RUN_LENGTH};

/// Every coordinate a single player has dropped a piece on.
///
/// Iteration follows the [`Coordinate`] ordering (column, then row). Only
/// one player's pieces are ever in a set, so a run found here is always a
/// run of that player's own pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceSet {
    pieces: BTreeSet<Coordinate>,
}

impl PieceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a piece. Returns `false` if the coordinate was already present.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        self.pieces.insert(coord)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.pieces.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.pieces.iter().copied()
    }

    /// Scan the whole set for a run of four in any direction.
    pub fn has_won(&self) -> bool {
        self.has_vertical_run()
            || self.has_run_in(Direction::Horizontal)
            || self.has_run_in(Direction::Rising)
            || self.has_run_in(Direction::Falling)
    }

    /// Check only the four lines through `coord`.
    ///
    /// Gives the same answer as [`has_won`](Self::has_won) when `coord` is the
    /// most recently inserted piece and the set had no run before it.
    pub fn has_run_through(&self, coord: Coordinate) -> bool {
        if !self.contains(coord) {
            return false;
        }

        Direction::ALL.into_iter().any(|direction| {
            let forward = self.count_along(coord, direction, 1);
            let backward = self.count_along(coord, direction, -1);
            1 + forward + backward >= RUN_LENGTH
        })
    }

    /// The first run of four found by a full scan, lowest coordinate first.
    pub fn winning_run(&self) -> Option<[Coordinate; RUN_LENGTH]> {
        Direction::ALL.into_iter().find_map(|direction| {
            self.iter()
                .find(|&start| self.is_run_start(start, direction))
                .map(|start| {
                    let mut run = [start; RUN_LENGTH];
                    for (k, slot) in run.iter_mut().enumerate().skip(1) {
                        // is_run_start already proved every step is on the board
                        *slot = start.step(direction, k as isize).unwrap_or(start);
                    }
                    run
                })
        })
    }

    /// Walk the set in order keeping a streak of pieces stacked directly on
    /// top of each other. Relies on rows within a column being visited in
    /// increasing order.
    fn has_vertical_run(&self) -> bool {
        let mut streak = 0;
        let mut previous: Option<Coordinate> = None;

        for coord in self.iter() {
            streak = match previous {
                Some(p) if p.column == coord.column && p.row + 1 == coord.row => streak + 1,
                _ => 1,
            };
            if streak >= RUN_LENGTH {
                return true;
            }
            previous = Some(coord);
        }

        false
    }

    fn has_run_in(&self, direction: Direction) -> bool {
        self.iter().any(|start| self.is_run_start(start, direction))
    }

    /// Whether the three pieces after `start` along `direction` are all
    /// present. Stops at the first missing one.
    fn is_run_start(&self, start: Coordinate, direction: Direction) -> bool {
        (1..RUN_LENGTH as isize).all(|k| {
            start
                .step(direction, k)
                .is_some_and(|next| self.contains(next))
        })
    }

    fn count_along(&self, from: Coordinate, direction: Direction, sign: isize) -> usize {
        (1..RUN_LENGTH as isize)
            .map_while(|k| from.step(direction, sign * k).filter(|&c| self.contains(c)))
            .count()
    }
}

impl FromIterator<Coordinate> for PieceSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        PieceSet {
            pieces: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(coords: &[(usize, usize)]) -> PieceSet {
        coords
            .iter()
            .map(|&(column, row)| Coordinate::new(column, row))
            .collect()
    }

    #[test]
    fn test_empty_set_has_not_won() {
        let pieces = PieceSet::new();
        assert!(!pieces.has_won());
        assert_eq!(pieces.winning_run(), None);
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut pieces = PieceSet::new();
        assert!(pieces.insert(Coordinate::new(2, 0)));
        assert!(!pieces.insert(Coordinate::new(2, 0)));
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn test_vertical_win() {
        let pieces = set(&[(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert!(pieces.has_won());
        assert!(pieces.has_run_through(Coordinate::new(2, 3)));
        assert_eq!(
            pieces.winning_run(),
            Some([
                Coordinate::new(2, 0),
                Coordinate::new(2, 1),
                Coordinate::new(2, 2),
                Coordinate::new(2, 3),
            ])
        );
    }

    #[test]
    fn test_vertical_with_gap_is_not_a_win() {
        // Opponent pieces sit at rows 1 and 4
        let pieces = set(&[(4, 0), (4, 2), (4, 3), (4, 5)]);
        assert!(!pieces.has_won());
        assert!(!pieces.has_run_through(Coordinate::new(4, 5)));
    }

    #[test]
    fn test_vertical_streak_resets_between_columns() {
        let pieces = set(&[(0, 4), (0, 5), (1, 0), (1, 1)]);
        assert!(!pieces.has_won());
    }

    #[test]
    fn test_vertical_run_higher_in_column() {
        let pieces = set(&[(5, 0), (5, 2), (5, 3), (5, 4), (5, 5)]);
        assert!(pieces.has_won());
    }

    #[test]
    fn test_horizontal_win() {
        let pieces = set(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert!(pieces.has_won());
        assert!(pieces.has_run_through(Coordinate::new(1, 0)));
    }

    #[test]
    fn test_horizontal_with_gap_is_not_a_win() {
        let pieces = set(&[(0, 0), (1, 0), (2, 0), (4, 0)]);
        assert!(!pieces.has_won());
        assert!(!pieces.has_run_through(Coordinate::new(4, 0)));
    }

    #[test]
    fn test_rising_diagonal_win() {
        let pieces = set(&[(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert!(pieces.has_won());
        assert!(pieces.has_run_through(Coordinate::new(2, 2)));
    }

    #[test]
    fn test_falling_diagonal_win() {
        let pieces = set(&[(3, 3), (4, 2), (5, 1), (6, 0)]);
        assert!(pieces.has_won());
        assert!(pieces.has_run_through(Coordinate::new(6, 0)));
        assert_eq!(
            pieces.winning_run().map(|run| run[0]),
            Some(Coordinate::new(3, 3))
        );
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let pieces = set(&[(0, 0), (1, 1), (2, 2), (4, 4)]);
        assert!(!pieces.has_won());
    }

    #[test]
    fn test_run_through_requires_member() {
        let pieces = set(&[(0, 0), (1, 0), (2, 0)]);
        assert!(!pieces.has_run_through(Coordinate::new(3, 0)));
    }

    #[test]
    fn test_iteration_follows_coordinate_order() {
        let pieces = set(&[(3, 1), (0, 2), (3, 0), (0, 0)]);
        let order: Vec<Coordinate> = pieces.iter().collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 2),
                Coordinate::new(3, 0),
                Coordinate::new(3, 1),
            ]
        );
    }
}
