//! Grid positions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Move;

/// A cell coordinate on a grid, `(row, col)` with the origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, growing downwards
    pub row: usize,
    /// Column index, growing to the right
    pub col: usize,
}

impl Position {
    /// Create a new position
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in direction `mv`, or `None` if it would leave a
    /// grid of `n_rows` × `n_cols`
    #[must_use]
    pub fn neighbor(self, mv: Move, n_rows: usize, n_cols: usize) -> Option<Self> {
        let (dr, dc) = mv.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < n_rows && col < n_cols).then_some(Self { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_neighbor_inside_grid() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.neighbor(Move::Up, 3, 3), Some(Position::new(0, 1)));
        assert_eq!(pos.neighbor(Move::Down, 3, 3), Some(Position::new(2, 1)));
        assert_eq!(pos.neighbor(Move::Left, 3, 3), Some(Position::new(1, 0)));
        assert_eq!(pos.neighbor(Move::Right, 3, 3), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_neighbor_off_grid() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.neighbor(Move::Up, 2, 2), None);
        assert_eq!(corner.neighbor(Move::Left, 2, 2), None);

        let far = Position::new(1, 1);
        assert_eq!(far.neighbor(Move::Down, 2, 2), None);
        assert_eq!(far.neighbor(Move::Right, 2, 2), None);
    }

    proptest! {
        #[test]
        fn neighbor_stays_in_bounds(
            rows in 1usize..20,
            cols in 1usize..20,
            r in 0usize..20,
            c in 0usize..20,
            code in 0usize..4,
        ) {
            let pos = Position::new(r % rows, c % cols);
            let mv = Move::ALL[code];
            if let Some(next) = pos.neighbor(mv, rows, cols) {
                prop_assert!(next.row < rows && next.col < cols);
                let distance = next.row.abs_diff(pos.row) + next.col.abs_diff(pos.col);
                prop_assert_eq!(distance, 1);
            }
        }
    }
}
