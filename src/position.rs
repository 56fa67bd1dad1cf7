//! PositionIndex: letter to (row, col) lookup for a key square.
//!
//! The index is computed once when a [`Grid`](crate::Grid) is built, so the
//! two lookups each digram needs are a table read instead of a grid scan.

use crate::error::{PlayfairError, Result};
use crate::grid::GRID_SIZE;

/// Number of slots in the index, one per letter A-Z.
const ALPHABET_LEN: usize = 26;

/// Location of a letter in a 5×5 grid.
///
/// Both coordinates are always in `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl Position {
    /// Creates a position, or `None` if either coordinate is off the grid.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Position { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns this position moved `step` cells along its row, wrapping.
    pub(crate) fn shift_col(self, step: usize) -> Self {
        Position {
            row: self.row,
            col: (self.col + step) % GRID_SIZE,
        }
    }

    /// Returns this position moved `step` cells down its column, wrapping.
    pub(crate) fn shift_row(self, step: usize) -> Self {
        Position {
            row: (self.row + step) % GRID_SIZE,
            col: self.col,
        }
    }
}

/// Precomputed letter → [`Position`] table for one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionIndex {
    slots: [Option<Position>; ALPHABET_LEN],
}

impl PositionIndex {
    /// Builds the index from the cells of a grid in row-major order.
    ///
    /// # Parameters
    /// - `cells`: The 5×5 letter layout. Letters are expected to be
    ///   uppercase ASCII; anything else is not indexed.
    pub(crate) fn from_cells(cells: &[[char; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut slots = [None; ALPHABET_LEN];
        for (row, line) in cells.iter().enumerate() {
            for (col, &letter) in line.iter().enumerate() {
                if let Some(slot) = Self::slot(letter) {
                    slots[slot] = Some(Position { row, col });
                }
            }
        }
        PositionIndex { slots }
    }

    /// Returns the position of `letter`.
    ///
    /// # Errors
    /// Returns [`PlayfairError::LetterNotFound`] if the letter is not in the
    /// grid. Callers are expected to hand over normalized letters only
    /// (uppercase, `J` folded into `I`), so this signals a bug upstream.
    pub fn locate(&self, letter: char) -> Result<Position> {
        Self::slot(letter)
            .and_then(|slot| self.slots[slot])
            .ok_or(PlayfairError::LetterNotFound(letter))
    }

    fn slot(letter: char) -> Option<usize> {
        if letter.is_ascii_uppercase() {
            Some((letter as u8 - b'A') as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_locate_monarchy_corners() {
        let grid = Grid::build("MONARCHY").unwrap();
        let index = grid.index();
        assert_eq!(index.locate('M').unwrap(), Position { row: 0, col: 0 });
        assert_eq!(index.locate('R').unwrap(), Position { row: 0, col: 4 });
        assert_eq!(index.locate('U').unwrap(), Position { row: 4, col: 0 });
        assert_eq!(index.locate('Z').unwrap(), Position { row: 4, col: 4 });
        assert_eq!(index.locate('I').unwrap(), Position { row: 2, col: 3 });
    }

    #[test]
    fn test_locate_rejects_unfolded_j() {
        let grid = Grid::build("MONARCHY").unwrap();
        assert_eq!(
            grid.index().locate('J'),
            Err(PlayfairError::LetterNotFound('J'))
        );
    }

    #[test]
    fn test_locate_rejects_non_letters() {
        let grid = Grid::build("MONARCHY").unwrap();
        for c in ['a', '1', ' ', 'é'] {
            assert_eq!(grid.index().locate(c), Err(PlayfairError::LetterNotFound(c)));
        }
    }

    #[test]
    fn test_index_agrees_with_cells() {
        let grid = Grid::build("PLAYFAIR EXAMPLE").unwrap();
        for (row, line) in grid.rows().iter().enumerate() {
            for (col, &letter) in line.iter().enumerate() {
                assert_eq!(grid.index().locate(letter).unwrap(), Position { row, col });
            }
        }
    }

    #[test]
    fn test_shift_wraps() {
        let p = Position { row: 4, col: 4 };
        assert_eq!(p.shift_col(1), Position { row: 4, col: 0 });
        assert_eq!(p.shift_row(1), Position { row: 0, col: 4 });
        assert_eq!(Position { row: 0, col: 0 }.shift_col(4), Position { row: 0, col: 4 });
    }

    #[test]
    fn test_position_new_bounds() {
        assert!(Position::new(4, 4).is_some());
        assert!(Position::new(5, 0).is_none());
        assert!(Position::new(0, 5).is_none());
        assert!(Position::new(7, 0).is_none());
    }

    #[test]
    fn test_position_accessors() {
        let pos = Position::new(3, 1).unwrap();
        assert_eq!((pos.row(), pos.col()), (3, 1));
    }
}
