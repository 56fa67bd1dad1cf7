//! GridBuilder: derives the 5×5 Playfair key square from a secret key.
//!
//! The square holds the 25 letters A-Z without `J` (which is merged into
//! `I`). Distinct key letters come first in reading order, followed by the
//! rest of the alphabet in alphabetical order.

use std::fmt;

use log::debug;

use crate::error::{PlayfairError, Result};
use crate::position::{Position, PositionIndex};

/// Side length of the key square.
pub(crate) const GRID_SIZE: usize = 5;

/// Number of cells in the key square.
pub(crate) const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The 25-letter Playfair alphabet (`J` is folded into `I`).
pub const ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Folds a raw character into the Playfair alphabet.
///
/// ASCII letters are uppercased and `J` becomes `I`. Everything else,
/// including non-ASCII letters, yields `None`.
pub(crate) fn fold_letter(c: char) -> Option<char> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    match c.to_ascii_uppercase() {
        'J' => Some('I'),
        upper => Some(upper),
    }
}

/// Immutable 5×5 key square.
///
/// Built once per key with [`Grid::build`] and afterwards only read, so a
/// single grid can be shared by any number of worker threads without
/// synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
    index: PositionIndex,
}

impl Grid {
    /// Builds the key square for `key`.
    ///
    /// Key letters are uppercased and `J` is folded into `I`; characters that
    /// are not ASCII letters are ignored.
    ///
    /// # Parameters
    /// - `key`: The secret key.
    ///
    /// # Errors
    /// Returns [`PlayfairError::InvalidKey`] if the key contains no letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::Grid;
    ///
    /// let grid = Grid::build("monarchy").unwrap();
    /// assert_eq!(grid.rows()[0], ['M', 'O', 'N', 'A', 'R']);
    /// assert_eq!(grid.rows()[4], ['U', 'V', 'W', 'X', 'Z']);
    /// ```
    ///
    /// ```
    /// use playfair::Grid;
    ///
    /// assert!(Grid::build("1234 !?").is_err());
    /// ```
    pub fn build(key: &str) -> Result<Self> {
        let mut seen = [false; 26];
        let mut order: Vec<char> = Vec::with_capacity(CELL_COUNT);

        // Distinct key letters in first-occurrence order
        for letter in key.chars().filter_map(fold_letter) {
            let slot = (letter as u8 - b'A') as usize;
            if !seen[slot] {
                seen[slot] = true;
                order.push(letter);
            }
        }
        if order.is_empty() {
            return Err(PlayfairError::InvalidKey);
        }
        let key_letters = order.len();

        // Remaining alphabet in its own order
        order.extend(
            ALPHABET
                .chars()
                .filter(|&c| !seen[(c as u8 - b'A') as usize]),
        );
        debug_assert_eq!(order.len(), CELL_COUNT);

        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        for (i, letter) in order.into_iter().enumerate() {
            cells[i / GRID_SIZE][i % GRID_SIZE] = letter;
        }

        debug!(
            "built key square from {} distinct key letters",
            key_letters
        );

        let index = PositionIndex::from_cells(&cells);
        Ok(Grid { cells, index })
    }

    /// Returns the letter layout, row by row.
    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Returns the letter stored at `pos`.
    pub fn letter_at(&self, pos: Position) -> char {
        self.cells[pos.row][pos.col]
    }

    /// Returns the precomputed position index for this grid.
    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    /// Returns the position of `letter` in this grid.
    ///
    /// # Errors
    /// Returns [`PlayfairError::LetterNotFound`] if `letter` is not a
    /// normalized grid letter.
    pub fn locate(&self, letter: char) -> Result<Position> {
        self.index.locate(letter)
    }
}

impl fmt::Display for Grid {
    /// Renders the square as five lines of space-separated letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, letter) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(grid: &Grid) -> String {
        grid.rows().iter().flatten().collect()
    }

    #[test]
    fn test_monarchy_layout() {
        let grid = Grid::build("MONARCHY").unwrap();
        assert_eq!(flat(&grid), "MONARCHYBDEFGIKLPQSTUVWXZ");
    }

    #[test]
    fn test_key_is_case_insensitive() {
        assert_eq!(Grid::build("monarchy"), Grid::build("MONARCHY"));
        assert_eq!(Grid::build("MoNaRcHy"), Grid::build("MONARCHY"));
    }

    #[test]
    fn test_key_duplicates_keep_first_occurrence() {
        let grid = Grid::build("PLAYFAIR EXAMPLE").unwrap();
        assert_eq!(flat(&grid), "PLAYFIREXMBCDGHKNOQSTUVWZ");
    }

    #[test]
    fn test_key_j_folds_into_i() {
        let grid = Grid::build("JAZZ").unwrap();
        assert_eq!(flat(&grid), "IAZBCDEFGHKLMNOPQRSTUVWXY");
        assert!(grid.locate('J').is_err());
    }

    #[test]
    fn test_key_ignores_non_letters() {
        assert_eq!(Grid::build("MON-ARCHY 42"), Grid::build("MONARCHY"));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(Grid::build(""), Err(PlayfairError::InvalidKey));
        assert_eq!(Grid::build("  123 "), Err(PlayfairError::InvalidKey));
    }

    #[test]
    fn test_grid_contains_each_letter_once() {
        for key in ["A", "MONARCHY", "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG"] {
            let grid = Grid::build(key).unwrap();
            let mut letters: Vec<char> = grid.rows().iter().flatten().copied().collect();
            letters.sort_unstable();
            let expected: Vec<char> = ALPHABET.chars().collect();
            assert_eq!(letters, expected, "Grid for key {:?} is not a permutation", key);
        }
    }

    #[test]
    fn test_letter_at_matches_locate() {
        let grid = Grid::build("KEYWORD").unwrap();
        for letter in ALPHABET.chars() {
            let pos = grid.locate(letter).unwrap();
            assert_eq!(grid.letter_at(pos), letter);
        }
    }

    #[test]
    fn test_display() {
        let grid = Grid::build("MONARCHY").unwrap();
        assert_eq!(
            grid.to_string(),
            "M O N A R\nC H Y B D\nE F G I K\nL P Q S T\nU V W X Z"
        );
    }

    #[test]
    fn test_fold_letter() {
        assert_eq!(fold_letter('a'), Some('A'));
        assert_eq!(fold_letter('j'), Some('I'));
        assert_eq!(fold_letter('J'), Some('I'));
        assert_eq!(fold_letter('5'), None);
        assert_eq!(fold_letter('ß'), None);
    }
}
