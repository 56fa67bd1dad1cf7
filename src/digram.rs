//! DigramTransform: the three Playfair substitution rules.
//!
//! A digram is transformed as a unit using the positions of its two
//! letters in the key square:
//!
//! 1. Same row: each letter moves one cell right (encrypt) or left
//!    (decrypt), wrapping around the row.
//! 2. Same column: each letter moves one cell down (encrypt) or up
//!    (decrypt), wrapping around the column.
//! 3. Rectangle: each letter takes the letter in its own row and the
//!    other letter's column. This rule is its own inverse.

use crate::error::{PlayfairError, Result};
use crate::grid::{Grid, GRID_SIZE};
use crate::position::Position;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Wrap-around step for the row and column rules.
    ///
    /// Decrypting steps by `GRID_SIZE - 1`, the additive inverse of one
    /// step modulo the grid size.
    fn step(self) -> usize {
        match self {
            Mode::Encrypt => 1,
            Mode::Decrypt => GRID_SIZE - 1,
        }
    }
}

/// An ordered pair of distinct normalized letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digram {
    first: char,
    second: char,
}

impl Digram {
    /// Creates a digram from two letters.
    ///
    /// # Errors
    /// Returns [`PlayfairError::RepeatedLetter`] if `first == second`.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::Digram;
    ///
    /// assert!(Digram::new('H', 'I').is_ok());
    /// assert!(Digram::new('L', 'L').is_err());
    /// ```
    pub fn new(first: char, second: char) -> Result<Self> {
        if first == second {
            return Err(PlayfairError::RepeatedLetter(first));
        }
        Ok(Digram { first, second })
    }

    /// Returns the first letter.
    pub fn first(&self) -> char {
        self.first
    }

    /// Returns the second letter.
    pub fn second(&self) -> char {
        self.second
    }

    /// Applies the Playfair rules to this digram.
    ///
    /// # Parameters
    /// - `grid`: The key square.
    /// - `mode`: Whether to encrypt or decrypt.
    ///
    /// # Returns
    /// The substituted digram. Substitution maps distinct letters to
    /// distinct letters, so the result upholds the digram invariant.
    ///
    /// # Errors
    /// Returns [`PlayfairError::LetterNotFound`] if either letter is not in
    /// the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::{Digram, Grid, Mode};
    ///
    /// let grid = Grid::build("MONARCHY").unwrap();
    /// let plain = Digram::new('S', 'T').unwrap();
    /// let cipher = plain.transform(&grid, Mode::Encrypt).unwrap();
    /// assert_eq!((cipher.first(), cipher.second()), ('T', 'L'));
    /// assert_eq!(cipher.transform(&grid, Mode::Decrypt).unwrap(), plain);
    /// ```
    pub fn transform(&self, grid: &Grid, mode: Mode) -> Result<Digram> {
        let index = grid.index();
        let a = index.locate(self.first)?;
        let b = index.locate(self.second)?;
        let step = mode.step();

        let (a, b) = if a.row == b.row {
            (a.shift_col(step), b.shift_col(step))
        } else if a.col == b.col {
            (a.shift_row(step), b.shift_row(step))
        } else {
            // Rectangle: swap columns
            (
                Position { row: a.row, col: b.col },
                Position { row: b.row, col: a.col },
            )
        };

        Ok(Digram {
            first: grid.letter_at(a),
            second: grid.letter_at(b),
        })
    }
}
