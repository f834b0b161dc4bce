//! The initial clue matrix.

use std::str::FromStr;

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// The original given values of a puzzle: a 9x9 matrix of optional digits.
///
/// Givens are used to build the initial board and, afterwards, only to
/// distinguish cells fixed by the user from cells fixed by deduction. The
/// deduction engine itself never reads them.
///
/// # Examples
///
/// Parsing the usual text format (digits for clues; `.`, `_` or `0` for
/// empty cells; whitespace ignored):
///
/// ```
/// use lucidoku_core::{Digit, Givens, Position};
///
/// let givens: Givens = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(givens.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(givens.get(Position::new(2, 0)), None);
/// # Ok::<(), lucidoku_core::ParseGivensError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Givens {
    values: [[Option<Digit>; 9]; 9],
}

impl Givens {
    /// Creates a matrix with no given values.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            values: [[None; 9]; 9],
        }
    }

    /// Creates a matrix from raw values, with `0` marking an empty cell.
    ///
    /// The outer array is indexed by row (`y`), the inner by column (`x`).
    ///
    /// # Panics
    ///
    /// Panics if any entry is greater than 9.
    #[must_use]
    pub fn from_matrix(matrix: [[u8; 9]; 9]) -> Self {
        let values = matrix.map(|row| {
            row.map(|value| {
                if value == 0 {
                    None
                } else {
                    Some(Digit::from_value(value))
                }
            })
        });
        Self { values }
    }

    /// Returns the given value at `pos`, if any.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.values[pos.y() as usize][pos.x() as usize]
    }

    /// Sets or clears the given value at `pos`.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.values[pos.y() as usize][pos.x() as usize] = value;
    }
}

/// Error parsing a [`Givens`] matrix from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGivensError {
    /// The text did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// A character was neither a digit, an empty-cell marker, nor
    /// whitespace.
    #[display("invalid cell character: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for Givens {
    type Err = ParseGivensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut givens = Self::empty();
        let mut index = 0_usize;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let value = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Some(Digit::from_value(c as u8 - b'0')),
                _ => return Err(ParseGivensError::InvalidCharacter(c)),
            };
            if index < 81 {
                givens.values[index / 9][index % 9] = value;
            }
            index += 1;
        }
        if index != 81 {
            return Err(ParseGivensError::WrongLength(index));
        }
        Ok(givens)
    }
}
