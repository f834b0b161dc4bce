//! The copy-on-write board state.

use crate::{Action, Cell, ConstraintGroup, Givens, Position, default_constraint_groups};

/// A complete board: the 9x9 cell array, the constraint groups, and the
/// original given values.
///
/// A `GridState` never changes in place. [`apply`](Self::apply) returns a
/// new state and leaves the receiver untouched, so a previous state stays
/// valid for read-only observers while the next one is being examined.
///
/// The constraint-group list and the givens are constant after
/// construction. No operation validates Sudoku legality; coordinates out of
/// range are a contract violation and panic.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Action, Digit, GridState, Givens, Position};
///
/// let board = GridState::from_givens(Givens::empty());
/// let pos = Position::new(1, 2);
///
/// let next = board.apply(&Action::SetCell {
///     pos,
///     value: Digit::D4,
/// });
/// assert_eq!(next.cell(pos).value(), Some(Digit::D4));
/// assert!(board.cell(pos).is_floating());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cells: [[Cell; 9]; 9],
    groups: Vec<ConstraintGroup>,
    givens: Givens,
}

impl GridState {
    /// Builds an initial board from given values and a constraint-group
    /// list.
    ///
    /// Cells with a given value start fixed; all other cells start floating
    /// with all nine candidates.
    #[must_use]
    pub fn generate(givens: Givens, groups: Vec<ConstraintGroup>) -> Self {
        let cells = std::array::from_fn(|y| {
            std::array::from_fn(|x| {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new(x as u8, y as u8);
                match givens.get(pos) {
                    Some(value) => Cell::fixed(pos, value),
                    None => Cell::unconstrained(pos),
                }
            })
        });
        Self {
            cells,
            groups,
            givens,
        }
    }

    /// Builds an initial board with the standard 27 constraint groups.
    #[must_use]
    pub fn from_givens(givens: Givens) -> Self {
        Self::generate(givens, default_constraint_groups())
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.y() as usize][pos.x() as usize]
    }

    /// Returns the constraint groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[ConstraintGroup] {
        &self.groups
    }

    /// Returns the original given values.
    #[must_use]
    pub const fn givens(&self) -> &Givens {
        &self.givens
    }

    /// Returns `true` if the cell at `pos` was fixed by the user rather
    /// than by deduction.
    #[must_use]
    pub const fn is_given(&self, pos: Position) -> bool {
        self.givens.get(pos).is_some()
    }

    /// Returns `true` if every cell on the board is fixed.
    ///
    /// This is a presentation helper; the engine never consults it when
    /// deciding whether to report completion.
    #[must_use]
    pub fn is_fully_fixed(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_fixed()))
    }

    /// Applies an action, returning the next board state.
    ///
    /// The receiver is left untouched. Semantics per variant:
    ///
    /// - [`Action::SetCell`] replaces the cell with a fixed cell of the
    ///   given value.
    /// - [`Action::RemoveCandidates`] strikes the given values from a
    ///   floating cell's candidates; it is a no-op on a fixed cell, and
    ///   values already absent are ignored.
    /// - [`Action::ClearCell`] replaces any cell with a floating cell
    ///   holding all nine candidates.
    #[must_use]
    pub fn apply(&self, action: &Action) -> Self {
        let mut next = self.clone();
        match *action {
            Action::SetCell { pos, value } => {
                next.cells[pos.y() as usize][pos.x() as usize] = Cell::fixed(pos, value);
            }
            Action::RemoveCandidates { pos, values } => {
                let cell = &mut next.cells[pos.y() as usize][pos.x() as usize];
                if let Some(candidates) = cell.candidates() {
                    *cell = Cell::floating(pos, candidates.difference(values));
                }
            }
            Action::ClearCell { pos } => {
                next.cells[pos.y() as usize][pos.x() as usize] = Cell::unconstrained(pos);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Digit, DigitSet};

    fn board() -> GridState {
        let mut matrix = [[0; 9]; 9];
        matrix[0][0] = 5;
        GridState::from_givens(Givens::from_matrix(matrix))
    }

    #[test]
    fn test_generate_fixes_givens() {
        let board = board();
        assert_eq!(board.cell(Position::new(0, 0)).value(), Some(Digit::D5));
        assert!(board.is_given(Position::new(0, 0)));
        assert!(board.cell(Position::new(1, 0)).is_floating());
        assert!(!board.is_given(Position::new(1, 0)));
        assert_eq!(board.groups().len(), 27);
    }

    #[test]
    fn test_set_cell_is_copy_on_write() {
        let board = board();
        let pos = Position::new(4, 4);
        let next = board.apply(&Action::SetCell {
            pos,
            value: Digit::D9,
        });

        assert_eq!(next.cell(pos).value(), Some(Digit::D9));
        // Fixing by deduction does not make the cell a given
        assert!(!next.is_given(pos));
        // The original state is untouched
        assert!(board.cell(pos).is_floating());
    }

    #[test]
    fn test_remove_candidates() {
        let board = board();
        let pos = Position::new(2, 2);
        let strike = DigitSet::from_iter([Digit::D1, Digit::D2]);

        let next = board.apply(&Action::RemoveCandidates { pos, values: strike });
        let candidates = next.cell(pos).candidates().unwrap();
        assert_eq!(candidates.len(), 7);
        assert!(!candidates.contains(Digit::D1));
        assert!(!candidates.contains(Digit::D2));

        // Striking the same values again changes nothing
        let again = next.apply(&Action::RemoveCandidates { pos, values: strike });
        assert_eq!(again.cell(pos).candidates(), Some(candidates));
    }

    #[test]
    fn test_remove_candidates_is_noop_on_fixed_cell() {
        let board = board();
        let pos = Position::new(0, 0);
        let next = board.apply(&Action::RemoveCandidates {
            pos,
            values: DigitSet::FULL,
        });
        assert_eq!(next.cell(pos).value(), Some(Digit::D5));
    }

    #[test]
    fn test_clear_cell_restores_all_candidates() {
        let board = board();
        let pos = Position::new(0, 0);
        let next = board.apply(&Action::ClearCell { pos });
        assert_eq!(next.cell(pos).candidates(), Some(DigitSet::FULL));
        // The given record itself is untouched; only the cell is reset
        assert!(next.is_given(pos));
    }

    #[test]
    fn test_candidates_may_empty_out() {
        let board = board();
        let pos = Position::new(3, 3);
        let next = board.apply(&Action::RemoveCandidates {
            pos,
            values: DigitSet::FULL,
        });
        assert_eq!(next.cell(pos).candidates(), Some(DigitSet::EMPTY));
    }

    #[test]
    fn test_is_fully_fixed() {
        let mut matrix = [[0; 9]; 9];
        for (y, row) in matrix.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = ((x + y) % 9 + 1) as u8;
            }
        }
        let full = GridState::from_givens(Givens::from_matrix(matrix));
        assert!(full.is_fully_fixed());
        assert!(!board().is_fully_fixed());
    }
}
