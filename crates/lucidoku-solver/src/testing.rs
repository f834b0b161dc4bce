//! Test utilities for the deduction engine.

use lucidoku_core::{Action, Digit, DigitSet, Givens, GridState, Position};

use crate::NextActionSet;

/// Builds a board from a grid string (digits for givens; `.`, `_` or `0`
/// for empty cells; whitespace ignored), with the standard 27 groups.
///
/// # Panics
///
/// Panics if the string cannot be parsed.
pub(crate) fn board_from_str(s: &str) -> GridState {
    GridState::from_givens(s.parse::<Givens>().unwrap())
}

/// Narrows the floating cell at `pos` down to exactly `keep` candidates.
pub(crate) fn restrict(board: &GridState, pos: Position, keep: &[u8]) -> GridState {
    let keep: DigitSet = keep.iter().map(|&v| Digit::from_value(v)).collect();
    board.apply(&Action::RemoveCandidates {
        pos,
        values: DigitSet::FULL.difference(keep),
    })
}

/// Applies every action of a step, in order, returning the final board.
pub(crate) fn apply_all(board: &GridState, set: &NextActionSet) -> GridState {
    set.actions
        .iter()
        .fold(board.clone(), |board, action| board.apply(action))
}
