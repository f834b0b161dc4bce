//! The mutations a board accepts.

use crate::{Digit, DigitSet, Position};

/// A proposed mutation of a [`GridState`](crate::GridState).
///
/// Applying an action is the only way a board changes. Actions carry no
/// justification; the engine pairs them with causes and messages when it
/// proposes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fix the cell at `pos` to `value`, discarding any candidates.
    SetCell {
        /// Target coordinate.
        pos: Position,
        /// Digit to fix.
        value: Digit,
    },
    /// Remove `values` from the candidates of the floating cell at `pos`.
    ///
    /// A no-op on a fixed cell; values already absent are ignored.
    RemoveCandidates {
        /// Target coordinate.
        pos: Position,
        /// Candidates to strike.
        values: DigitSet,
    },
    /// Reset the cell at `pos` to a floating cell with all nine candidates.
    ClearCell {
        /// Target coordinate.
        pos: Position,
    },
}
