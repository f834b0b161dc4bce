//! Cell states of the board.

use crate::{Digit, DigitSet, Position};

/// The resolution state of a single cell.
///
/// A cell is either fixed to one digit or floating over a set of remaining
/// candidates. A fixed cell carries no candidate set. A floating cell whose
/// candidate set has become empty marks a puzzle that cannot be completed by
/// the deduction rules; no recovery is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// The cell holds a single resolved digit.
    Fixed(Digit),
    /// The cell is unresolved; the set holds the digits it could still take.
    Floating(DigitSet),
}

/// A cell together with its board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    state: CellState,
}

impl Cell {
    /// Creates a fixed cell.
    #[must_use]
    pub const fn fixed(position: Position, value: Digit) -> Self {
        Self {
            position,
            state: CellState::Fixed(value),
        }
    }

    /// Creates a floating cell with the given candidates.
    #[must_use]
    pub const fn floating(position: Position, candidates: DigitSet) -> Self {
        Self {
            position,
            state: CellState::Floating(candidates),
        }
    }

    /// Creates a floating cell with all nine candidates.
    #[must_use]
    pub const fn unconstrained(position: Position) -> Self {
        Self::floating(position, DigitSet::FULL)
    }

    /// Returns the cell's board coordinate.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Returns the cell's resolution state.
    #[must_use]
    pub const fn state(self) -> CellState {
        self.state
    }

    /// Returns the resolved digit, or `None` for a floating cell.
    #[must_use]
    pub const fn value(self) -> Option<Digit> {
        match self.state {
            CellState::Fixed(value) => Some(value),
            CellState::Floating(_) => None,
        }
    }

    /// Returns the remaining candidates, or `None` for a fixed cell.
    #[must_use]
    pub const fn candidates(self) -> Option<DigitSet> {
        match self.state {
            CellState::Fixed(_) => None,
            CellState::Floating(candidates) => Some(candidates),
        }
    }

    /// Returns `true` if the cell is fixed to a digit.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self.state, CellState::Fixed(_))
    }

    /// Returns `true` if the cell is still unresolved.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self.state, CellState::Floating(_))
    }
}
