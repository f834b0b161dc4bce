//! The edit/solve session state machine.

use derive_more::{Display, Error};
use lucidoku_core::{Digit, Givens, GridState, Position};
use lucidoku_solver::{Cascade, NextActionSet};

/// The sample puzzle a fresh session starts with.
const DEFAULT_PUZZLE: [[u8; 9]; 9] = [
    [4, 0, 5, 0, 2, 0, 0, 0, 0],
    [0, 0, 0, 7, 5, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 4, 0, 3],
    [0, 2, 0, 0, 0, 8, 0, 0, 6],
    [0, 0, 0, 0, 0, 0, 7, 0, 1],
    [0, 8, 0, 0, 9, 0, 0, 0, 0],
    [0, 0, 3, 2, 7, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 0, 6, 9, 0],
    [0, 0, 7, 6, 0, 0, 0, 1, 0],
];

/// Returns the sample puzzle a fresh [`Session`] loads as given values.
#[must_use]
pub fn default_puzzle() -> Givens {
    Givens::from_matrix(DEFAULT_PUZZLE)
}

/// The two screens of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Given values are being edited; the engine does not run.
    EnterValues,
    /// The board is frozen and the deduction engine steps it.
    Solve,
}

/// Error raised when a session operation is used in the wrong mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The operation requires value-entry mode.
    #[display("the board is not in value-entry mode")]
    NotEntering,
    /// The operation requires solve mode.
    #[display("the board is not in solve mode")]
    NotSolving,
}

/// A headless edit/solve session.
///
/// The session starts in [`Mode::EnterValues`] with its givens loaded.
/// [`begin_solve`](Self::begin_solve) freezes the givens into a solving
/// board; [`step`](Self::step) asks the engine for the next action batch
/// and applies it; [`return_to_entry`](Self::return_to_entry) goes back to
/// editing and [`reset`](Self::reset) clears everything.
///
/// There is no undo and nothing is persisted.
///
/// # Examples
///
/// ```
/// use lucidoku_game::{Mode, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.mode(), Mode::EnterValues);
///
/// session.begin_solve()?;
/// let step = session.step()?;
/// assert!(!step.messages.is_empty());
/// # Ok::<(), lucidoku_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    givens: Givens,
    cascade: Cascade,
    solving: Option<GridState>,
}

impl Session {
    /// Creates a session holding the sample puzzle, in value-entry mode.
    #[must_use]
    pub fn new() -> Self {
        Self::with_givens(default_puzzle())
    }

    /// Creates a session holding the supplied givens, in value-entry mode.
    #[must_use]
    pub fn with_givens(givens: Givens) -> Self {
        Self {
            givens,
            cascade: Cascade::standard(),
            solving: None,
        }
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.solving.is_some() {
            Mode::Solve
        } else {
            Mode::EnterValues
        }
    }

    /// Returns the given values being edited or solved.
    #[must_use]
    pub fn givens(&self) -> &Givens {
        &self.givens
    }

    /// Returns the solving board, or `None` while entering values.
    #[must_use]
    pub fn board(&self) -> Option<&GridState> {
        self.solving.as_ref()
    }

    /// Sets or clears a given value.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotEntering`] while in solve mode.
    pub fn set_given(&mut self, pos: Position, value: Option<Digit>) -> Result<(), GameError> {
        if self.solving.is_some() {
            return Err(GameError::NotEntering);
        }
        self.givens.set(pos, value);
        Ok(())
    }

    /// Freezes the givens into a solving board and enters solve mode.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotEntering`] if the session is already
    /// solving.
    pub fn begin_solve(&mut self) -> Result<(), GameError> {
        if self.solving.is_some() {
            return Err(GameError::NotEntering);
        }
        log::debug!("entering solve mode");
        self.solving = Some(GridState::from_givens(self.givens));
        Ok(())
    }

    /// Computes the next action batch without applying it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotSolving`] while entering values.
    pub fn next_actions(&self) -> Result<NextActionSet, GameError> {
        let board = self.solving.as_ref().ok_or(GameError::NotSolving)?;
        Ok(self.cascade.next_actions(board))
    }

    /// Computes the next action batch, applies it, and returns it.
    ///
    /// An empty batch leaves the board untouched; its message reports that
    /// the board is complete.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotSolving`] while entering values.
    pub fn step(&mut self) -> Result<NextActionSet, GameError> {
        let board = self.solving.as_mut().ok_or(GameError::NotSolving)?;
        let set = self.cascade.next_actions(board);
        for action in &set.actions {
            *board = board.apply(action);
        }
        log::debug!("applied {} action(s)", set.actions.len());
        Ok(set)
    }

    /// Leaves solve mode and returns to editing the givens.
    ///
    /// Progress made while solving is discarded; the givens are kept.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotSolving`] while entering values.
    pub fn return_to_entry(&mut self) -> Result<(), GameError> {
        if self.solving.take().is_none() {
            return Err(GameError::NotSolving);
        }
        log::debug!("returning to value entry");
        Ok(())
    }

    /// Clears the session to a blank board in value-entry mode.
    pub fn reset(&mut self) {
        log::debug!("resetting to a blank board");
        self.givens = Givens::empty();
        self.solving = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
