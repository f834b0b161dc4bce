//! Core data structures for the lucidoku deduction visualizer.
//!
//! This crate provides the grid model that the deduction engine reads and
//! updates: type-safe digits and positions, 9-bit candidate sets, cells,
//! named constraint groups, and an immutable board state that changes only
//! through explicit actions.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of digits 1-9
//! - [`position`]: Board coordinates `(x, y)` with `x, y` in 0-8
//! - [`index`]: Semantics mapping values to bit indices 0-8
//! - [`bit_set_9`]: The generic 9-bit set those semantics parameterize
//! - [`digit_set`] / [`slot_set`]: The two specializations the engine uses
//! - [`cell`]: Fixed and floating cells
//! - [`constraint_group`]: Named, ordered 9-cell groups and the standard
//!   27-group rule set
//! - [`action`]: The mutations a board accepts
//! - [`givens`]: The initial clue matrix, with text parsing
//! - [`grid`]: [`GridState`], the copy-on-write board
//!
//! # Examples
//!
//! ```
//! use lucidoku_core::{Action, Digit, GridState, Givens, Position};
//!
//! let board = GridState::from_givens(Givens::empty());
//! let next = board.apply(&Action::SetCell {
//!     pos: Position::new(4, 4),
//!     value: Digit::D5,
//! });
//!
//! // The original board is untouched.
//! assert!(board.cell(Position::new(4, 4)).is_floating());
//! assert_eq!(next.cell(Position::new(4, 4)).value(), Some(Digit::D5));
//! ```

pub mod action;
pub mod bit_set_9;
pub mod cell;
pub mod constraint_group;
pub mod digit;
pub mod digit_set;
pub mod givens;
pub mod grid;
pub mod index;
pub mod position;
pub mod slot_set;

// Re-export commonly used types
pub use self::{
    action::Action,
    cell::{Cell, CellState},
    constraint_group::{ConstraintGroup, default_constraint_groups},
    digit::Digit,
    digit_set::DigitSet,
    givens::{Givens, ParseGivensError},
    grid::GridState,
    position::Position,
    slot_set::SlotSet,
};
