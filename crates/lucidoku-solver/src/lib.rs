//! The lucidoku deduction engine.
//!
//! This crate inspects a [`GridState`](lucidoku_core::GridState) and
//! proposes the next batch of deterministic actions together with a
//! human-readable justification. It applies three rule tiers in strict
//! priority order and stops at the first tier that yields at least one
//! action:
//!
//! 1. **Naked single** - a floating cell with exactly one remaining
//!    candidate is fixed to it.
//! 2. **Direct elimination** - a candidate is struck from a cell because a
//!    fixed peer in the same group already holds that digit.
//! 3. **Cluster elimination** - within one group, a set of N cells whose
//!    combined candidates are exactly N digits confines those digits to
//!    those cells; candidates outside the cluster are struck. The dual view
//!    covers the hidden-subset form.
//!
//! The engine is not a solver: it never searches, never backtracks, and
//! never validates the puzzle. When no rule applies it reports that the
//! board is complete, whether or not every cell is resolved.
//!
//! # Examples
//!
//! ```
//! use lucidoku_core::{Givens, GridState};
//! use lucidoku_solver::next_actions;
//!
//! let board = GridState::from_givens(Givens::empty());
//! let step = next_actions(&board);
//!
//! // A blank board offers nothing to deduce.
//! assert!(step.actions.is_empty());
//! assert_eq!(step.messages, ["the board is complete"]);
//! ```

pub use self::{cascade::*, cluster::*, next_action::*};

mod cascade;
mod cluster;
mod next_action;
pub mod rule;

#[cfg(test)]
mod testing;
