//! The deduction rules the cascade evaluates.
//!
//! Each rule implements the [`Rule`] trait: it inspects a board without
//! mutating it and either proposes a batch of actions with an explanation,
//! or reports that it does not apply. The cascade
//! ([`Cascade`](crate::Cascade)) evaluates rules in a fixed priority order
//! and stops at the first one that proposes anything.

use std::fmt::Debug;

use lucidoku_core::GridState;

pub use self::{
    cluster_elimination::ClusterElimination, direct_elimination::DirectElimination,
    naked_single::NakedSingle,
};
use crate::NextActionSet;

mod cluster_elimination;
mod direct_elimination;
mod naked_single;

/// A deduction rule.
///
/// Rules are pure: given identical boards they must return identical
/// proposals, with action order following the board's declared iteration
/// orders.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Inspects the board and proposes the rule's complete batch of
    /// actions, or returns `None` when the rule does not apply.
    ///
    /// A returned set always proposes at least one action.
    fn find_actions(&self, grid: &GridState) -> Option<NextActionSet>;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns the three standard rules in cascade priority order: naked
/// single, then direct elimination, then cluster elimination.
#[must_use]
pub fn standard_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(DirectElimination::new()),
        Box::new(ClusterElimination::new()),
    ]
}
