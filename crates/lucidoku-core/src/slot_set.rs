//! Slot positions (0-8) within a group-local list.
//!
//! This module provides [`SlotSet`], a specialized [`BitSet9`] for
//! representing sets of indices into a list of at most nine entries, such as
//! the unresolved cells of one constraint group.

use crate::{bit_set_9::BitSet9, index::SlotSemantics};

/// A set of slot indices 0-8, represented as a bitset.
///
/// Slots index into a group-local list: the nine cells of a constraint
/// group, or the shorter candidate-list view the cluster search operates on.
/// They are not board coordinates.
///
/// # Examples
///
/// ```
/// use lucidoku_core::SlotSet;
///
/// let slots = SlotSet::from_iter([0, 2, 4]);
/// assert_eq!(slots.len(), 3);
/// assert!(slots.contains(2));
/// assert!(!slots.contains(1));
/// ```
pub type SlotSet = BitSet9<SlotSemantics>;
