//! Candidate digits (1-9) for a single cell.
//!
//! This module provides [`DigitSet`], a specialized [`BitSet9`] for
//! representing sets of digits 1-9, most commonly the remaining candidates
//! of a floating cell.
//!
//! # Examples
//!
//! ```
//! use lucidoku_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! candidates.remove(Digit::D7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D5));
//! assert!(candidates.contains(Digit::D1));
//! ```

use crate::{bit_set_9::BitSet9, index::DigitSemantics};

/// A set of digits 1-9, represented as a bitset.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing efficient storage and fast set operations.
///
/// # Set Operations
///
/// ```
/// use lucidoku_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
pub type DigitSet = BitSet9<DigitSemantics>;
