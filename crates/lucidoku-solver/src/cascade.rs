//! The rule cascade.

use lucidoku_core::GridState;

use crate::{
    NextActionSet,
    rule::{BoxedRule, standard_rules},
};

const COMPLETE_MESSAGE: &str = "the board is complete";

/// Evaluates deduction rules in strict priority order.
///
/// Each call to [`next_actions`](Self::next_actions) runs the rules in
/// order and returns the proposal of the first rule that applies. When no
/// rule applies the returned set is empty and its message reports that the
/// board is complete. That report is made whether or not every cell is
/// resolved: the cascade never validates the puzzle, so a board these rules
/// cannot finish is still reported as complete.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Givens, GridState};
/// use lucidoku_solver::Cascade;
///
/// let cascade = Cascade::standard();
/// let board = GridState::from_givens(
///     "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
///     "
///     .parse::<Givens>()?,
/// );
///
/// let step = cascade.next_actions(&board);
/// assert!(!step.actions.is_empty());
/// # Ok::<(), lucidoku_core::ParseGivensError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cascade {
    rules: Vec<BoxedRule>,
}

impl Cascade {
    /// Creates a cascade evaluating `rules` in the given order.
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates the standard three-tier cascade: naked single, direct
    /// elimination, cluster elimination.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_rules())
    }

    /// Returns the configured rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Computes the next batch of actions for `grid`.
    ///
    /// Pure and deterministic: identical boards always produce identical
    /// actions, causes and messages.
    #[must_use]
    pub fn next_actions(&self, grid: &GridState) -> NextActionSet {
        for rule in &self.rules {
            if let Some(set) = rule.find_actions(grid) {
                log::debug!("{} proposed {} action(s)", rule.name(), set.actions.len());
                for action in &set.actions {
                    log::trace!("{}: {action:?}", rule.name());
                }
                return set;
            }
        }
        log::debug!("no rule applies, reporting completion");
        let mut set = NextActionSet::new();
        set.messages.push(COMPLETE_MESSAGE.to_owned());
        set
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::standard()
    }
}

/// Computes the next batch of actions for `grid` with the standard cascade.
///
/// Convenience for [`Cascade::standard`] followed by
/// [`Cascade::next_actions`].
#[must_use]
pub fn next_actions(grid: &GridState) -> NextActionSet {
    Cascade::standard().next_actions(grid)
}

#[cfg(test)]
mod tests {
    use lucidoku_core::{Action, Digit, Givens, Position};

    use super::*;
    use crate::testing::{apply_all, board_from_str, restrict};

    #[test]
    fn test_naked_singles_outrank_every_elimination() {
        // The fixed 5 offers plenty of direct eliminations, but the lone
        // candidate at (4, 4) must win the step.
        let board = board_from_str(&("5".to_owned() + &"_".repeat(80)));
        let board = restrict(&board, Position::new(4, 4), &[7]);

        let step = next_actions(&board);
        assert_eq!(
            step.actions,
            [Action::SetCell {
                pos: Position::new(4, 4),
                value: Digit::D7,
            }]
        );
        assert_eq!(step.messages, ["the cell(s) can only be one possible value."]);
    }

    #[test]
    fn test_single_floating_cell_yields_one_set_action() {
        // Every cell fixed except one, which can only be a 7.
        let mut matrix = [[0_u8; 9]; 9];
        for (y, row) in matrix.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = u8::try_from((x + y) % 9).unwrap() + 1;
            }
        }
        matrix[6][2] = 0;
        let board = GridState::from_givens(Givens::from_matrix(matrix));
        let pos = Position::new(2, 6);
        let board = restrict(&board, pos, &[7]);

        let step = next_actions(&board);
        assert_eq!(
            step.actions,
            [Action::SetCell {
                pos,
                value: Digit::D7,
            }]
        );
        assert_eq!(step.messages, ["the cell(s) can only be one possible value."]);
    }

    #[test]
    fn test_elimination_fires_without_naked_singles() {
        let board = board_from_str(&("5".to_owned() + &"_".repeat(80)));
        let step = next_actions(&board);
        assert!(
            step.actions
                .iter()
                .all(|action| matches!(action, Action::RemoveCandidates { .. }))
        );
        assert_eq!(step.causes.len(), 1);
        assert_eq!(step.causes[0].pos, Position::new(0, 0));
    }

    #[test]
    fn test_fully_fixed_board_is_complete() {
        let mut matrix = [[0_u8; 9]; 9];
        for (y, row) in matrix.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = u8::try_from((x + y) % 9).unwrap() + 1;
            }
        }
        let board = GridState::from_givens(Givens::from_matrix(matrix));

        let step = next_actions(&board);
        assert!(step.actions.is_empty());
        assert!(step.causes.is_empty());
        assert_eq!(step.messages, ["the board is complete"]);
    }

    #[test]
    fn test_stuck_board_is_reported_complete_anyway() {
        // A blank board gives the rules nothing to work with. It is
        // reported complete even though all 81 cells are unresolved.
        let board = board_from_str(&"_".repeat(81));
        let step = next_actions(&board);
        assert!(step.actions.is_empty());
        assert_eq!(step.messages, ["the board is complete"]);
        assert!(!board.is_fully_fixed());
    }

    #[test]
    fn test_identical_boards_produce_identical_steps() {
        let board = board_from_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
            ",
        );
        assert_eq!(next_actions(&board), next_actions(&board));
    }

    #[test]
    fn test_stepping_terminates_in_completion() {
        let cascade = Cascade::standard();
        let mut board = board_from_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
            ",
        );
        // Every applied step strictly reduces the board's open
        // candidates, so stepping must reach the completion report.
        for _ in 0..1000 {
            let step = cascade.next_actions(&board);
            if step.is_empty() {
                assert_eq!(step.messages, ["the board is complete"]);
                return;
            }
            board = apply_all(&board, &step);
        }
        panic!("stepping did not terminate");
    }
}
