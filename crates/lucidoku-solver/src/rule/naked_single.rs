use lucidoku_core::{Action, GridState, Position};

use super::{BoxedRule, Rule};
use crate::NextActionSet;

const NAME: &str = "naked single";

/// A rule that fixes every floating cell with exactly one remaining
/// candidate.
///
/// The whole grid is scanned in one pass, row-major, so several independent
/// naked singles fire together in a single step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` rule.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Rule for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn find_actions(&self, grid: &GridState) -> Option<NextActionSet> {
        let mut set = NextActionSet::new();
        for pos in Position::ALL {
            if let Some(candidates) = grid.cell(pos).candidates()
                && let Some(value) = candidates.as_single()
            {
                set.actions.push(Action::SetCell { pos, value });
            }
        }
        if set.is_empty() {
            return None;
        }
        set.messages
            .push("the cell(s) can only be one possible value.".to_owned());
        Some(set)
    }
}

#[cfg(test)]
mod tests {
    use lucidoku_core::{Digit, DigitSet};

    use super::*;
    use crate::testing::board_from_str;

    #[test]
    fn test_fixes_single_candidate_cell() {
        // Eight digits fixed in row 1 leave a lone candidate at (8, 0),
        // once their eliminations have been applied.
        let board = board_from_str(
            "
            12345678_
            _________
            _________
            _________
            _________
            _________
            _________
            _________
            _________
            ",
        );
        let pos = Position::new(8, 0);
        let only_nine = DigitSet::from_iter([Digit::D9]);
        let board = board.apply(&Action::RemoveCandidates {
            pos,
            values: DigitSet::FULL.difference(only_nine),
        });

        let set = NakedSingle::new().find_actions(&board).unwrap();
        assert_eq!(
            set.actions,
            [Action::SetCell {
                pos,
                value: Digit::D9
            }]
        );
        assert_eq!(set.messages, ["the cell(s) can only be one possible value."]);
        assert!(set.causes.is_empty());
    }

    #[test]
    fn test_collects_all_naked_singles_in_one_pass() {
        let board = board_from_str(&"_".repeat(81));
        let first = Position::new(3, 1);
        let second = Position::new(5, 7);
        let board = board
            .apply(&Action::RemoveCandidates {
                pos: first,
                values: DigitSet::FULL.difference(DigitSet::from_iter([Digit::D2])),
            })
            .apply(&Action::RemoveCandidates {
                pos: second,
                values: DigitSet::FULL.difference(DigitSet::from_iter([Digit::D8])),
            });

        let set = NakedSingle::new().find_actions(&board).unwrap();
        // Row-major scan order: (3, 1) before (5, 7)
        assert_eq!(
            set.actions,
            [
                Action::SetCell {
                    pos: first,
                    value: Digit::D2
                },
                Action::SetCell {
                    pos: second,
                    value: Digit::D8
                },
            ]
        );
    }

    #[test]
    fn test_does_not_apply_without_single_candidate_cells() {
        let board = board_from_str(&"_".repeat(81));
        assert_eq!(NakedSingle::new().find_actions(&board), None);
    }

    #[test]
    fn test_ignores_fixed_and_emptied_cells() {
        let board = board_from_str(&("5".to_owned() + &"_".repeat(80)));
        // Empty out one cell's candidates entirely; the rule must not
        // propose anything for it.
        let board = board.apply(&Action::RemoveCandidates {
            pos: Position::new(4, 4),
            values: DigitSet::FULL,
        });
        assert_eq!(NakedSingle::new().find_actions(&board), None);
    }
}
