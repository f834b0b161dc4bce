use lucidoku_core::{Action, DigitSet, GridState};

use super::{BoxedRule, Rule};
use crate::NextActionSet;

const NAME: &str = "direct elimination";

/// A rule that strikes a candidate wherever a fixed peer in the same group
/// already holds that digit.
///
/// Every group is scanned before the batch is returned, so one step may
/// eliminate many candidates at once. Each elimination records the fixed
/// peer it leaned on as a cause, for highlighting.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectElimination;

impl DirectElimination {
    /// Creates a new `DirectElimination` rule.
    #[must_use]
    pub const fn new() -> Self {
        DirectElimination
    }
}

impl Rule for DirectElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn find_actions(&self, grid: &GridState) -> Option<NextActionSet> {
        let mut set = NextActionSet::new();
        for group in grid.groups() {
            for &pos in group.positions() {
                let Some(candidates) = grid.cell(pos).candidates() else {
                    continue;
                };
                for &peer in group.positions() {
                    if let Some(value) = grid.cell(peer).value()
                        && candidates.contains(value)
                    {
                        set.actions.push(Action::RemoveCandidates {
                            pos,
                            values: DigitSet::from_iter([value]),
                        });
                        set.add_cause(peer, value);
                    }
                }
            }
        }
        if set.is_empty() {
            return None;
        }
        set.messages.push(
            "the struck-through values are already placed elsewhere in the same column, row or square."
                .to_owned(),
        );
        Some(set)
    }
}

#[cfg(test)]
mod tests {
    use lucidoku_core::{Digit, Position};

    use super::*;
    use crate::testing::board_from_str;

    #[test]
    fn test_strikes_candidates_seen_by_a_fixed_cell() {
        let board = board_from_str(&("5".to_owned() + &"_".repeat(80)));

        let set = DirectElimination::new().find_actions(&board).unwrap();

        // The fixed 5 at (0, 0) rules the digit out of its column, row and
        // square; every such strike names it as the cause.
        let five = DigitSet::from_iter([Digit::D5]);
        assert!(set.actions.contains(&Action::RemoveCandidates {
            pos: Position::new(0, 8),
            values: five,
        }));
        assert!(set.actions.contains(&Action::RemoveCandidates {
            pos: Position::new(8, 0),
            values: five,
        }));
        assert!(set.actions.contains(&Action::RemoveCandidates {
            pos: Position::new(2, 2),
            values: five,
        }));
        assert_eq!(set.causes.len(), 1);
        assert_eq!(set.causes[0].pos, Position::new(0, 0));
        assert_eq!(set.causes[0].values, five);

        // 8 strikes per group; cells shared between the column, row and
        // square are struck once per group, so duplicates stay in the
        // batch.
        assert_eq!(set.actions.len(), 24);
        assert_eq!(set.messages.len(), 1);
    }

    #[test]
    fn test_scans_all_groups_in_one_step() {
        let mut text = "5".to_owned() + &"_".repeat(80);
        // A second fixed digit far away, in unrelated groups
        text.replace_range(40..41, "7");
        let board = board_from_str(&text);

        let set = DirectElimination::new().find_actions(&board).unwrap();
        let positions: Vec<_> = set.causes.iter().map(|cause| cause.pos).collect();
        assert_eq!(positions, [Position::new(0, 0), Position::new(4, 4)]);
    }

    #[test]
    fn test_does_not_apply_when_no_candidate_is_seen() {
        let board = board_from_str(&"_".repeat(81));
        assert_eq!(DirectElimination::new().find_actions(&board), None);
    }
}
