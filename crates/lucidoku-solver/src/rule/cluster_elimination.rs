use lucidoku_core::{Action, ConstraintGroup, DigitSet, GridState};
use tinyvec::ArrayVec;

use super::{BoxedRule, Rule};
use crate::{Cluster, NextActionSet, find_both_cluster_sets};

const NAME: &str = "cluster elimination";

/// A rule that strikes candidates confined away from a cell by a cluster.
///
/// For each group, the candidate sets of its unresolved cells are
/// partitioned into clusters, in the plain view and in the transposed view.
/// Within a cluster, a cell may only keep the cluster's matched values;
/// anything else is struck. The first group, and within it the first view
/// (plain before transposed), that produces at least one elimination wins
/// the step, and the explanation describes that group's clusters only.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClusterElimination;

impl ClusterElimination {
    /// Creates a new `ClusterElimination` rule.
    #[must_use]
    pub const fn new() -> Self {
        ClusterElimination
    }
}

impl Rule for ClusterElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn find_actions(&self, grid: &GridState) -> Option<NextActionSet> {
        for group in grid.groups() {
            // Group slots of the unresolved cells, aligned with `data`
            let mut slots: ArrayVec<[u8; 9]> = ArrayVec::new();
            let mut data: ArrayVec<[DigitSet; 9]> = ArrayVec::new();
            for (i, &pos) in group.positions().iter().enumerate() {
                if let Some(candidates) = grid.cell(pos).candidates() {
                    #[expect(clippy::cast_possible_truncation)]
                    slots.push(i as u8);
                    data.push(candidates);
                }
            }

            let (normal, inverse) = find_both_cluster_sets(&data);
            for clusters in [normal, inverse] {
                let mut set = NextActionSet::new();
                for cluster in &clusters {
                    for slot in cluster.indices {
                        let extra = data[slot as usize].difference(cluster.matches);
                        if !extra.is_empty() {
                            let pos = group.positions()[slots[slot as usize] as usize];
                            set.actions.push(Action::RemoveCandidates { pos, values: extra });
                        }
                    }
                }
                if !set.is_empty() {
                    set.messages.push(describe(group, &slots, &clusters));
                    return Some(set);
                }
            }
        }
        None
    }
}

/// Builds the explanation for the winning group: one clause per top-level
/// cluster, joined with a trailing "and" before the last.
fn describe(group: &ConstraintGroup, slots: &[u8], clusters: &[Cluster<DigitSet>]) -> String {
    let clauses: Vec<String> = clusters
        .iter()
        .map(|cluster| {
            let values = comma_list(cluster.matches.iter().map(|digit| digit.to_string()));
            let cells = comma_list(
                cluster
                    .indices
                    .iter()
                    .map(|slot| group.positions()[slots[slot as usize] as usize].to_string()),
            );
            format!("the value(s) {values} can only be in the cell(s) {cells}")
        })
        .collect();
    format!("in {}, {}", group.name(), and_list(&clauses))
}

fn comma_list(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

fn and_list(clauses: &[String]) -> String {
    match clauses {
        [] => String::new(),
        [clause] => clause.clone(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}
