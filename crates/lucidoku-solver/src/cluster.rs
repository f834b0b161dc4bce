//! Subset clustering within one constraint group.
//!
//! Given the candidate sets of a group's unresolved cells, the search looks
//! for a bipartition: a set of N cells whose combined candidates are exactly
//! N digits. Those digits are confined to those cells, and the remaining
//! cells hold the remaining digits, so each side can be examined on its own.
//! Each side is recursively split the same way, producing a tree of
//! progressively finer clusters.
//!
//! The same search runs on the transposed view, grouping digits by the cells
//! that could hold them, which covers the hidden-subset form of the rule.

use lucidoku_core::{Digit, DigitSet, SlotSet, bit_set_9::BitSet9, index::Index9Semantics};
use tinyvec::ArrayVec;

/// A matched subset found within one group's candidate data.
///
/// `indices` are slots within the candidate-list view handed to
/// [`find_clusters`], not board coordinates. `matches` is the set of values
/// bound to those slots. Sibling clusters partition the non-empty slots and
/// the occurring values between them; `sub_clusters` holds any finer
/// partition found within this cluster, and is empty when there is none.
///
/// Clusters are produced fresh per invocation and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster<M> {
    /// Slots of the candidate-list view bound to this cluster.
    pub indices: SlotSet,
    /// The values confined to those slots.
    pub matches: M,
    /// Finer partitions discovered inside this cluster, if any.
    pub sub_clusters: Vec<Cluster<M>>,
}

/// Recursively partitions candidate data into matched subsets.
///
/// `data` holds one candidate set per still-unresolved cell of a single
/// constraint group, in group order. The scan visits slots in order and
/// commits to the first slot whose candidate set is matched by exactly as
/// many slots as it has values; that split and its complement are returned,
/// each carrying whatever sub-clusters a recursive search of its own side
/// finds. A side with at most one slot is not searched further.
///
/// Returns an empty list when no split exists: a cluster spanning the whole
/// group carries no usable information and is dropped.
///
/// # Panics
///
/// Panics if `data` holds more than nine candidate sets.
///
/// # Examples
///
/// ```
/// use lucidoku_core::{Digit, DigitSet, SlotSet};
/// use lucidoku_solver::find_clusters;
///
/// let data = [
///     DigitSet::from_iter([Digit::D2, Digit::D3]),
///     DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]),
///     DigitSet::from_iter([Digit::D2, Digit::D3]),
/// ];
/// let clusters = find_clusters(&data);
///
/// assert_eq!(clusters.len(), 2);
/// assert_eq!(clusters[0].indices, SlotSet::from_iter([0, 2]));
/// assert_eq!(clusters[1].indices, SlotSet::from_iter([1]));
/// assert_eq!(clusters[1].matches, DigitSet::from_iter([Digit::D1]));
/// ```
#[must_use]
pub fn find_clusters<S>(data: &[BitSet9<S>]) -> Vec<Cluster<BitSet9<S>>>
where
    S: Index9Semantics,
{
    assert!(data.len() <= 9, "candidate data exceeds group size");

    let mut all_indices = SlotSet::new();
    let mut all_values = BitSet9::<S>::new();
    for (i, d) in data.iter().enumerate() {
        if !d.is_empty() {
            #[expect(clippy::cast_possible_truncation)]
            all_indices.insert(i as u8);
        }
        all_values |= *d;
    }

    for &d in data {
        if d.is_empty() || d.len() == all_values.len() {
            continue;
        }

        let mut matching = SlotSet::new();
        for j in all_indices {
            if data[j as usize].is_subset(d) {
                matching.insert(j);
            }
        }

        // Exactly as many slots as values: the values are confined to
        // those slots, and the complement stands on its own.
        if d.len() == matching.len() {
            let mut left = Cluster {
                indices: matching,
                matches: d,
                sub_clusters: Vec::new(),
            };
            let mut right = Cluster {
                indices: all_indices.difference(matching),
                matches: all_values.difference(d),
                sub_clusters: Vec::new(),
            };
            if left.indices.len() > 1 {
                left.sub_clusters = find_clusters(&restricted(data, &left));
            }
            if right.indices.len() > 1 {
                right.sub_clusters = find_clusters(&restricted(data, &right));
            }
            return vec![left, right];
        }
    }

    Vec::new()
}

/// Narrows `data` to one side of a split: slots outside the cluster become
/// empty, slots inside keep only the cluster's matched values.
fn restricted<S>(data: &[BitSet9<S>], cluster: &Cluster<BitSet9<S>>) -> Vec<BitSet9<S>>
where
    S: Index9Semantics,
{
    data.iter()
        .enumerate()
        .map(|(i, d)| {
            #[expect(clippy::cast_possible_truncation)]
            let slot = i as u8;
            if cluster.indices.contains(slot) {
                d.intersection(cluster.matches)
            } else {
                BitSet9::EMPTY
            }
        })
        .collect()
}

/// Runs the cluster search on the candidate data and on its transpose.
///
/// The transpose holds, for each distinct digit in first-appearance order,
/// the set of slots that could hold it. Clusters found there group digits
/// that share a confined set of cells; each is flipped back so that its
/// `indices` are cell slots and its `matches` are digits, making the two
/// returned lists directly comparable. The engine treats them as two
/// independent rule applications per group.
#[must_use]
pub fn find_both_cluster_sets(
    data: &[DigitSet],
) -> (Vec<Cluster<DigitSet>>, Vec<Cluster<DigitSet>>) {
    let normal = find_clusters(data);

    let (transposed, slot_digits) = transpose(data);
    let inverse = find_clusters(&transposed)
        .into_iter()
        .map(|cluster| flip(cluster, &slot_digits))
        .collect();
    (normal, inverse)
}

/// Builds the transposed view: one slot set per distinct digit, in
/// first-appearance order, holding the cell slots that could take it. The
/// second return value maps each value-slot back to its digit.
fn transpose(data: &[DigitSet]) -> (ArrayVec<[SlotSet; 9]>, ArrayVec<[u8; 9]>) {
    let mut slot_digits: ArrayVec<[u8; 9]> = ArrayVec::new();
    let mut transposed: ArrayVec<[SlotSet; 9]> = ArrayVec::new();
    for (i, &d) in data.iter().enumerate() {
        for value in d {
            let slot = match slot_digits.iter().position(|&v| v == value.value()) {
                Some(slot) => slot,
                None => {
                    slot_digits.push(value.value());
                    transposed.push(SlotSet::new());
                    slot_digits.len() - 1
                }
            };
            #[expect(clippy::cast_possible_truncation)]
            transposed[slot].insert(i as u8);
        }
    }
    (transposed, slot_digits)
}

/// Maps a cluster found in the transposed view back to cell space: its
/// value-slots become digits and its matched cell slots become indices.
fn flip(cluster: Cluster<SlotSet>, slot_digits: &[u8]) -> Cluster<DigitSet> {
    Cluster {
        indices: cluster.matches,
        matches: cluster
            .indices
            .iter()
            .map(|slot| Digit::from_value(slot_digits[slot as usize]))
            .collect(),
        sub_clusters: cluster
            .sub_clusters
            .into_iter()
            .map(|sub| flip(sub, slot_digits))
            .collect(),
    }
}
