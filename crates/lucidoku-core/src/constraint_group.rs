//! Named constraint groups and the standard rule set.

use crate::Position;

/// An ordered set of nine distinct board positions that must collectively
/// contain each digit exactly once, plus a human-readable name used in
/// explanation messages.
///
/// The declaration order of groups, and of positions within a group, drives
/// the deterministic iteration order of the deduction engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGroup {
    name: String,
    positions: [Position; 9],
}

impl ConstraintGroup {
    /// Creates a constraint group.
    ///
    /// # Panics
    ///
    /// Panics if the positions are not distinct.
    #[must_use]
    pub fn new(name: impl Into<String>, positions: [Position; 9]) -> Self {
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(a != b, "constraint group positions must be distinct");
            }
        }
        Self {
            name: name.into(),
            positions,
        }
    }

    /// Returns the display name of the group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group's positions in declaration order.
    #[must_use]
    pub const fn positions(&self) -> &[Position; 9] {
        &self.positions
    }
}

/// Builds the standard 27 constraint groups: the nine columns, the nine
/// rows, and the nine 3x3 squares, in that declaration order.
///
/// Columns and rows are named with 1-based numbers ("column 1" through
/// "column 9"). Squares are named by their place on the board ("the
/// top-left square", "the center-right square", ...), except the middle
/// one, which is "the central square".
///
/// Every position participates in exactly three groups: one column, one
/// row, one square.
///
/// # Examples
///
/// ```
/// use lucidoku_core::default_constraint_groups;
///
/// let groups = default_constraint_groups();
/// assert_eq!(groups.len(), 27);
/// assert_eq!(groups[0].name(), "column 1");
/// assert_eq!(groups[9].name(), "row 1");
/// ```
#[must_use]
pub fn default_constraint_groups() -> Vec<ConstraintGroup> {
    let mut groups = Vec::with_capacity(27);
    for x in 0..9 {
        let positions = std::array::from_fn(|y| {
            #[expect(clippy::cast_possible_truncation)]
            let y = y as u8;
            Position::new(x, y)
        });
        groups.push(ConstraintGroup::new(format!("column {}", x + 1), positions));
    }
    for y in 0..9 {
        let positions = std::array::from_fn(|x| {
            #[expect(clippy::cast_possible_truncation)]
            let x = x as u8;
            Position::new(x, y)
        });
        groups.push(ConstraintGroup::new(format!("row {}", y + 1), positions));
    }
    for bx in 0..3 {
        for by in 0..3 {
            let positions = std::array::from_fn(|i| {
                #[expect(clippy::cast_possible_truncation)]
                let i = i as u8;
                Position::new(bx * 3 + i / 3, by * 3 + i % 3)
            });
            groups.push(ConstraintGroup::new(square_name(bx, by), positions));
        }
    }
    groups
}

fn square_name(bx: u8, by: u8) -> String {
    if bx == 1 && by == 1 {
        return "the central square".to_owned();
    }
    let row = ["top", "center", "bottom"][by as usize];
    let column = ["left", "center", "right"][bx as usize];
    format!("the {row}-{column} square")
}
