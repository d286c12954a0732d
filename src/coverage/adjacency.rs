//! Rules deciding when two intervals leave no uncovered value between them.

use std::fmt::Display;
use std::ops::Bound;

use crate::coordinate::Coordinate;

/// Policy for merging intervals that do not strictly overlap.
///
/// | Rule         | `[a, b]` merges with `[c, d]` when | walk resumes at |
/// |--------------|------------------------------------|-----------------|
/// | `Discrete`   | `c <= b + 1`                       | `b + 1` (incl.) |
/// | `Continuous` | `c <= b`                           | `b` (excl.)     |
///
/// `Discrete` treats the axis as a grid of whole units (whole metres, whole
/// lux): a block ending at `n` and one starting at `n + 1` have nothing
/// between them. It must not be used for genuinely fractional data, where
/// `[0.0, 1.0]` and `[1.5, 2.0]` would be merged across a real gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Adjacency {
    #[default]
    Discrete,
    Continuous,
}

impl Adjacency {
    /// Returns true if an interval starting at `next_min` continues a block
    /// ending at `current_max` without leaving a gap.
    #[inline]
    pub fn touches<T: Coordinate>(self, current_max: T, next_min: T) -> bool {
        match self {
            Adjacency::Discrete => next_min <= current_max.successor(),
            Adjacency::Continuous => next_min <= current_max,
        }
    }

    /// Returns the first position not yet covered once a block ending at
    /// `block_max` has been consumed.
    #[inline]
    pub fn resume_after<T: Coordinate>(self, block_max: T) -> Bound<T> {
        match self {
            Adjacency::Discrete => Bound::Included(block_max.successor()),
            Adjacency::Continuous => Bound::Excluded(block_max),
        }
    }
}

impl Display for Adjacency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Adjacency::Discrete => write!(f, "discrete"),
            Adjacency::Continuous => write!(f, "continuous"),
        }
    }
}
