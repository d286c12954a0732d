//! A canonical sequence of merged, mutually disjoint intervals.
//!
//! [`MergedBlocks`] is produced by coalescing an unordered collection of
//! candidate intervals. It guarantees the **canonical invariant**: blocks are
//! sorted by `min`, and no two consecutive blocks overlap or touch under the
//! [`Adjacency`] rule they were merged with.
//!
//! Read access is transparent via `Deref<Target = [Interval<T>]>`.

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::Deref;

use super::adjacency::Adjacency;
use super::gaps::Gaps;
use super::interval::Interval;
use crate::coordinate::Coordinate;

/// Sorted, disjoint blocks covering exactly the union of some candidates.
///
/// # Performance
///
/// - Construction: O(n log n) sort of an owned copy + O(n) merge.
/// - Coverage walk over the result: O(n).
#[derive(Debug, Clone, PartialEq)]
pub struct MergedBlocks<T: Coordinate> {
    blocks: Vec<Interval<T>>,
    adjacency: Adjacency,
}

/// Ascending by `min`, ties broken by ascending `max`.
fn compare_intervals<T: Coordinate>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    a.min()
        .partial_cmp(&b.min())
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.max().partial_cmp(&b.max()).unwrap_or(Ordering::Equal))
}

impl<T: Coordinate> MergedBlocks<T> {
    /// Merges `candidates` into canonical blocks.
    ///
    /// The caller's slice is left untouched; sorting happens on an owned copy.
    pub fn merge(candidates: &[Interval<T>], adjacency: Adjacency) -> Self {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(compare_intervals);

        let mut blocks: Vec<Interval<T>> = Vec::with_capacity(sorted.len());
        let mut iter = sorted.into_iter();
        if let Some(first) = iter.next() {
            let mut current = first;
            for next in iter {
                if adjacency.touches(current.max(), next.min()) {
                    // Overlapping or adjacent – extend the current run.
                    current = current.span(&next);
                } else {
                    blocks.push(current);
                    current = next;
                }
            }
            blocks.push(current);
        }

        tracing::trace!(
            candidates = candidates.len(),
            blocks = blocks.len(),
            %adjacency,
            "merged candidate intervals"
        );

        Self { blocks, adjacency }
    }

    /// Returns true if `intervals` is already canonical under `adjacency`:
    /// sorted by `min`, with every block separated from the next by a gap.
    pub fn is_canonical(intervals: &[Interval<T>], adjacency: Adjacency) -> bool {
        intervals
            .windows(2)
            .all(|w| !adjacency.touches(w[0].max(), w[1].min()))
    }

    /// The adjacency rule these blocks were merged with.
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    /// Iterates over the uncovered stretches of `target`, in ascending order.
    pub fn gaps(&self, target: Interval<T>) -> Gaps<'_, T> {
        Gaps::new(&self.blocks, target, self.adjacency)
    }

    /// Returns true if the blocks leave no gap anywhere in `target`.
    pub fn covers(&self, target: Interval<T>) -> bool {
        self.gaps(target).next().is_none()
    }

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.blocks
    }

    /// Consumes the blocks and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval<T>> {
        self.blocks
    }
}

impl<T: Coordinate> Deref for MergedBlocks<T> {
    type Target = [Interval<T>];

    fn deref(&self) -> &[Interval<T>] {
        &self.blocks
    }
}

impl<T: Coordinate> AsRef<[Interval<T>]> for MergedBlocks<T> {
    fn as_ref(&self) -> &[Interval<T>] {
        &self.blocks
    }
}

impl<T: Coordinate> IntoIterator for MergedBlocks<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a, T: Coordinate> IntoIterator for &'a MergedBlocks<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl<T: Coordinate> Display for MergedBlocks<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", block)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(blocks, vec![...])` in tests.
impl<T: Coordinate> PartialEq<Vec<Interval<T>>> for MergedBlocks<T> {
    fn eq(&self, other: &Vec<Interval<T>>) -> bool {
        self.blocks == *other
    }
}
