//! Coverage walk: finds the stretches of a target left uncovered by
//! canonical blocks.

use std::fmt::Display;
use std::ops::{Bound, RangeBounds};

use super::adjacency::Adjacency;
use super::interval::Interval;
use crate::coordinate::Coordinate;

/// An uncovered stretch of a target interval.
///
/// Endpoints are [`Bound`]s so both adjacency rules are described exactly:
/// under [`Adjacency::Discrete`] the gap between `[1, 4]` and `[6, 10]` is
/// `[5, 6)`, under [`Adjacency::Continuous`] the gap between `[0.0, 1.0]` and
/// `[1.5, 2.0]` is `(1.0, 1.5)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap<T: Coordinate> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T: Coordinate> Gap<T> {
    pub fn new(start: Bound<T>, end: Bound<T>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Bound<T> {
        self.start
    }

    pub fn end(&self) -> Bound<T> {
        self.end
    }
}

impl<T: Coordinate> RangeBounds<T> for Gap<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}

impl<T: Coordinate> Display for Gap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.start {
            Bound::Included(v) => write!(f, "[{:?}, ", v)?,
            Bound::Excluded(v) => write!(f, "({:?}, ", v)?,
            Bound::Unbounded => write!(f, "(-inf, ")?,
        }
        match self.end {
            Bound::Included(v) => write!(f, "{:?}]", v),
            Bound::Excluded(v) => write!(f, "{:?})", v),
            Bound::Unbounded => write!(f, "+inf)"),
        }
    }
}

/// Returns the value a cursor bound sits on.
fn cursor_value<T: Coordinate>(cursor: Bound<T>, fallback: T) -> T {
    match cursor {
        Bound::Included(v) | Bound::Excluded(v) => v,
        Bound::Unbounded => fallback,
    }
}

/// Iterator over the gaps a canonical block sequence leaves in a target.
///
/// The walk keeps a cursor at the first position not yet known to be
/// covered. Each block either starts past the cursor (a gap), or extends
/// coverage; once a block reaches `target.max` the walk ends. Blocks that end
/// before the cursor, such as blocks lying entirely below `target.min`,
/// contribute nothing and are skipped.
///
/// Short-circuits: asking only for the first gap stops at the first break in
/// coverage.
#[derive(Debug, Clone)]
pub struct Gaps<'a, T: Coordinate> {
    blocks: std::slice::Iter<'a, Interval<T>>,
    target: Interval<T>,
    adjacency: Adjacency,
    cursor: Option<Bound<T>>,
}

impl<'a, T: Coordinate> Gaps<'a, T> {
    pub(crate) fn new(
        blocks: &'a [Interval<T>],
        target: Interval<T>,
        adjacency: Adjacency,
    ) -> Self {
        debug_assert!(
            super::MergedBlocks::is_canonical(blocks, adjacency),
            "coverage walk requires canonical blocks"
        );
        Self {
            blocks: blocks.iter(),
            target,
            adjacency,
            cursor: Some(Bound::Included(target.min())),
        }
    }

    /// Returns true if `block` ends before the cursor.
    fn ends_before(block: &Interval<T>, cursor: Bound<T>) -> bool {
        match cursor {
            Bound::Included(c) => block.max() < c,
            Bound::Excluded(c) => block.max() <= c,
            Bound::Unbounded => false,
        }
    }

    fn trailing_gap(&mut self, cursor: Bound<T>) -> Gap<T> {
        self.cursor = None;
        Gap::new(cursor, Bound::Included(self.target.max()))
    }
}

impl<T: Coordinate> Iterator for Gaps<'_, T> {
    type Item = Gap<T>;

    fn next(&mut self) -> Option<Gap<T>> {
        loop {
            let cursor = self.cursor?;

            let Some(block) = self.blocks.next() else {
                return Some(self.trailing_gap(cursor));
            };

            if Self::ends_before(block, cursor) {
                continue;
            }
            if block.min() > self.target.max() {
                return Some(self.trailing_gap(cursor));
            }

            let gap = if block.min() > cursor_value(cursor, block.min()) {
                Some(Gap::new(cursor, Bound::Excluded(block.min())))
            } else {
                None
            };

            self.cursor = if block.max() >= self.target.max() {
                None
            } else {
                Some(self.adjacency.resume_after(block.max()))
            };

            if gap.is_some() {
                return gap;
            }
        }
    }
}

impl<T: Coordinate> std::iter::FusedIterator for Gaps<'_, T> {}
