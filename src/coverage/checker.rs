//! Interval coverage checker.

use super::adjacency::Adjacency;
use super::gaps::Gap;
use super::interval::Interval;
use super::merged_blocks::MergedBlocks;
use crate::coordinate::Coordinate;

/// Decides whether a collection of intervals covers a target without a gap.
///
/// The checker is stateless apart from its [`Adjacency`] rule: every call
/// merges an owned copy of the candidates and walks the resulting blocks.
///
/// # Example
///
/// ```rust
/// use dualcover::coverage::{Adjacency, CoverageChecker, Interval};
///
/// let checker = CoverageChecker::new(Adjacency::Discrete);
/// let target = Interval::new(1, 10);
///
/// assert!(checker.is_fully_covered(target, &[Interval::new(6, 10), Interval::new(1, 5)]));
/// assert!(!checker.is_fully_covered(target, &[Interval::new(1, 4), Interval::new(6, 10)]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoverageChecker {
    adjacency: Adjacency,
}

impl CoverageChecker {
    pub const fn new(adjacency: Adjacency) -> Self {
        Self { adjacency }
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    /// Merges `candidates` into canonical blocks under this checker's rule.
    pub fn merge<T: Coordinate>(&self, candidates: &[Interval<T>]) -> MergedBlocks<T> {
        MergedBlocks::merge(candidates, self.adjacency)
    }

    /// Returns true iff the union of `candidates` contains every value of
    /// `target`. An empty candidate list never covers anything.
    pub fn is_fully_covered<T: Coordinate>(
        &self,
        target: Interval<T>,
        candidates: &[Interval<T>],
    ) -> bool {
        if candidates.is_empty() {
            return false;
        }
        let blocks = self.merge(candidates);
        match blocks.gaps(target).next() {
            Some(gap) => {
                tracing::debug!(%target, %gap, "coverage gap detected");
                false
            }
            None => true,
        }
    }

    /// Returns every stretch of `target` the candidates leave uncovered.
    pub fn gaps<T: Coordinate>(
        &self,
        target: Interval<T>,
        candidates: &[Interval<T>],
    ) -> Vec<Gap<T>> {
        self.merge(candidates).gaps(target).collect()
    }
}

/// Returns true iff `candidates` jointly cover `target` under the discrete
/// adjacency rule (`[a, b]` and `[b + 1, c]` leave no gap).
///
/// ```rust
/// use dualcover::coverage::{is_fully_covered, Interval};
///
/// let target = Interval::new(100, 500);
/// assert!(is_fully_covered(target, &[Interval::new(100, 300), Interval::new(301, 500)]));
/// assert!(!is_fully_covered(target, &[]));
/// ```
pub fn is_fully_covered<T: Coordinate>(target: Interval<T>, candidates: &[Interval<T>]) -> bool {
    CoverageChecker::default().is_fully_covered(target, candidates)
}
