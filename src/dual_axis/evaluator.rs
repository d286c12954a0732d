//! Dual-axis coverage evaluator.

use super::axes::{project, Axis, DualAxis};
use super::config::CoverageConfig;
use super::report::{AxisReport, DualAxisReport};
use crate::coverage::{CoverageChecker, Interval};

/// Checks that a set of sources covers a distance target and a light target.
///
/// Each source is projected onto both axes; the interval coverage checker
/// runs once per axis with that axis' adjacency rule, and the results are
/// combined with a logical AND.
///
/// # Example
///
/// ```rust
/// use dualcover::coverage::Interval;
/// use dualcover::dual_axis::{CoverageEvaluator, Source};
///
/// let evaluator = CoverageEvaluator::default();
/// let sources = vec![
///     Source::with_id("front", Interval::new(1, 5), Interval::new(100, 300)),
///     Source::with_id("rear", Interval::new(6, 10), Interval::new(301, 500)),
/// ];
///
/// assert!(evaluator.covers_both_axes(Interval::new(1, 10), Interval::new(100, 500), &sources));
///
/// let report = evaluator.evaluate(Interval::new(1, 12), Interval::new(100, 500), &sources);
/// assert!(!report.is_covered());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoverageEvaluator {
    config: CoverageConfig,
}

impl CoverageEvaluator {
    pub const fn new(config: CoverageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoverageConfig {
        &self.config
    }

    /// Returns the checker configured for `axis`.
    pub fn checker(&self, axis: Axis) -> CoverageChecker {
        CoverageChecker::new(self.config.adjacency_for(axis))
    }

    /// Returns true iff `sources` cover both `target_distance` and
    /// `target_light` without a gap. No sources never covers anything.
    pub fn covers_both_axes<S: DualAxis>(
        &self,
        target_distance: Interval<S::Distance>,
        target_light: Interval<S::Light>,
        sources: &[S],
    ) -> bool {
        let (distances, lights) = project(sources);

        let distance_covered = self
            .checker(Axis::Distance)
            .is_fully_covered(target_distance, &distances);
        let light_covered = self
            .checker(Axis::Light)
            .is_fully_covered(target_light, &lights);

        tracing::debug!(
            sources = sources.len(),
            distance_covered,
            light_covered,
            "evaluated dual-axis coverage"
        );

        distance_covered && light_covered
    }

    /// Like [`covers_both_axes`](Self::covers_both_axes), but returns the
    /// merged blocks and gaps found on each axis.
    pub fn evaluate<S: DualAxis>(
        &self,
        target_distance: Interval<S::Distance>,
        target_light: Interval<S::Light>,
        sources: &[S],
    ) -> DualAxisReport<S::Distance, S::Light> {
        let (distances, lights) = project(sources);

        let distance = AxisReport::new(
            Axis::Distance,
            target_distance,
            self.checker(Axis::Distance).merge(&distances),
        );
        let light = AxisReport::new(
            Axis::Light,
            target_light,
            self.checker(Axis::Light).merge(&lights),
        );

        let report = DualAxisReport::new(distance, light);
        for axis in report.uncovered_axes() {
            tracing::debug!(%axis, "axis target not covered");
        }
        report
    }
}

/// Returns true iff `sources` cover both targets, using the discrete
/// adjacency rule on both axes.
pub fn covers_both_axes<S: DualAxis>(
    target_distance: Interval<S::Distance>,
    target_light: Interval<S::Light>,
    sources: &[S],
) -> bool {
    CoverageEvaluator::default().covers_both_axes(target_distance, target_light, sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::Adjacency;
    use crate::dual_axis::Source;

    fn source(id: &str, distance: (i64, i64), light: (i64, i64)) -> Source<i64, i64> {
        Source::with_id(
            id,
            Interval::new(distance.0, distance.1),
            Interval::new(light.0, light.1),
        )
    }

    #[test]
    fn both_axes_must_be_covered() {
        let sources = vec![
            source("a", (1, 10), (100, 200)),
            source("b", (1, 10), (300, 500)),
        ];
        assert!(!covers_both_axes(
            Interval::new(1, 10),
            Interval::new(100, 500),
            &sources
        ));
        assert!(covers_both_axes(
            Interval::new(1, 10),
            Interval::new(100, 200),
            &sources
        ));
    }

    #[test]
    fn no_sources_never_covers() {
        let sources: Vec<Source<i64, i64>> = Vec::new();
        assert!(!covers_both_axes(
            Interval::new(0, 0),
            Interval::new(0, 0),
            &sources
        ));
    }

    #[test]
    fn accepts_plain_tuples() {
        let sources = [
            (Interval::new(1, 5), Interval::new(100, 300)),
            (Interval::new(6, 10), Interval::new(301, 500)),
        ];
        assert!(covers_both_axes(
            Interval::new(1, 10),
            Interval::new(100, 500),
            &sources
        ));
    }

    #[test]
    fn accepts_borrowed_sources() {
        let a = source("a", (1, 5), (100, 300));
        let b = source("b", (6, 10), (301, 500));
        let sources = [&a, &b];
        assert!(covers_both_axes(
            Interval::new(1, 10),
            Interval::new(100, 500),
            &sources
        ));
    }

    #[test]
    fn per_axis_adjacency_is_honoured() {
        let sources = vec![
            source("a", (1, 5), (100, 300)),
            source("b", (6, 10), (301, 500)),
        ];
        let continuous_light = CoverageEvaluator::new(
            CoverageConfig::default().with_light(Adjacency::Continuous),
        );
        assert!(!continuous_light.covers_both_axes(
            Interval::new(1, 10),
            Interval::new(100, 500),
            &sources
        ));
        assert_eq!(continuous_light.checker(Axis::Distance).adjacency(), Adjacency::Discrete);
        assert_eq!(continuous_light.checker(Axis::Light).adjacency(), Adjacency::Continuous);
    }

    #[test]
    fn mixed_axis_types() {
        let sources = vec![
            Source::with_id("a", Interval::new(0.0, 2.5), Interval::new(100_u32, 300)),
            Source::with_id("b", Interval::new(2.5, 8.0), Interval::new(250_u32, 500)),
        ];
        let evaluator =
            CoverageEvaluator::new(CoverageConfig::default().with_distance(Adjacency::Continuous));
        assert!(evaluator.covers_both_axes(
            Interval::new(0.0, 8.0),
            Interval::new(100, 500),
            &sources
        ));
    }

    #[test]
    fn evaluate_agrees_with_covers_both_axes() {
        let evaluator = CoverageEvaluator::default();
        let sources = vec![
            source("a", (1, 4), (100, 500)),
            source("b", (6, 10), (100, 500)),
        ];
        let target_distance = Interval::new(1, 10);
        let target_light = Interval::new(100, 500);

        let report = evaluator.evaluate(target_distance, target_light, &sources);
        assert_eq!(
            report.is_covered(),
            evaluator.covers_both_axes(target_distance, target_light, &sources)
        );
        assert_eq!(report.uncovered_axes(), vec![Axis::Distance]);
        assert_eq!(report.distance().gaps()[0].to_string(), "[5, 6)");
        assert_eq!(report.light().blocks().len(), 1);
    }
}
