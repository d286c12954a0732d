//! The two coverage axes and the trait projecting a source onto them.
//!
//! Each source contributes exactly one interval per axis. The evaluator never
//! looks at a source beyond these two projections, so anything that can name
//! a distance range and a light range can be evaluated:
//!
//! | Type                            | `Distance` | `Light` |
//! |---------------------------------|------------|---------|
//! | [`Source<D, L>`]                | `D`        | `L`     |
//! | `(Interval<D>, Interval<L>)`    | `D`        | `L`     |
//!
//! [`Source<D, L>`]: super::Source

use std::fmt::Display;

use crate::coordinate::Coordinate;
use crate::coverage::Interval;

/// One of the two independent dimensions a source covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    Distance,
    Light,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Distance, Axis::Light];
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Distance => write!(f, "distance"),
            Axis::Light => write!(f, "light"),
        }
    }
}

/// Something contributing one distance interval and one light interval.
pub trait DualAxis {
    /// Scalar type of the distance axis.
    type Distance: Coordinate;
    /// Scalar type of the light axis.
    type Light: Coordinate;

    fn distance(&self) -> Interval<Self::Distance>;

    fn light(&self) -> Interval<Self::Light>;
}

/// A bare `(distance, light)` pair is the anonymous form of a source.
impl<D: Coordinate, L: Coordinate> DualAxis for (Interval<D>, Interval<L>) {
    type Distance = D;
    type Light = L;

    #[inline]
    fn distance(&self) -> Interval<D> {
        self.0
    }

    #[inline]
    fn light(&self) -> Interval<L> {
        self.1
    }
}

impl<S: DualAxis> DualAxis for &S {
    type Distance = S::Distance;
    type Light = S::Light;

    #[inline]
    fn distance(&self) -> Interval<S::Distance> {
        (**self).distance()
    }

    #[inline]
    fn light(&self) -> Interval<S::Light> {
        (**self).light()
    }
}

/// Splits `sources` into one interval list per axis.
pub(crate) fn project<S: DualAxis>(
    sources: &[S],
) -> (Vec<Interval<S::Distance>>, Vec<Interval<S::Light>>) {
    sources.iter().map(|s| (s.distance(), s.light())).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_projects_both_axes() {
        let pair = (Interval::new(1, 5), Interval::new(100_u32, 300));
        assert_eq!(pair.distance(), Interval::new(1, 5));
        assert_eq!(pair.light(), Interval::new(100, 300));
    }

    #[test]
    fn reference_projects_like_owner() {
        let pair = (Interval::new(1, 5), Interval::new(100_u32, 300));
        let by_ref = &pair;
        assert_eq!(DualAxis::distance(&by_ref), Interval::new(1, 5));
        assert_eq!(DualAxis::light(&by_ref), Interval::new(100, 300));
    }

    #[test]
    fn project_keeps_source_order() {
        let sources = [
            (Interval::new(6, 10), Interval::new(30, 50)),
            (Interval::new(1, 5), Interval::new(10, 29)),
        ];
        let (distances, lights) = project(&sources);
        assert_eq!(distances, vec![Interval::new(6, 10), Interval::new(1, 5)]);
        assert_eq!(lights, vec![Interval::new(30, 50), Interval::new(10, 29)]);
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::Distance.to_string(), "distance");
        assert_eq!(Axis::Light.to_string(), "light");
        assert_eq!(Axis::ALL, [Axis::Distance, Axis::Light]);
    }
}
