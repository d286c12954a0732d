//! Identified sources (cameras) carrying one interval per axis.

use std::fmt::Display;

use super::axes::DualAxis;
use crate::coordinate::Coordinate;
use crate::coverage::{Interval, IntervalError};
use crate::{generate_id, Id};

/// A unit contributing one distance interval and one light interval.
///
/// In the camera domain the distance interval is the focus range and the
/// light interval the usable illuminance range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Source<D: Coordinate, L: Coordinate> {
    id: Id,
    distance: Interval<D>,
    light: Interval<L>,
}

impl<D: Coordinate, L: Coordinate> Source<D, L> {
    /// Creates a source with a freshly generated identifier.
    pub fn new(distance: Interval<D>, light: Interval<L>) -> Self {
        Self::with_id(generate_id(), distance, light)
    }

    pub fn with_id(id: impl Into<Id>, distance: Interval<D>, light: Interval<L>) -> Self {
        Self {
            id: id.into(),
            distance,
            light,
        }
    }

    /// Builds a source from raw bounds, validating both intervals.
    pub fn try_from_bounds(
        id: impl Into<Id>,
        (distance_min, distance_max): (D, D),
        (light_min, light_max): (L, L),
    ) -> Result<Self, IntervalError> {
        Ok(Self::with_id(
            id,
            Interval::try_new(distance_min, distance_max)?,
            Interval::try_new(light_min, light_max)?,
        ))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn distance(&self) -> Interval<D> {
        self.distance
    }

    pub fn light(&self) -> Interval<L> {
        self.light
    }
}

impl<D: Coordinate, L: Coordinate> DualAxis for Source<D, L> {
    type Distance = D;
    type Light = L;

    #[inline]
    fn distance(&self) -> Interval<D> {
        self.distance
    }

    #[inline]
    fn light(&self) -> Interval<L> {
        self.light
    }
}

impl<D: Coordinate, L: Coordinate> Display for Source<D, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (distance {}, light {})",
            self.id, self.distance, self.light
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        let a = Source::new(Interval::new(1, 5), Interval::new(100, 300));
        let b = Source::new(Interval::new(1, 5), Interval::new(100, 300));
        assert_ne!(a.id(), b.id());
        assert!(!a.id().is_empty());
    }

    #[test]
    fn with_id_keeps_given_id() {
        let source = Source::with_id("cam-1", Interval::new(1, 5), Interval::new(100, 300));
        assert_eq!(source.id(), "cam-1");
        assert_eq!(source.distance(), Interval::new(1, 5));
        assert_eq!(source.light(), Interval::new(100, 300));
    }

    #[test]
    fn try_from_bounds_validates_each_axis() {
        assert!(Source::try_from_bounds("ok", (1, 5), (100, 300)).is_ok());

        let err = Source::try_from_bounds("bad-distance", (5, 1), (100, 300)).unwrap_err();
        assert!(matches!(err, IntervalError::Inverted { .. }));

        let err = Source::try_from_bounds("bad-light", (1, 5), (f64::NAN, 300.0)).unwrap_err();
        assert!(matches!(err, IntervalError::Unordered { .. }));
    }

    #[test]
    fn display_includes_both_axes() {
        let source = Source::with_id("cam-1", Interval::new(1, 5), Interval::new(100, 300));
        assert_eq!(source.to_string(), "cam-1 (distance [1, 5], light [100, 300])");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let source = Source::with_id("cam-1", Interval::new(1_u32, 5), Interval::new(100_u32, 300));
        let json = serde_json::to_string(&source).unwrap();
        let back: Source<u32, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, source);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_inverted_axis() {
        let json = r#"{"id":"cam","distance":{"min":9,"max":1},"light":{"min":1,"max":2}}"#;
        let result: Result<Source<u32, u32>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
