//! Closed interval representation for coverage checks.

use std::cmp::Ordering;
use std::fmt::Display;

use super::error::IntervalError;
use crate::coordinate::Coordinate;

/// Closed range `[min, max]` contributed by a source or requested as a target.
///
/// The invariant `min <= max` is checked on construction, so a value of this
/// type is always well formed. Intervals are never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: Coordinate> {
    min: T,
    max: T,
}

impl<T: Coordinate> Interval<T> {
    /// Creates interval `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or the bounds cannot be compared (NaN).
    /// Use [`Interval::try_new`] for input that has not been validated.
    pub fn new(min: T, max: T) -> Self {
        match Self::try_new(min, max) {
            Ok(interval) => interval,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates interval `[min, max]`, rejecting malformed bounds.
    ///
    /// ```rust
    /// use dualcover::coverage::{Interval, IntervalError};
    ///
    /// assert!(Interval::try_new(1, 10).is_ok());
    /// assert!(matches!(
    ///     Interval::try_new(10, 1),
    ///     Err(IntervalError::Inverted { .. })
    /// ));
    /// ```
    pub fn try_new(min: T, max: T) -> Result<Self, IntervalError> {
        match min.partial_cmp(&max) {
            Some(Ordering::Less) | Some(Ordering::Equal) => Ok(Self { min, max }),
            Some(Ordering::Greater) => Err(IntervalError::Inverted {
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            }),
            None => Err(IntervalError::Unordered {
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            }),
        }
    }

    /// Creates a degenerate interval covering a single value.
    pub fn point(value: T) -> Self {
        Self::new(value, value)
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    /// Returns true if `value` ∈ `[min, max]`.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns true if `other` lies entirely inside this interval.
    pub fn encloses(&self, other: &Interval<T>) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Checks if this interval shares at least one value with another.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Returns the interval spanning both `self` and `other`.
    ///
    /// Callers are responsible for deciding whether the two actually touch.
    pub(crate) fn span(&self, other: &Interval<T>) -> Interval<T> {
        let min = if other.min < self.min { other.min } else { self.min };
        let max = if other.max > self.max { other.max } else { self.max };
        Interval { min, max }
    }
}

impl<T: Coordinate> Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}, {:?}]", self.min, self.max)
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Interval<T>
where
    T: Coordinate + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("min", &self.min)?;
        s.serialize_field("max", &self.max)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Interval<T>
where
    T: Coordinate + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            min: T,
            max: T,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Self::try_new(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}
