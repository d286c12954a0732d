//! Scalar types usable as interval bounds.
//!
//! Coverage checks only need two things from a bound: an ordering, and the
//! next grid point after a value (used by the discrete adjacency rule, where
//! an interval ending at `n` touches one starting at `n + 1`).

use std::fmt::Debug;

use qtty::{Quantity, Unit};

/// An ordered scalar that can bound an [`Interval`](crate::coverage::Interval).
///
/// Implemented for all primitive integers, `f32`/`f64`, and
/// [`qtty::Quantity`] so axes can carry physical units.
pub trait Coordinate: Copy + PartialOrd + Debug {
    /// Returns the next grid point after `self` (`self + 1`).
    ///
    /// Integer implementations saturate at `MAX` so the adjacency rule can
    /// never wrap around and merge distant intervals.
    fn successor(self) -> Self;
}

macro_rules! impl_coordinate_int {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                #[inline]
                fn successor(self) -> Self {
                    self.saturating_add(1)
                }
            }
        )*
    };
}

macro_rules! impl_coordinate_float {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                #[inline]
                fn successor(self) -> Self {
                    self + 1.0
                }
            }
        )*
    };
}

impl_coordinate_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_coordinate_float!(f32, f64);

/// One unit of `U` is the grid step for unit-tagged axes.
impl<U> Coordinate for Quantity<U>
where
    U: Unit,
    Quantity<U>: Copy + PartialOrd + Debug,
{
    #[inline]
    fn successor(self) -> Self {
        Quantity::<U>::new(self.value() + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Meter;

    #[test]
    fn integer_successor_adds_one() {
        assert_eq!(4_i32.successor(), 5);
        assert_eq!(0_u8.successor(), 1);
        assert_eq!((-1_i64).successor(), 0);
    }

    #[test]
    fn integer_successor_saturates_at_max() {
        assert_eq!(u8::MAX.successor(), u8::MAX);
        assert_eq!(i32::MAX.successor(), i32::MAX);
        assert_eq!(u64::MAX.successor(), u64::MAX);
    }

    #[test]
    fn float_successor_adds_one() {
        assert_eq!(2.5_f64.successor(), 3.5);
        assert_eq!((-1.0_f32).successor(), 0.0);
    }

    #[test]
    fn quantity_successor_adds_one_unit() {
        let d = Quantity::<Meter>::new(9.0);
        assert_eq!(d.successor().value(), 10.0);
    }
}
