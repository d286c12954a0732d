//! dualcover - contiguous interval coverage across distance and light axes.
//!
//! Determines whether intervals drawn from several independent sources
//! jointly cover a target interval with no gap, and whether a set of
//! sources covers both a distance target and a light target at once.
//!
//! ```rust
//! use dualcover::coverage::Interval;
//! use dualcover::dual_axis::Source;
//!
//! let sources = vec![
//!     Source::new(Interval::new(6, 10), Interval::new(30, 50)),
//!     Source::new(Interval::new(1, 5), Interval::new(10, 29)),
//! ];
//! assert!(dualcover::covers_both_axes(Interval::new(1, 10), Interval::new(10, 50), &sources));
//! ```

pub mod coordinate;
pub mod coverage;
pub mod dual_axis;

pub use coordinate::Coordinate;
pub use coverage::is_fully_covered;
pub use dual_axis::covers_both_axes;

/// Identifier type used for sources.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
