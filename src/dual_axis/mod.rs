//! Dual-axis coverage: a set of sources covers a target only if it covers
//! both the distance target and the light target.
//!
//! Each source is projected onto the two axes through the [`DualAxis`] trait,
//! and the interval coverage checker runs once per axis.

mod axes;
mod config;
mod evaluator;
mod report;
mod source;


pub use axes::{Axis, DualAxis};
pub use config::CoverageConfig;
pub use evaluator::{covers_both_axes, CoverageEvaluator};
pub use report::{AxisReport, DualAxisReport};
pub use source::Source;
