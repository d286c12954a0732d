//! Interval coverage: merging candidate intervals into canonical blocks and
//! walking them to decide whether a target is covered without a gap.
//!
//! The entry point is [`is_fully_covered`] (discrete adjacency) or a
//! [`CoverageChecker`] configured with an explicit [`Adjacency`] rule.

mod adjacency;
mod checker;
mod error;
mod gaps;
mod interval;
mod merged_blocks;


pub use adjacency::Adjacency;
pub use checker::{is_fully_covered, CoverageChecker};
pub use error::IntervalError;
pub use gaps::{Gap, Gaps};
pub use interval::Interval;
pub use merged_blocks::MergedBlocks;
