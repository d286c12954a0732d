//! Detailed per-axis outcome of a dual-axis evaluation.

use std::fmt::Display;

use super::axes::Axis;
use crate::coordinate::Coordinate;
use crate::coverage::{Gap, Interval, MergedBlocks};

/// Coverage outcome along a single axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisReport<T: Coordinate> {
    axis: Axis,
    target: Interval<T>,
    blocks: MergedBlocks<T>,
    gaps: Vec<Gap<T>>,
}

impl<T: Coordinate> AxisReport<T> {
    pub(crate) fn new(axis: Axis, target: Interval<T>, blocks: MergedBlocks<T>) -> Self {
        let gaps = blocks.gaps(target).collect();
        Self {
            axis,
            target,
            blocks,
            gaps,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn target(&self) -> Interval<T> {
        self.target
    }

    /// Canonical blocks formed from every source's interval on this axis.
    pub fn blocks(&self) -> &MergedBlocks<T> {
        &self.blocks
    }

    /// Uncovered stretches of the target, in ascending order.
    pub fn gaps(&self) -> &[Gap<T>] {
        &self.gaps
    }

    pub fn is_covered(&self) -> bool {
        self.gaps.is_empty()
    }
}

impl<T: Coordinate> Display for AxisReport<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} target {}: ", self.axis, self.target)?;
        if self.is_covered() {
            return write!(f, "covered by {}", self.blocks);
        }
        write!(f, "gaps at ")?;
        for (i, gap) in self.gaps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", gap)?;
        }
        Ok(())
    }
}

/// Outcome of evaluating a set of sources against both axis targets.
#[derive(Debug, Clone, PartialEq)]
pub struct DualAxisReport<D: Coordinate, L: Coordinate> {
    distance: AxisReport<D>,
    light: AxisReport<L>,
}

impl<D: Coordinate, L: Coordinate> DualAxisReport<D, L> {
    pub(crate) fn new(distance: AxisReport<D>, light: AxisReport<L>) -> Self {
        Self { distance, light }
    }

    pub fn distance(&self) -> &AxisReport<D> {
        &self.distance
    }

    pub fn light(&self) -> &AxisReport<L> {
        &self.light
    }

    /// True only if both axes are covered.
    pub fn is_covered(&self) -> bool {
        self.distance.is_covered() && self.light.is_covered()
    }

    /// Axes whose target is not fully covered, in [`Axis::ALL`] order.
    pub fn uncovered_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|axis| match axis {
                Axis::Distance => !self.distance.is_covered(),
                Axis::Light => !self.light.is_covered(),
            })
            .collect()
    }
}

impl<D: Coordinate, L: Coordinate> Display for DualAxisReport<D, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.distance)?;
        write!(f, "{}", self.light)
    }
}
