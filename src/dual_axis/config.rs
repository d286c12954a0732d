//! Configuration for dual-axis coverage evaluation.

use super::axes::Axis;
use crate::coverage::Adjacency;

/// Per-axis adjacency rules used by a [`CoverageEvaluator`].
///
/// Both axes default to [`Adjacency::Discrete`]: distances in whole metres and
/// light levels in whole lux, where `[a, b]` and `[b + 1, c]` leave no gap.
/// Switch an axis to [`Adjacency::Continuous`] when it carries fractional data.
///
/// [`CoverageEvaluator`]: super::CoverageEvaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoverageConfig {
    /// Adjacency rule on the distance axis.
    pub distance: Adjacency,
    /// Adjacency rule on the light axis.
    pub light: Adjacency,
}

impl CoverageConfig {
    /// Uses the same rule on both axes.
    pub const fn uniform(adjacency: Adjacency) -> Self {
        Self {
            distance: adjacency,
            light: adjacency,
        }
    }

    pub fn with_distance(mut self, adjacency: Adjacency) -> Self {
        self.distance = adjacency;
        self
    }

    pub fn with_light(mut self, adjacency: Adjacency) -> Self {
        self.light = adjacency;
        self
    }

    /// Returns the rule configured for `axis`.
    pub fn adjacency_for(&self, axis: Axis) -> Adjacency {
        match axis {
            Axis::Distance => self.distance,
            Axis::Light => self.light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_discrete() {
        let cfg = CoverageConfig::default();
        assert_eq!(cfg.distance, Adjacency::Discrete);
        assert_eq!(cfg.light, Adjacency::Discrete);
    }

    #[test]
    fn builders_set_single_axis() {
        let cfg = CoverageConfig::default().with_distance(Adjacency::Continuous);
        assert_eq!(cfg.adjacency_for(Axis::Distance), Adjacency::Continuous);
        assert_eq!(cfg.adjacency_for(Axis::Light), Adjacency::Discrete);

        let cfg = cfg.with_light(Adjacency::Continuous);
        assert_eq!(cfg, CoverageConfig::uniform(Adjacency::Continuous));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_config() {
        let cfg: CoverageConfig = serde_json::from_str(r#"{"light":"continuous"}"#).unwrap();
        assert_eq!(cfg.distance, Adjacency::Discrete);
        assert_eq!(cfg.light, Adjacency::Continuous);
    }
}
