use crate::config::AxisThresholds;
use serde::{Deserialize, Serialize};

/// Three-axis structural fingerprint of a byte sample.
///
/// Each axis conventionally ranges -3.0..+3.0, but classification treats
/// out-of-range values as beyond the nearest threshold, so nothing here
/// clamps or validates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriaxialState {
    /// Structural regularity. High = highly repetitive (logs), low = fuzzy.
    pub precision: f64,
    /// Delimiter strength. High = strongly structured (markup), low = fluid.
    pub boundary: f64,
    /// Volatility. High = chaotic/noisy.
    pub temporal: f64,
}

/// Raw per-axis ratios against the classification thresholds.
/// How to combine them into a single health figure is the consumer's call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRatios {
    pub precision: f64,
    pub boundary: f64,
    pub temporal: f64,
}

impl TriaxialState {
    pub fn new(precision: f64, boundary: f64, temporal: f64) -> Self {
        Self { precision, boundary, temporal }
    }

    /// Synthetic state recorded when the thermal gate fires: temporal
    /// pinned high, the other axes zeroed. Marks *why* the store path was
    /// taken, not a measured observation.
    pub fn hot() -> Self {
        Self { precision: 0.0, boundary: 0.0, temporal: 2.5 }
    }

    /// Each axis divided by the magnitude of its upper threshold.
    /// A zero threshold yields a zero ratio rather than an infinity.
    pub fn axis_ratios(&self, thresholds: &AxisThresholds) -> AxisRatios {
        fn ratio(value: f64, threshold: f64) -> f64 {
            if threshold == 0.0 { 0.0 } else { value / threshold.abs() }
        }
        AxisRatios {
            precision: ratio(self.precision, thresholds.precision_high),
            boundary: ratio(self.boundary, thresholds.boundary_high),
            temporal: ratio(self.temporal, thresholds.temporal_high),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hot_state() {
        let s = TriaxialState::hot();
        assert_eq!(s.precision, 0.0);
        assert_eq!(s.boundary, 0.0);
        assert!(s.temporal > 1.0);
    }

    #[test]
    fn test_axis_ratios() {
        let s = TriaxialState::new(2.0, -0.5, 1.0);
        let r = s.axis_ratios(&AxisThresholds::default());
        assert_eq!(r.precision, 2.0);
        assert_eq!(r.boundary, -0.5);
        assert_eq!(r.temporal, 1.0);
    }

    #[test]
    fn test_axis_ratios_zero_threshold() {
        let s = TriaxialState::new(2.0, 2.0, 2.0);
        let mut th = AxisThresholds::default();
        th.boundary_high = 0.0;
        let r = s.axis_ratios(&th);
        assert_eq!(r.boundary, 0.0);
        assert_eq!(r.precision, 2.0);
    }
}
