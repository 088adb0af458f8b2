use serde::{Deserialize, Serialize};

/// Policy constants for the dispatcher. All overridable by the caller;
/// the defaults are the tuned production values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Entropy ceiling in bits/byte above which the thermal gate fires.
    pub entropy_ceiling: f64,
    /// Maximum number of prefix bytes sampled for entropy estimation.
    pub sample_cap: usize,
    pub thresholds: AxisThresholds,
}

/// Classification thresholds for the triaxial state, one pair per
/// directional axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisThresholds {
    pub precision_high: f64,
    pub precision_low: f64,
    pub boundary_high: f64,
    pub boundary_low: f64,
    pub temporal_high: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            entropy_ceiling: 7.5,
            sample_cap: 5 * 1024 * 1024,
            thresholds: AxisThresholds::default(),
        }
    }
}

impl Default for AxisThresholds {
    fn default() -> Self {
        Self {
            precision_high: 1.0,
            precision_low: -1.0,
            boundary_high: 1.0,
            boundary_low: -1.0,
            temporal_high: 1.0,
        }
    }
}
