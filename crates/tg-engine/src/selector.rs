//! Algorithm selection from the classified triaxial state.

use tg_core::{AxisThresholds, CompressionAlgorithm, TriaxialState};

/// Trait for selection strategies mapping a structural state to a codec
/// family.
pub trait AlgorithmSelector: Send + Sync {
    fn select(&self, state: &TriaxialState) -> CompressionAlgorithm;
}

/// Static decision table over the three axes.
///
/// Evaluated top to bottom, first match wins. The ordering is part of the
/// contract: axes are not mutually exclusive, so a high-precision,
/// high-boundary state must land on the precision rule.
#[derive(Debug, Clone, Default)]
pub struct TableSelector {
    pub thresholds: AxisThresholds,
}

impl TableSelector {
    pub fn new(thresholds: AxisThresholds) -> Self {
        Self { thresholds }
    }
}

impl AlgorithmSelector for TableSelector {
    fn select(&self, state: &TriaxialState) -> CompressionAlgorithm {
        let th = &self.thresholds;

        // Highly regular data compresses fast and well with a low-overhead
        // block codec.
        if state.precision > th.precision_high {
            return CompressionAlgorithm::FastBlock;
        }
        // Irregular/fuzzy data: the general baseline is the safe default.
        if state.precision < th.precision_low {
            return CompressionAlgorithm::GeneralPurpose;
        }
        // Strongly delimited data benefits from large-window context
        // modeling.
        if state.boundary > th.boundary_high {
            return CompressionAlgorithm::Structured;
        }
        // Fluid data benefits from a context-transform codec.
        if state.boundary < th.boundary_low {
            return CompressionAlgorithm::Organic;
        }
        // Chaotic data needs a codec robust to poor local redundancy.
        if state.temporal > th.temporal_high {
            return CompressionAlgorithm::RobustAdaptive;
        }
        // No axis crossed its threshold.
        CompressionAlgorithm::RobustAdaptive
    }
}
