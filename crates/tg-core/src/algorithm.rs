use serde::{Deserialize, Serialize};
use std::fmt;

/// Codec families the selector can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionAlgorithm {
    /// High-speed, low-ratio block codec.
    FastBlock,
    /// Balanced general-purpose baseline.
    GeneralPurpose,
    /// Large-window codec for strongly delimited data.
    Structured,
    /// Context-transform codec for fluid, low-boundary data.
    Organic,
    /// Robust default, handles chaotic data well.
    RobustAdaptive,
    /// Identity passthrough. Only ever chosen by the thermal gate.
    Store,
}

impl CompressionAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FastBlock => "fast_block",
            Self::GeneralPurpose => "general_purpose",
            Self::Structured => "structured",
            Self::Organic => "organic",
            Self::RobustAdaptive => "robust_adaptive",
            Self::Store => "store",
        }
    }

    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store)
    }
}

impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
