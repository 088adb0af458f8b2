//! Thermogate core types — shared vocabulary for the compression dispatcher.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod metadata;
pub mod state;

pub use algorithm::CompressionAlgorithm;
pub use config::{AxisThresholds, DispatchConfig};
pub use error::{Result, TgError};
pub use metadata::CompressionMetadata;
pub use state::{AxisRatios, TriaxialState};
