use crate::algorithm::CompressionAlgorithm;
use crate::state::TriaxialState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Decision record produced once per `compress` call and immutable after
/// return. The dispatcher holds no reference once the call completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionMetadata {
    pub id: Uuid,
    /// Provenance tag of the assembler, with the dispatcher's thermal
    /// marker appended when the store path was taken.
    pub version: String,
    /// Ordered codec path. A store decision is itself a one-element path.
    pub algorithm_path: Vec<CompressionAlgorithm>,
    /// Measured state, or the synthetic hot state on the store path.
    pub state: TriaxialState,
    /// Estimated bits of information per byte over the sampled prefix.
    pub entropy_bits: f64,
    /// Output/input size ratio. 1.0 means unchanged.
    pub coherence_budget: f64,
    pub original_len: usize,
    pub compressed_len: usize,
    /// Opaque artifact from the structural-state provider. Carried for
    /// downstream consumers, never inspected here.
    pub field: serde_json::Value,
    /// Caller-supplied context, passed through untouched.
    pub context: HashMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    /// Wall-clock duration of the dispatch call, for diagnostics.
    pub elapsed_ms: f64,
}

impl CompressionMetadata {
    /// Primary algorithm of the path.
    pub fn algorithm(&self) -> Option<CompressionAlgorithm> {
        self.algorithm_path.first().copied()
    }

    pub fn is_stored(&self) -> bool {
        self.algorithm_path == [CompressionAlgorithm::Store]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> CompressionMetadata {
        CompressionMetadata {
            id: Uuid::new_v4(),
            version: "tgc/1".into(),
            algorithm_path: vec![CompressionAlgorithm::Store],
            state: TriaxialState::hot(),
            entropy_bits: 7.9,
            coherence_budget: 1.0,
            original_len: 1024,
            compressed_len: 1024,
            field: serde_json::Value::Null,
            context: HashMap::new(),
            created_at: Utc::now(),
            elapsed_ms: 0.2,
        }
    }

    #[test]
    fn test_store_path_accessors() {
        let m = sample_metadata();
        assert!(m.is_stored());
        assert_eq!(m.algorithm(), Some(CompressionAlgorithm::Store));
    }

    #[test]
    fn test_metadata_json_roundtrip() {
        let m = sample_metadata();
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"store\""));
        let back: CompressionMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back.algorithm_path, m.algorithm_path);
        assert_eq!(back.original_len, 1024);
    }
}
