use tg_core::{CompressionAlgorithm, Result};

/// Trait for codec backends.
///
/// The dispatcher only selects the algorithm identifier; it never
/// validates codec output. A backend failure is surfaced to the caller
/// unchanged, with no retry and no fallback to a different family.
pub trait CodecDelegate: Send + Sync {
    /// Transform `data` with the codec behind `algorithm`.
    /// `Store` must be the identity.
    fn encode(&self, algorithm: CompressionAlgorithm, data: &[u8]) -> Result<Vec<u8>>;

    /// Reverse of `encode` for the same algorithm.
    fn decode(&self, algorithm: CompressionAlgorithm, data: &[u8]) -> Result<Vec<u8>>;
}
