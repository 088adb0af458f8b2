//! Metadata construction and container framing.

use std::collections::HashMap;
use tg_core::{CompressionAlgorithm, CompressionMetadata, Result, TgError, TriaxialState};

/// Provenance tag stamped on every assembled metadata record.
pub const CONTAINER_VERSION: &str = "tgc/1";

const MAGIC: &[u8; 4] = b"TGC1";

/// Everything the dispatcher hands over for metadata construction.
/// Identical for the gated and ungated paths; only the values differ.
#[derive(Debug)]
pub struct AssemblyInput<'a> {
    pub original: &'a [u8],
    pub transformed: &'a [u8],
    pub field: &'a serde_json::Value,
    pub state: TriaxialState,
    pub algorithm_path: &'a [CompressionAlgorithm],
    pub entropy_bits: f64,
    pub context: Option<&'a HashMap<String, serde_json::Value>>,
    /// Appended to the provenance tag, set on the thermally gated path.
    pub version_suffix: Option<&'a str>,
    pub elapsed_ms: f64,
}

/// Trait for metadata/container assembly backends.
///
/// Returns the final output bytes together with the finished metadata.
/// Partially built metadata is never returned; a failure aborts the call.
pub trait MetadataAssembler: Send + Sync {
    fn assemble(&self, input: AssemblyInput<'_>) -> Result<(Vec<u8>, CompressionMetadata)>;
}

fn build_metadata(input: &AssemblyInput<'_>) -> CompressionMetadata {
    let version = match input.version_suffix {
        Some(suffix) => format!("{CONTAINER_VERSION} + {suffix}"),
        None => CONTAINER_VERSION.to_string(),
    };
    let coherence_budget = if input.original.is_empty() {
        1.0
    } else {
        input.transformed.len() as f64 / input.original.len() as f64
    };
    CompressionMetadata {
        id: uuid::Uuid::new_v4(),
        version,
        algorithm_path: input.algorithm_path.to_vec(),
        state: input.state,
        entropy_bits: input.entropy_bits,
        coherence_budget,
        original_len: input.original.len(),
        compressed_len: input.transformed.len(),
        field: input.field.clone(),
        context: input.context.cloned().unwrap_or_default(),
        created_at: chrono::Utc::now(),
        elapsed_ms: input.elapsed_ms,
    }
}

/// Default assembler: the output bytes are the transformed payload itself,
/// metadata travels alongside. Keeps the store path byte-for-byte identical
/// to the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineAssembler;

impl MetadataAssembler for InlineAssembler {
    fn assemble(&self, input: AssemblyInput<'_>) -> Result<(Vec<u8>, CompressionMetadata)> {
        let metadata = build_metadata(&input);
        Ok((input.transformed.to_vec(), metadata))
    }
}

/// Framing assembler for callers that persist a single byte stream:
/// magic, big-endian metadata length, metadata JSON, payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerAssembler;

impl MetadataAssembler for ContainerAssembler {
    fn assemble(&self, input: AssemblyInput<'_>) -> Result<(Vec<u8>, CompressionMetadata)> {
        let metadata = build_metadata(&input);
        let header = serde_json::to_vec(&metadata)?;
        let header_len = u32::try_from(header.len())
            .map_err(|_| TgError::MetadataAssembly("metadata header exceeds u32".into()))?;

        let mut container =
            Vec::with_capacity(MAGIC.len() + 4 + header.len() + input.transformed.len());
        container.extend_from_slice(MAGIC);
        container.extend_from_slice(&header_len.to_be_bytes());
        container.extend_from_slice(&header);
        container.extend_from_slice(input.transformed);
        Ok((container, metadata))
    }
}

impl ContainerAssembler {
    /// Split a framed container back into its metadata and payload.
    pub fn split(container: &[u8]) -> Result<(CompressionMetadata, &[u8])> {
        if container.len() < MAGIC.len() + 4 || &container[..4] != MAGIC {
            return Err(TgError::MetadataAssembly("missing container magic".into()));
        }
        let header_len =
            u32::from_be_bytes([container[4], container[5], container[6], container[7]]) as usize;
        let payload_start = 8 + header_len;
        if container.len() < payload_start {
            return Err(TgError::MetadataAssembly("truncated container header".into()));
        }
        let metadata: CompressionMetadata = serde_json::from_slice(&container[8..payload_start])?;
        Ok((metadata, &container[payload_start..]))
    }
}
