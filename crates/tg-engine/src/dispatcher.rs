//! Dispatch orchestration: estimate, gate, classify, delegate.

use crate::assembler::{AssemblyInput, InlineAssembler, MetadataAssembler};
use crate::entropy::{ByteSample, EntropyEstimator, HistogramEstimator};
use crate::gate::ThermalGate;
use crate::provider::{NeutralStateProvider, StateProvider};
use crate::selector::{AlgorithmSelector, TableSelector};
use std::collections::HashMap;
use std::time::Instant;
use tg_codec::{CodecDelegate, StandardCodecs};
use tg_core::{CompressionAlgorithm, CompressionMetadata, DispatchConfig, Result, TriaxialState};

/// Marker appended to the metadata provenance tag when the gate fires.
pub const THERMAL_VERSION: &str = "thermal/0.1";

/// Prefix length probed for the field artifact on the gated path.
const HOT_PROBE_LEN: usize = 4096;

/// The compression dispatcher. Stateless across calls: every call builds
/// its own sample and returns a self-contained metadata record, so
/// concurrent use needs no locks and no ordering.
///
/// Variant behavior (a different ceiling, a different decision table, a
/// different codec backend) is injected through the strategy fields, not
/// subclassed.
pub struct ThermalDispatcher {
    config: DispatchConfig,
    gate: ThermalGate,
    estimator: Box<dyn EntropyEstimator>,
    selector: Box<dyn AlgorithmSelector>,
    provider: Box<dyn StateProvider>,
    codecs: Box<dyn CodecDelegate>,
    assembler: Box<dyn MetadataAssembler>,
}

impl ThermalDispatcher {
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    /// Build a dispatcher from policy constants, with the default
    /// strategies: histogram estimator, table selector, neutral state
    /// provider, standard codecs, inline assembly.
    pub fn with_config(config: DispatchConfig) -> Self {
        Self {
            gate: ThermalGate::new(config.entropy_ceiling),
            selector: Box::new(TableSelector::new(config.thresholds.clone())),
            estimator: Box::new(HistogramEstimator),
            provider: Box::new(NeutralStateProvider),
            codecs: Box::new(StandardCodecs::new()),
            assembler: Box::new(InlineAssembler),
            config,
        }
    }

    pub fn with_estimator(mut self, estimator: impl EntropyEstimator + 'static) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    pub fn with_selector(mut self, selector: impl AlgorithmSelector + 'static) -> Self {
        self.selector = Box::new(selector);
        self
    }

    pub fn with_provider(mut self, provider: impl StateProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    pub fn with_codecs(mut self, codecs: impl CodecDelegate + 'static) -> Self {
        self.codecs = Box::new(codecs);
        self
    }

    pub fn with_assembler(mut self, assembler: impl MetadataAssembler + 'static) -> Self {
        self.assembler = Box::new(assembler);
        self
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Compress one buffer.
    ///
    /// Order is a correctness contract: sample, estimate, gate, and only
    /// then classification and codec delegation. The optional `context`
    /// map is passed through to the assembler untouched.
    pub fn compress(
        &self,
        data: &[u8],
        context: Option<&HashMap<String, serde_json::Value>>,
    ) -> Result<(Vec<u8>, CompressionMetadata)> {
        let started = Instant::now();
        let sample = ByteSample::take(data, self.config.sample_cap);
        let entropy_bits = self.estimator.estimate(&sample);

        if self.gate.should_throttle(entropy_bits) {
            tracing::debug!(
                entropy_bits,
                ceiling = self.gate.ceiling,
                "thermal throttle, storing without compression"
            );
            // The field artifact is still probed so downstream metadata
            // consumers see one, but the recorded state is the synthetic
            // hot state, not a measurement.
            let probe = ByteSample::take(data, HOT_PROBE_LEN);
            let observation = self.provider.derive(&probe)?;
            let path = [CompressionAlgorithm::Store];
            return self.assembler.assemble(AssemblyInput {
                original: data,
                transformed: data,
                field: &observation.field,
                state: TriaxialState::hot(),
                algorithm_path: &path,
                entropy_bits,
                context,
                version_suffix: Some(THERMAL_VERSION),
                elapsed_ms: elapsed_ms(started),
            });
        }

        let observation = self.provider.derive(&sample)?;
        let algorithm = self.selector.select(&observation.state);
        let transformed = self.codecs.encode(algorithm, data)?;
        tracing::debug!(
            %algorithm,
            original_len = data.len(),
            compressed_len = transformed.len(),
            "dispatch complete"
        );
        let path = [algorithm];
        self.assembler.assemble(AssemblyInput {
            original: data,
            transformed: &transformed,
            field: &observation.field,
            state: observation.state,
            algorithm_path: &path,
            entropy_bits,
            context,
            version_suffix: None,
            elapsed_ms: elapsed_ms(started),
        })
    }
}

impl Default for ThermalDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
