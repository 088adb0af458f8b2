//! Structural-state provider boundary.

use crate::entropy::ByteSample;
use tg_core::{Result, TriaxialState};

/// A derived structural state plus the provider's opaque field artifact.
/// The artifact travels into metadata for downstream consumers; the
/// engine's own decisions never read it.
#[derive(Debug, Clone)]
pub struct StateObservation {
    pub state: TriaxialState,
    pub field: serde_json::Value,
}

/// Trait for structural-state analyzers.
///
/// A failure here is fatal for the call: substituting a default state
/// silently would mask which algorithm was truly chosen.
pub trait StateProvider: Send + Sync {
    fn derive(&self, sample: &ByteSample) -> Result<StateObservation>;
}

/// Default provider: no analysis, all axes zero. Every un-analyzed input
/// falls through the decision table to the robust fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralStateProvider;

impl StateProvider for NeutralStateProvider {
    fn derive(&self, _sample: &ByteSample) -> Result<StateObservation> {
        Ok(StateObservation {
            state: TriaxialState::default(),
            field: serde_json::Value::Null,
        })
    }
}

/// Provider returning one configured state, for callers that already know
/// the shape of their workload (log shippers, document stores).
#[derive(Debug, Clone, Copy)]
pub struct FixedStateProvider {
    pub state: TriaxialState,
}

impl FixedStateProvider {
    pub fn new(state: TriaxialState) -> Self {
        Self { state }
    }
}

impl StateProvider for FixedStateProvider {
    fn derive(&self, _sample: &ByteSample) -> Result<StateObservation> {
        Ok(StateObservation {
            state: self.state,
            field: serde_json::Value::Null,
        })
    }
}
