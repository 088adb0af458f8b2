use thiserror::Error;

#[derive(Error, Debug)]
pub enum TgError {
    #[error("State derivation failed: {0}")]
    StateDerivation(String),
    #[error("Codec {algorithm} failed: {reason}")]
    Codec { algorithm: String, reason: String },
    #[error("Metadata assembly failed: {0}")]
    MetadataAssembly(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TgError {
    /// Wrap a codec backend failure with the algorithm it came from.
    pub fn codec(algorithm: impl ToString, reason: impl ToString) -> Self {
        Self::Codec {
            algorithm: algorithm.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TgError>;
