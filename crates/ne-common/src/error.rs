use thiserror::Error;

/// Errors raised at the engine's entry points. Sparse or unparseable profile
/// content is never an error: the encoder resolves it to documented neutral
/// values. Only structurally malformed input and invalid weight vectors are
/// rejected, and weight validation happens when weights are loaded, never
/// while a batch is being scored.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
    #[error("invalid candidate profile {id:?}: {reason}")]
    InvalidCandidate { id: String, reason: String },
    #[error("invalid job offer {id:?}: {reason}")]
    InvalidOffer { id: String, reason: String },
}
