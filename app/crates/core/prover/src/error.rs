//! Proof pipeline errors.

use core::time::Duration;

use thiserror::Error;
use types::AddressError;

/// Errors surfaced by the proof pipeline.
///
/// Only the prover-stage variants (`ArtifactFetch`, `Timeout`, `Worker`) are
/// recoverable, and only by substituting the placeholder proof; everything
/// upstream of proving indicates a logic or environment defect and is fatal
/// to the call.
#[derive(Debug, Error)]
pub enum ProveError {
    /// Malformed address or chain id. Fatal, raised before any worker spawn.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Circuit artifacts could not be fetched.
    #[error("failed to fetch circuit artifacts: {0}")]
    ArtifactFetch(String),
    /// The background prover did not respond within the deadline.
    #[error("proof generation timed out after {0:?}")]
    Timeout(Duration),
    /// The background prover reported an error or returned garbage.
    #[error("prover worker failed: {0}")]
    Worker(String),
    /// Anything escaping the handling above.
    #[error("proof generation failed: {0}")]
    Unexpected(String),
}

impl ProveError {
    /// Whether the orchestrator may absorb this error by falling back to the
    /// placeholder proof.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ArtifactFetch(_) | Self::Timeout(_) | Self::Worker(_)
        )
    }
}

impl From<AddressError> for ProveError {
    fn from(err: AddressError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<keys::KeyError> for ProveError {
    fn from(err: keys::KeyError) -> Self {
        Self::Unexpected(err.to_string())
    }
}
