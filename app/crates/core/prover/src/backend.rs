//! The prover backend seam.
//!
//! The constrained-system prover runs in an isolated background context and
//! talks message-passing: one request, one response, then the unit is torn
//! down. Dropping a backend terminates its computation unit; that is the
//! only cancellation mechanism.

use async_trait::async_trait;
use types::{ProveRequest, ProveResponse};

use crate::error::ProveError;

/// A single-use background prover.
#[async_trait(?Send)]
pub trait ProverBackend {
    /// Run the full prove (witness generation plus proof computation) for
    /// one request.
    ///
    /// Transport-level failures are errors; a prover that ran but could not
    /// prove reports `success: false` in the response instead.
    async fn full_prove(&mut self, request: ProveRequest) -> Result<ProveResponse, ProveError>;
}

/// Factory spinning up one [`ProverBackend`] per proof attempt.
///
/// Keeping the factory separate from the backend makes the per-call
/// lifecycle explicit and lets tests observe how often (and whether) a unit
/// was spawned.
pub trait SpawnBackend {
    /// The backend type this factory produces.
    type Backend: ProverBackend;

    /// Spin up a fresh computation unit.
    fn spawn(&self) -> Result<Self::Backend, ProveError>;
}
