//! Worker client: per-call spawn, deadline race, output conversion.

use core::time::Duration;

use futures::future::{Either, select};
use futures::pin_mut;
use types::{CircuitInputs, ContractProof, ProveRequest};

use crate::backend::{ProverBackend, SpawnBackend};
use crate::convert::contract_proof_from_prover;
use crate::error::ProveError;

/// How long a single proof attempt may run before it is cancelled.
pub const DEFAULT_PROVE_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the background prover.
///
/// Spins up a fresh computation unit per call, races the response against
/// the deadline and converts the raw prover output into the contract's
/// argument layout. Whichever side of the race settles first wins; the loser
/// is dropped, which for the backend means the unit is terminated and any
/// partial computation discarded.
pub struct ProofWorkerClient<S> {
    spawner: S,
    timeout: Duration,
}

impl<S: SpawnBackend> ProofWorkerClient<S> {
    /// A client with the default 30 second deadline.
    pub fn new(spawner: S) -> Self {
        Self::with_timeout(spawner, DEFAULT_PROVE_TIMEOUT)
    }

    /// A client with a caller-chosen deadline.
    pub fn with_timeout(spawner: S, timeout: Duration) -> Self {
        Self { spawner, timeout }
    }

    /// The configured deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one proof attempt.
    pub async fn prove(&self, inputs: &CircuitInputs) -> Result<ContractProof, ProveError> {
        let mut backend = self.spawner.spawn()?;
        let request = ProveRequest {
            inputs: inputs.clone(),
        };

        let response = {
            let prove = backend.full_prove(request);
            let deadline = sleep(self.timeout);
            pin_mut!(prove);
            pin_mut!(deadline);
            match select(prove, deadline).await {
                Either::Left((response, _)) => response?,
                Either::Right(((), _)) => return Err(ProveError::Timeout(self.timeout)),
            }
        };
        // the backend is dropped on every exit path, terminating the unit

        if !response.success {
            return Err(ProveError::Worker(
                response
                    .error
                    .unwrap_or_else(|| "prover reported an unknown error".into()),
            ));
        }
        let proof = response
            .proof
            .ok_or_else(|| ProveError::Worker("success response without a proof".into()))?;
        let public_signals = response
            .public_signals
            .ok_or_else(|| ProveError::Worker("success response without public signals".into()))?;

        contract_proof_from_prover(&proof, &public_signals)
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
