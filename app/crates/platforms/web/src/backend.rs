//! Bridges the proving worker into the core worker client.

use async_trait::async_trait;
use gloo_worker::Spawnable;
use gloo_worker::oneshot::OneshotBridge;
use prover::{ProveError, ProverBackend, SpawnBackend};
use types::{ProveRequest, ProveResponse};

use crate::worker::RegistrationProver;

/// Where the dApp serves the compiled worker script.
pub const DEFAULT_WORKER_URL: &str = "/zkeERC/workers/registration_worker.js";

/// Spawns one proving worker per proof attempt.
pub struct RegistrationWorkerSpawner {
    worker_url: String,
}

impl RegistrationWorkerSpawner {
    pub fn new(worker_url: impl Into<String>) -> Self {
        Self {
            worker_url: worker_url.into(),
        }
    }
}

impl Default for RegistrationWorkerSpawner {
    fn default() -> Self {
        Self::new(DEFAULT_WORKER_URL)
    }
}

impl SpawnBackend for RegistrationWorkerSpawner {
    type Backend = WorkerBackend;

    fn spawn(&self) -> Result<Self::Backend, ProveError> {
        Ok(WorkerBackend {
            bridge: RegistrationProver::spawner().spawn(&self.worker_url),
        })
    }
}

/// A live bridge to one proving worker. Dropping it terminates the worker,
/// which is how a timed-out prove is cancelled.
pub struct WorkerBackend {
    bridge: OneshotBridge<RegistrationProver>,
}

#[async_trait(?Send)]
impl ProverBackend for WorkerBackend {
    async fn full_prove(&mut self, request: ProveRequest) -> Result<ProveResponse, ProveError> {
        Ok(self.bridge.run(request).await)
    }
}
