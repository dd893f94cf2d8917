//! Orchestrator-level tests with mock prover backends.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use prover::{
    ProofOrchestrator, ProofWorkerClient, ProveError, ProverBackend, SpawnBackend,
};
use types::{CircuitInputs, ProveRequest, ProveResponse, ProverProof};

const ADDRESS_ONES: &str = "0x1111111111111111111111111111111111111111";
const ADDRESS_ONES_DECIMAL: &str = "97433442488726861213578988847752201310395502865";

#[derive(Clone, Copy)]
enum Behaviour {
    /// Respond like a conformant prover: fixed points, echoed public signals.
    Echo,
    /// Report a prover-side failure.
    Fail,
    /// Never respond.
    Never,
}

struct MockBackend {
    behaviour: Behaviour,
    dropped: Rc<Cell<bool>>,
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.dropped.set(true);
    }
}

#[async_trait(?Send)]
impl ProverBackend for MockBackend {
    async fn full_prove(&mut self, request: ProveRequest) -> Result<ProveResponse, ProveError> {
        match self.behaviour {
            Behaviour::Echo => {
                let inputs = request.inputs;
                let proof = ProverProof {
                    pi_a: ["11".into(), "12".into()],
                    pi_b: [["21".into(), "22".into()], ["23".into(), "24".into()]],
                    pi_c: ["31".into(), "32".into()],
                };
                let signals = vec![
                    inputs.sender_public_key[0].clone(),
                    inputs.sender_public_key[1].clone(),
                    inputs.sender_address,
                    inputs.chain_id,
                    inputs.registration_hash,
                ];
                Ok(ProveResponse::ok(proof, signals))
            }
            Behaviour::Fail => Ok(ProveResponse::err("failed to load circuit files")),
            Behaviour::Never => {
                let response: ProveResponse = futures::future::pending().await;
                Ok(response)
            }
        }
    }
}

#[derive(Clone)]
struct MockSpawner {
    behaviour: Behaviour,
    spawned: Rc<Cell<usize>>,
    dropped: Rc<Cell<bool>>,
}

impl MockSpawner {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            spawned: Rc::new(Cell::new(0)),
            dropped: Rc::new(Cell::new(false)),
        }
    }
}

impl SpawnBackend for MockSpawner {
    type Backend = MockBackend;

    fn spawn(&self) -> Result<Self::Backend, ProveError> {
        self.spawned.set(self.spawned.get() + 1);
        Ok(MockBackend {
            behaviour: self.behaviour,
            dropped: Rc::clone(&self.dropped),
        })
    }
}

fn orchestrator(spawner: MockSpawner) -> ProofOrchestrator<MockSpawner> {
    ProofOrchestrator::new(ProofWorkerClient::new(spawner))
}

fn sample_inputs() -> CircuitInputs {
    CircuitInputs {
        sender_private_key: "7".into(),
        sender_public_key: ["11".into(), "13".into()],
        sender_address: ADDRESS_ONES_DECIMAL.into(),
        chain_id: "43113".into(),
        registration_hash: "17".into(),
    }
}

#[tokio::test]
async fn real_proof_round_trips_through_the_worker() -> anyhow::Result<()> {
    let spawner = MockSpawner::new(Behaviour::Echo);
    let outcome = orchestrator(spawner.clone())
        .generate_registration_proof("0x2222222222222222222222222222222222222222", 1)
        .await?;

    assert!(!outcome.proof.is_fallback());
    let contract = outcome.proof.contract_proof();

    // public signals come back in the fixed order, matching the derived keys
    let keys = &outcome.user_keys;
    assert_eq!(
        contract.public_signals,
        [
            keys.public_key.x.clone(),
            keys.public_key.y.clone(),
            "194866884977453722427157977695504402620791005730".to_string(),
            "1".to_string(),
            keys.registration_hash.clone(),
        ]
    );

    // the b rows are the coordinate-swapped prover output
    assert_eq!(
        contract.proof_points.b,
        [["22".to_string(), "21".to_string()], ["24".to_string(), "23".to_string()]]
    );
    assert_eq!(contract.proof_points.a, ["11".to_string(), "12".to_string()]);
    assert_eq!(contract.proof_points.c, ["31".to_string(), "32".to_string()]);

    assert_eq!(spawner.spawned.get(), 1);
    Ok(())
}

#[tokio::test]
async fn worker_failure_falls_back_without_rejecting() -> anyhow::Result<()> {
    let spawner = MockSpawner::new(Behaviour::Fail);
    let outcome = orchestrator(spawner)
        .generate_registration_proof(ADDRESS_ONES, 43_113)
        .await?;

    assert!(outcome.proof.is_fallback());
    let signals = &outcome.proof.contract_proof().public_signals;
    assert_eq!(signals[2], ADDRESS_ONES_DECIMAL);
    assert_eq!(signals[3], "43113");

    // user keys reflect the genuinely derived material
    assert_eq!(signals[0], outcome.user_keys.public_key.x);
    assert_eq!(signals[1], outcome.user_keys.public_key.y);
    assert_eq!(signals[4], outcome.user_keys.registration_hash);
    assert_eq!(outcome.user_keys.address, ADDRESS_ONES);
    Ok(())
}

#[tokio::test]
async fn timeout_rejects_and_terminates_the_backend() {
    let spawner = MockSpawner::new(Behaviour::Never);
    let client = ProofWorkerClient::with_timeout(spawner.clone(), Duration::from_millis(50));

    let started = Instant::now();
    let err = client
        .prove(&sample_inputs())
        .await
        .expect_err("a silent backend must time out");
    let elapsed = started.elapsed();

    assert!(matches!(err, ProveError::Timeout(_)));
    assert!(elapsed >= Duration::from_millis(50), "returned too early: {elapsed:?}");
    assert!(elapsed < Duration::from_secs(5), "deadline not enforced: {elapsed:?}");
    assert!(spawner.dropped.get(), "backend must be torn down after the timeout");
}

#[tokio::test]
async fn timed_out_prover_still_resolves_with_fallback() -> anyhow::Result<()> {
    let spawner = MockSpawner::new(Behaviour::Never);
    let client = ProofWorkerClient::with_timeout(spawner, Duration::from_millis(50));
    let outcome = ProofOrchestrator::new(client)
        .generate_registration_proof(ADDRESS_ONES, 43_113)
        .await?;
    assert!(outcome.proof.is_fallback());
    Ok(())
}

#[tokio::test]
async fn invalid_address_rejects_before_any_spawn() {
    let spawner = MockSpawner::new(Behaviour::Echo);
    let err = orchestrator(spawner.clone())
        .generate_registration_proof("not-an-address", 1)
        .await
        .expect_err("malformed address must be rejected");

    assert!(matches!(err, ProveError::InvalidInput(_)));
    assert_eq!(spawner.spawned.get(), 0, "no worker may be spawned for bad input");
}

#[tokio::test]
async fn concurrent_calls_derive_independent_keys() -> anyhow::Result<()> {
    let orchestrator = orchestrator(MockSpawner::new(Behaviour::Echo));
    let (left, right) = futures::join!(
        orchestrator.generate_registration_proof(ADDRESS_ONES, 43_113),
        orchestrator
            .generate_registration_proof("0x2222222222222222222222222222222222222222", 43_113),
    );
    let (left, right) = (left?, right?);

    assert_ne!(left.user_keys.private_key.raw, right.user_keys.private_key.raw);
    assert_ne!(left.user_keys.public_key.x, right.user_keys.public_key.x);
    assert_ne!(left.user_keys.registration_hash, right.user_keys.registration_hash);
    Ok(())
}

#[tokio::test]
async fn each_call_spawns_a_fresh_backend() -> anyhow::Result<()> {
    let spawner = MockSpawner::new(Behaviour::Echo);
    let orchestrator = orchestrator(spawner.clone());
    orchestrator
        .generate_registration_proof(ADDRESS_ONES, 43_113)
        .await?;
    orchestrator
        .generate_registration_proof(ADDRESS_ONES, 43_113)
        .await?;
    assert_eq!(spawner.spawned.get(), 2);
    Ok(())
}
