//! Registration proof pipeline.
//!
//! Sequences key derivation, registration hashing, circuit input assembly
//! and off-main-thread proof computation into the single entry point UIs
//! call: [`ProofOrchestrator::generate_registration_proof`].
//!
//! The actual constrained-system prover sits behind the [`ProverBackend`]
//! seam: in the browser it is a web worker running the Groth16 full prove,
//! in tests it is a mock. The client enforces a hard 30 second deadline per
//! attempt; prover failures are absorbed into a deterministic placeholder
//! proof so registration UIs stay responsive even where the prover cannot
//! run, with the degradation visible in the returned
//! [`types::GeneratedProof`] tag.

mod backend;
mod client;
mod convert;
mod error;
mod fallback;
mod inputs;
mod orchestrator;

pub use backend::{ProverBackend, SpawnBackend};
pub use client::{DEFAULT_PROVE_TIMEOUT, ProofWorkerClient};
pub use convert::contract_proof_from_prover;
pub use error::ProveError;
pub use fallback::fallback_proof;
pub use inputs::build_circuit_inputs;
pub use orchestrator::ProofOrchestrator;
