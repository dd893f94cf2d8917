//! Shared data model for the eERC registration prover.
//!
//! Everything that crosses a boundary lives here: the named circuit signals,
//! the snarkjs-shaped prover output, the verifier-contract call-data shape,
//! the worker message protocol and the key material returned to callers.
//! Field elements are transported as decimal strings so the same values can
//! round-trip through JSON, the worker channel and the JS boundary without
//! loss.

mod address;
mod config;
mod inputs;
mod keys;
mod proof;
mod worker;

pub use address::{Address, AddressError};
pub use config::{CircuitArtifacts, DEFAULT_CIRCUIT_WASM_PATH, DEFAULT_CIRCUIT_ZKEY_PATH};
pub use inputs::CircuitInputs;
pub use keys::{PrivateKeyExport, PublicKeyExport, UserKeys};
pub use proof::{ContractProof, GeneratedProof, ProofPoints, ProverProof, RegistrationOutcome};
pub use worker::{ProveRequest, ProveResponse};
