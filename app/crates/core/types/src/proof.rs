//! Proof shapes on both sides of the prover boundary.
//!
//! The prover emits Groth16 points in snarkjs layout; the registrar contract
//! expects a different coordinate ordering for the `b` group. Both shapes are
//! kept as distinct types so the conversion between them is explicit.

use serde::{Deserialize, Serialize};

use crate::keys::UserKeys;

/// Groth16 proof in the prover's native (snarkjs) layout.
///
/// Each coordinate is a decimal string. The rows of `pi_b` carry the two
/// extension-field coordinates in the order the proving library emits them,
/// which is *not* the order the verifier contract consumes them in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverProof {
    /// Proof point A (G1).
    pub pi_a: [String; 2],
    /// Proof point B (G2), two coordinate pairs.
    pub pi_b: [[String; 2]; 2],
    /// Proof point C (G1).
    pub pi_c: [String; 2],
}

/// Groth16 proof points in the registrar contract's argument layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofPoints {
    /// Point A, copied from the prover output.
    pub a: [String; 2],
    /// Point B with each row coordinate-swapped relative to the prover output.
    pub b: [[String; 2]; 2],
    /// Point C, copied from the prover output.
    pub c: [String; 2],
}

/// The complete call-data shape of `register(proof)`.
///
/// `public_signals` is always the 5-tuple
/// `(publicKeyX, publicKeyY, address, chainId, registrationHash)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractProof {
    /// The Groth16 points in verifier ordering.
    pub proof_points: ProofPoints,
    /// The public signal vector, fixed order and arity.
    pub public_signals: [String; 5],
}

/// A proof together with its provenance.
///
/// A `Fallback` proof is a deterministic placeholder produced when the real
/// prover is unavailable; it has the right shape but will not verify
/// on-chain. Callers must check the tag before submitting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "proof", rename_all = "camelCase")]
pub enum GeneratedProof {
    /// Produced by the real constrained-system prover.
    Real(ContractProof),
    /// Deterministic placeholder; not a valid zero-knowledge proof.
    Fallback(ContractProof),
}

impl GeneratedProof {
    /// The contract-ready proof, whichever path produced it.
    pub fn contract_proof(&self) -> &ContractProof {
        match self {
            Self::Real(proof) | Self::Fallback(proof) => proof,
        }
    }

    /// Whether this is the degraded-mode placeholder.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Everything a registration attempt returns to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOutcome {
    /// The tagged proof.
    pub proof: GeneratedProof,
    /// The key material derived for this attempt. Always reflects the real
    /// derived keys, regardless of which proof path was taken.
    pub user_keys: UserKeys,
}
