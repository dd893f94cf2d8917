//! Prover output to contract call-data conversion.
//!
//! The proving library and the verifier contract disagree on the ordering of
//! the two extension-field coordinates inside each row of the `b` point
//! (c0||c1 vs c1||c0). The swap lives in one named function so a change on
//! either side breaks a pinned test instead of silently producing proofs the
//! contract rejects.

use types::{ContractProof, ProofPoints, ProverProof};

use crate::error::ProveError;

/// Swap the two coordinates of one `b` row into verifier ordering.
fn swap_b_row(row: &[String; 2]) -> [String; 2] {
    [row[1].clone(), row[0].clone()]
}

/// Permute a raw prover proof into the registrar contract's argument layout.
///
/// `a` and `c` are copied unchanged; each row of `b` is coordinate-swapped;
/// the public signals pass through, cast to the fixed 5-tuple. A signal
/// vector of any other arity means the prover ran a different circuit and is
/// reported as a worker failure.
pub fn contract_proof_from_prover(
    proof: &ProverProof,
    public_signals: &[String],
) -> Result<ContractProof, ProveError> {
    let public_signals: [String; 5] = public_signals.to_vec().try_into().map_err(|_| {
        ProveError::Worker(format!(
            "expected 5 public signals, got {}",
            public_signals.len()
        ))
    })?;

    Ok(ContractProof {
        proof_points: ProofPoints {
            a: proof.pi_a.clone(),
            b: [swap_b_row(&proof.pi_b[0]), swap_b_row(&proof.pi_b[1])],
            c: proof.pi_c.clone(),
        },
        public_signals,
    })
}
