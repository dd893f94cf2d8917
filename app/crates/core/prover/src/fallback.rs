//! Deterministic placeholder proof.
//!
//! Used when the real prover is unavailable (artifacts unreachable, worker
//! failure, timeout). The points are modular-arithmetic combinations of the
//! circuit inputs, so the proof has plausible shape and is reproducible, but
//! it is explicitly *not* a valid zero-knowledge proof and will be rejected
//! by on-chain verification. Callers see the difference through the
//! [`types::GeneratedProof::Fallback`] tag.

use ark_ff::PrimeField;
use num_bigint::BigUint;
use types::{CircuitInputs, ContractProof, ProofPoints};

use crate::error::ProveError;

fn parse_decimal(label: &str, value: &str) -> Result<BigUint, ProveError> {
    value
        .parse()
        .map_err(|_| ProveError::Unexpected(format!("non-decimal {label} in circuit inputs")))
}

/// Build the placeholder proof for `inputs`.
///
/// Pure function of the inputs; public signals are
/// `(publicKeyX, publicKeyY, address, chainId, registrationHash)` exactly as
/// a conformant prover would emit them.
pub fn fallback_proof(inputs: &CircuitInputs) -> Result<ContractProof, ProveError> {
    let modulus: BigUint = ark_bn254::Fr::MODULUS.into();

    let private_key = parse_decimal("private key", &inputs.sender_private_key)?;
    let public_x = parse_decimal("public key x", &inputs.sender_public_key[0])?;
    let public_y = parse_decimal("public key y", &inputs.sender_public_key[1])?;
    let address = parse_decimal("address", &inputs.sender_address)?;
    let chain_id = parse_decimal("chain id", &inputs.chain_id)?;
    let hash = parse_decimal("registration hash", &inputs.registration_hash)?;

    let a1 = &private_key * &public_x % &modulus;
    let a2 = &private_key * &public_y % &modulus;
    let b11 = &address * &chain_id % &modulus;
    let b12 = &hash * &private_key % &modulus;
    let b21 = &public_x * &address % &modulus;
    let b22 = &public_y * &hash % &modulus;
    let c1 = &a1 * &b11 % &modulus;
    let c2 = &a2 * &b22 % &modulus;

    Ok(ContractProof {
        proof_points: ProofPoints {
            a: [a1.to_string(), a2.to_string()],
            b: [
                [b11.to_string(), b12.to_string()],
                [b21.to_string(), b22.to_string()],
            ],
            c: [c1.to_string(), c2.to_string()],
        },
        public_signals: [
            inputs.sender_public_key[0].clone(),
            inputs.sender_public_key[1].clone(),
            inputs.sender_address.clone(),
            inputs.chain_id.clone(),
            inputs.registration_hash.clone(),
        ],
    })
}
