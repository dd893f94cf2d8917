//! The registration commitment hash.
//!
//! Circom-parameterized Poseidon over the BN254 scalar field, 3 inputs. The
//! compiled circuit recomputes the same hash; any divergence here is a
//! protocol-breaking bug rather than a runtime error, which is why the exact
//! primitive (circomlib Poseidon, not Poseidon2 or a different parameter
//! set) matters.

use ark_ff::PrimeField;
use light_poseidon::{Poseidon, PoseidonHasher};
use num_bigint::BigUint;
use types::Address;

use crate::error::KeyError;
use crate::keypair::PrivateKey;

/// The circuit's native prime field.
pub type CircuitField = ark_bn254::Fr;

/// Circom Poseidon hash of three field elements.
pub fn poseidon3(inputs: [CircuitField; 3]) -> Result<CircuitField, KeyError> {
    let mut poseidon = Poseidon::<CircuitField>::new_circom(3)?;
    Ok(poseidon.hash(&inputs)?)
}

/// The registration hash binding `(chainId, formattedPrivateKey, address)`,
/// in exactly that argument order.
pub fn registration_hash(
    chain_id: u64,
    private_key: &PrivateKey,
    address: &Address,
) -> Result<CircuitField, KeyError> {
    let private_scalar = CircuitField::from(private_key.formatted_biguint());
    let address_element = CircuitField::from(address.to_biguint());
    poseidon3([CircuitField::from(chain_id), private_scalar, address_element])
}

/// Decimal encoding of a circuit field element.
pub fn field_to_decimal(value: &CircuitField) -> String {
    BigUint::from(value.into_bigint()).to_string()
}
