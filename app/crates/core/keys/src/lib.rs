//! Baby Jubjub key derivation and registration hashing.
//!
//! The registration circuit works over the BN254 scalar field and uses Baby
//! Jubjub (the twisted Edwards curve embedded in that field) for its key
//! pair. This crate owns the two operations that must match the circuit
//! bit-for-bit:
//!
//! - fixed-base scalar multiplication against the circomlib subgroup
//!   generator (`BASE8`), and
//! - the 3-input circom Poseidon commitment binding
//!   `(chainId, privateKey, address)`.
//!
//! A mismatch in either breaks proof verification with no visible error
//! until on-chain rejection, so both carry pinned test vectors.

mod curve;
mod error;
mod hash;
mod keypair;

pub use curve::{BASE8, BaseField, SubgroupScalar, mul_base8, subgroup_order};
pub use error::KeyError;
pub use hash::{CircuitField, field_to_decimal, poseidon3, registration_hash};
pub use keypair::{PrivateKey, PublicKey};
