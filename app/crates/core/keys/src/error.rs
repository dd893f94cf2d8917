//! Key derivation errors.

use thiserror::Error;

/// Errors from key derivation or registration hashing.
///
/// Both are fatal to a registration attempt: a broken randomness source or a
/// misconfigured hash indicates an environment defect, not a recoverable
/// runtime condition.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The operating-system randomness source failed.
    #[error("randomness source failed: {0}")]
    Randomness(#[from] rand::Error),
    /// The Poseidon instance rejected its parameters or inputs.
    #[error("poseidon hash failed: {0}")]
    Hash(#[from] light_poseidon::PoseidonError),
}
