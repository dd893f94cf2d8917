//! Key material returned to the caller for inspection.

use serde::{Deserialize, Serialize};

/// Private scalar in both of its representations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKeyExport {
    /// Uniformly random scalar, full 256-bit range.
    pub raw: String,
    /// The raw scalar reduced modulo the Baby Jubjub subgroup order; the
    /// value actually used inside the circuit.
    pub formatted: String,
}

/// Affine public key coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyExport {
    /// x coordinate as a decimal field element.
    pub x: String,
    /// y coordinate as a decimal field element.
    pub y: String,
}

/// The key material derived for a single registration attempt.
///
/// Exists only for the duration of proof generation plus whatever the caller
/// does with it; never persisted and never reused across attempts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserKeys {
    /// The wallet address this key pair is bound to.
    pub address: String,
    /// The derived private scalar.
    pub private_key: PrivateKeyExport,
    /// The derived public point.
    pub public_key: PublicKeyExport,
    /// Poseidon commitment over `(chainId, privateKey, address)`.
    pub registration_hash: String,
}
