//! Private scalar generation and public key derivation.

use ark_ed_on_bn254::EdwardsAffine;
use ark_ff::PrimeField;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore, rngs::OsRng};

use crate::curve::{BaseField, SubgroupScalar, mul_base8, subgroup_order};
use crate::error::KeyError;

/// A private scalar in both of its representations.
///
/// `raw` is the full-range 256-bit value drawn from the randomness source;
/// `formatted` is `raw mod subgroupOrder`, the value used for scalar
/// multiplication and inside the circuit. Owned by exactly one registration
/// attempt and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    raw: BigUint,
    formatted: SubgroupScalar,
}

impl PrivateKey {
    /// Draw a fresh private scalar from `rng`.
    ///
    /// Fails only if the randomness source fails; that is fatal and
    /// propagates to the caller.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, KeyError> {
        let mut bytes = [0u8; 32];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self::from_raw(BigUint::from_bytes_le(&bytes)))
    }

    /// Draw a fresh private scalar from the operating-system randomness
    /// source.
    pub fn random() -> Result<Self, KeyError> {
        Self::generate(&mut OsRng)
    }

    /// Build a key pair from a known raw scalar (test vectors, debugging).
    pub fn from_raw(raw: BigUint) -> Self {
        let reduced = &raw % subgroup_order();
        Self {
            formatted: SubgroupScalar::from(reduced),
            raw,
        }
    }

    /// The unreduced scalar.
    pub fn raw(&self) -> &BigUint {
        &self.raw
    }

    /// The scalar reduced into the subgroup order.
    pub fn formatted(&self) -> &SubgroupScalar {
        &self.formatted
    }

    /// The reduced scalar as an unsigned integer.
    pub fn formatted_biguint(&self) -> BigUint {
        self.formatted.into_bigint().into()
    }

    /// Decimal encoding of the unreduced scalar.
    pub fn raw_decimal(&self) -> String {
        self.raw.to_string()
    }

    /// Decimal encoding of the reduced scalar.
    pub fn formatted_decimal(&self) -> String {
        self.formatted_biguint().to_string()
    }
}

/// An affine Baby Jubjub public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: EdwardsAffine,
}

impl PublicKey {
    /// Derive the public key `formatted * BASE8`.
    pub fn derive(private_key: &PrivateKey) -> Self {
        Self {
            point: mul_base8(private_key.formatted()),
        }
    }

    /// The x coordinate.
    pub fn x(&self) -> BaseField {
        self.point.x
    }

    /// The y coordinate.
    pub fn y(&self) -> BaseField {
        self.point.y
    }

    /// Decimal encoding of the x coordinate.
    pub fn x_decimal(&self) -> String {
        BigUint::from(self.point.x.into_bigint()).to_string()
    }

    /// Decimal encoding of the y coordinate.
    pub fn y_decimal(&self) -> String {
        BigUint::from(self.point.y.into_bigint()).to_string()
    }
}
