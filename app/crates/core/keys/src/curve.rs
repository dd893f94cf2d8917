//! Baby Jubjub subgroup constants and fixed-base multiplication.

use ark_ec::CurveGroup;
use ark_ed_on_bn254::{EdwardsAffine, EdwardsProjective};
use ark_ff::{MontFp, PrimeField};
use num_bigint::BigUint;

/// The coordinate field of Baby Jubjub, i.e. the BN254 scalar field the
/// circuit natively computes in.
pub type BaseField = ark_ed_on_bn254::Fq;

/// Scalars modulo the prime subgroup order. Private keys live here.
pub type SubgroupScalar = ark_ed_on_bn254::Fr;

/// The circomlib subgroup generator (`8 * G`), the fixed base all public
/// keys are derived from. Must match the generator baked into the circuit.
pub const BASE8: EdwardsAffine = EdwardsAffine::new_unchecked(
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553"),
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203"),
);

/// The order of the prime subgroup generated by [`BASE8`].
pub fn subgroup_order() -> BigUint {
    SubgroupScalar::MODULUS.into()
}

/// Fixed-base multiplication `scalar * BASE8`.
///
/// Pure and deterministic. The scalar type already guarantees the
/// `[0, subgroupOrder)` range.
pub fn mul_base8(scalar: &SubgroupScalar) -> EdwardsAffine {
    (EdwardsProjective::from(BASE8) * scalar).into_affine()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::PrimeGroup;
    use ark_ff::Field;
    use ark_std::Zero;

    #[test]
    fn base8_is_a_subgroup_generator() {
        assert!(BASE8.is_on_curve());
        assert!(BASE8.is_in_correct_subgroup_assuming_on_curve());
        // multiplying by the subgroup order lands on the identity
        let scaled = EdwardsProjective::from(BASE8).mul_bigint(SubgroupScalar::MODULUS);
        assert!(scaled.is_zero());
    }

    #[test]
    fn subgroup_order_matches_circomlib() {
        assert_eq!(
            subgroup_order().to_string(),
            "2736030358979909402780800718157159386076813972158567259200215660948447373041"
        );
    }

    #[test]
    fn mul_base8_by_one_is_base8() {
        assert_eq!(mul_base8(&SubgroupScalar::ONE), BASE8);
    }
}
