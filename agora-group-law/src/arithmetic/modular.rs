use crate::GroupLawError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

/// Reduces `value` into the canonical range `[0, modulus)`.
///
/// Negative inputs wrap around, so `reduce(-6, 97) == 91`. Panics if
/// `modulus` is zero, and a negative `modulus` yields residues in
/// `(modulus, 0]` instead. [`crate::FieldCurve::new`] does not guard against
/// either, use [`crate::FieldCurve::try_new`] for untrusted moduli.
pub fn reduce(value: &BigInt, modulus: &BigInt) -> BigInt {
    value.mod_floor(modulus)
}

pub fn mul_mod(lhs: &BigInt, rhs: &BigInt, modulus: &BigInt) -> BigInt {
    reduce(&(lhs * rhs), modulus)
}

/// Modular inverse via the extended Euclidean algorithm.
///
/// Returns `NoInverse` when `value` and `modulus` are not coprime, which for a
/// prime modulus only happens when `value ≡ 0`.
pub fn inverse(value: &BigInt, modulus: &BigInt) -> Result<BigInt, GroupLawError> {
    let reduced = reduce(value, modulus);
    let egcd = reduced.extended_gcd(modulus);
    if !egcd.gcd.is_one() {
        return Err(GroupLawError::NoInverse {
            value: reduced,
            modulus: modulus.clone(),
        });
    }
    // NOTE the Bezout coefficient may be negative
    Ok(reduce(&egcd.x, modulus))
}
