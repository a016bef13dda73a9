//! Scalar multiplication on top of any [`GroupLaw`].

use crate::{GroupLaw, GroupLawError, Point};

use num_bigint::BigInt;
use num_traits::Signed;
use tracing::debug_span;

/// Left-to-right binary scalar multiplication.
///
/// Walks the bits of `scalar` from the most significant one, doubling the
/// accumulator at every step and adding `point` where the bit is set. Uses
/// `O(log n)` group operations and agrees with [`repeated_addition`] for
/// every non-negative scalar.
pub fn double_and_add<G: GroupLaw>(
    group: &G,
    point: &Point<G::Coordinate>,
    scalar: &BigInt,
) -> Result<Point<G::Coordinate>, GroupLawError> {
    if scalar.is_negative() {
        return Err(GroupLawError::InvalidScalar(scalar.clone()));
    }
    let magnitude = scalar.magnitude();
    let _span = debug_span!("double_and_add", bits = magnitude.bits()).entered();

    let mut acc = Point::Identity;
    for i in (0..magnitude.bits()).rev() {
        acc = group.double(&acc)?;
        if magnitude.bit(i) {
            acc = group.add(&acc, point)?;
        }
    }
    Ok(acc)
}

/// Adds `point` to itself `scalar` times.
///
/// Linear in `scalar`; kept as the reference definition of scalar
/// multiplication.
pub fn repeated_addition<G: GroupLaw>(
    group: &G,
    point: &Point<G::Coordinate>,
    scalar: &BigInt,
) -> Result<Point<G::Coordinate>, GroupLawError> {
    if scalar.is_negative() {
        return Err(GroupLawError::InvalidScalar(scalar.clone()));
    }
    let _span = debug_span!("repeated_addition", %scalar).entered();

    let mut acc = Point::Identity;
    let mut count = BigInt::default();
    while &count < scalar {
        acc = group.add(&acc, point)?;
        count += 1u32;
    }
    Ok(acc)
}
