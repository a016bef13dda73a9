#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
pub mod curve;
pub mod parse;
mod point;
pub mod scalar_mul;

pub use curve::{FieldCurve, NamedCurve, RealCurve};
pub use num_bigint::BigInt;
pub use point::Point;
pub use scalar_mul::{double_and_add, repeated_addition};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupLawError {
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: BigInt, modulus: BigInt },
    #[error("scalar must be non-negative, got {0}")]
    InvalidScalar(BigInt),
    #[error("point {0} does not lie on the curve")]
    PointNotOnCurve(String),
    #[error("modulus must be an odd integer greater than 2, got {0}")]
    InvalidModulus(BigInt),
    #[error("curve coefficients are singular (4a^3 + 27b^2 = 0)")]
    SingularCurve,
}

/// Group law shared by the prime field and the real number curve models.
///
/// Generic routines such as [`double_and_add`] are written against this
/// trait, so both models get scalar multiplication from the same code.
pub trait GroupLaw {
    type Coordinate: Clone + PartialEq;

    fn add(
        &self,
        lhs: &Point<Self::Coordinate>,
        rhs: &Point<Self::Coordinate>,
    ) -> Result<Point<Self::Coordinate>, GroupLawError>;

    fn double(
        &self,
        point: &Point<Self::Coordinate>,
    ) -> Result<Point<Self::Coordinate>, GroupLawError>;

    fn negate(&self, point: &Point<Self::Coordinate>) -> Point<Self::Coordinate>;
}
