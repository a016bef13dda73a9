use crate::arithmetic::{inverse, mul_mod, reduce};
use crate::scalar_mul::double_and_add;
use crate::{GroupLaw, GroupLawError, Point};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use tracing::trace;

/// Short Weierstrass curve `y^2 = x^3 + ax + b` over the prime field `F_p`.
///
/// The modulus is assumed to be an odd prime and the coefficients
/// non-singular; use [`FieldCurve::try_new`] for a basic sanity check.
/// Coefficients outside `[0, p)` are interpreted modulo `p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldCurve {
    a: BigInt,
    b: BigInt,
    p: BigInt,
}

impl FieldCurve {
    /// Unchecked constructor. A zero modulus makes every operation panic and a
    /// negative one breaks canonical residues, see [`FieldCurve::try_new`].
    pub fn new(a: impl Into<BigInt>, b: impl Into<BigInt>, p: impl Into<BigInt>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            p: p.into(),
        }
    }

    /// Same as [`FieldCurve::new`] but rejects an even (or too small) modulus
    /// and singular coefficients. Primality is not checked.
    pub fn try_new(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        p: impl Into<BigInt>,
    ) -> Result<Self, GroupLawError> {
        let curve = Self::new(a, b, p);
        if curve.p < BigInt::from(3) || curve.p.is_even() {
            return Err(GroupLawError::InvalidModulus(curve.p));
        }
        if curve.is_singular() {
            return Err(GroupLawError::SingularCurve);
        }
        Ok(curve)
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    /// Builds an affine point with coordinates reduced into `[0, p)`.
    pub fn point(&self, x: impl Into<BigInt>, y: impl Into<BigInt>) -> Point<BigInt> {
        Point::new(reduce(&x.into(), &self.p), reduce(&y.into(), &self.p))
    }

    pub fn is_singular(&self) -> bool {
        let a3 = &self.a * &self.a * &self.a;
        let b2 = &self.b * &self.b;
        reduce(&(a3 * 4 + b2 * 27), &self.p).is_zero()
    }

    pub fn is_on_curve(&self, point: &Point<BigInt>) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                let rhs = x * x * x + &self.a * x + &self.b;
                reduce(&(y * y - rhs), &self.p).is_zero()
            }
        }
    }

    pub fn ensure_on_curve(&self, point: &Point<BigInt>) -> Result<(), GroupLawError> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            Err(GroupLawError::PointNotOnCurve(point.to_string()))
        }
    }

    pub fn negate(&self, point: &Point<BigInt>) -> Point<BigInt> {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::new(reduce(x, &self.p), reduce(&-y, &self.p)),
        }
    }

    pub fn add(
        &self,
        lhs: &Point<BigInt>,
        rhs: &Point<BigInt>,
    ) -> Result<Point<BigInt>, GroupLawError> {
        let (x1, y1) = match self.normalize(lhs) {
            Point::Identity => return Ok(self.normalize(rhs)),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match self.normalize(rhs) {
            Point::Identity => return Ok(Point::new(x1, y1)),
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 && y1 == y2 {
            return self.double(&Point::new(x1, y1));
        }

        let dx = reduce(&(&x1 - &x2), &self.p);
        if dx.is_zero() {
            trace!(x = %x1, "vertical secant, sum is the identity");
            return Ok(Point::Identity);
        }

        let slope = mul_mod(&(&y1 - &y2), &inverse(&dx, &self.p)?, &self.p);
        let x3 = reduce(&(&slope * &slope - &x1 - &x2), &self.p);
        let y3 = reduce(&(&slope * (&x1 - &x3) - &y1), &self.p);

        Ok(Point::new(x3, y3))
    }

    pub fn double(&self, point: &Point<BigInt>) -> Result<Point<BigInt>, GroupLawError> {
        let (x, y) = match self.normalize(point) {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (x, y),
        };

        if y.is_zero() {
            trace!(x = %x, "vertical tangent, double is the identity");
            return Ok(Point::Identity);
        }

        let numerator = &x * &x * 3 + &self.a;
        let slope = mul_mod(&numerator, &inverse(&(&y * 2), &self.p)?, &self.p);
        let x3 = reduce(&(&slope * &slope - &x * 2), &self.p);
        let y3 = reduce(&(&slope * (&x - &x3) - &y), &self.p);

        Ok(Point::new(x3, y3))
    }

    /// Computes `n * point` with double-and-add over the bits of `n`.
    pub fn multiply(
        &self,
        point: &Point<BigInt>,
        n: &BigInt,
    ) -> Result<Point<BigInt>, GroupLawError> {
        double_and_add(self, point, n)
    }

    fn normalize(&self, point: &Point<BigInt>) -> Point<BigInt> {
        point.map(|coordinate| reduce(coordinate, &self.p))
    }
}

impl GroupLaw for FieldCurve {
    type Coordinate = BigInt;

    fn add(
        &self,
        lhs: &Point<BigInt>,
        rhs: &Point<BigInt>,
    ) -> Result<Point<BigInt>, GroupLawError> {
        FieldCurve::add(self, lhs, rhs)
    }

    fn double(&self, point: &Point<BigInt>) -> Result<Point<BigInt>, GroupLawError> {
        FieldCurve::double(self, point)
    }

    fn negate(&self, point: &Point<BigInt>) -> Point<BigInt> {
        FieldCurve::negate(self, point)
    }
}
