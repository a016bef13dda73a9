use crate::scalar_mul::repeated_addition;
use crate::{GroupLaw, GroupLawError, Point};

use num_bigint::BigInt;
use tracing::trace;

/// Curve `y^2 = x^3 + ax + b` over the reals, used as a geometric reference
/// model for the field formulas.
///
/// Arithmetic is plain `f64`, so results near tangency or with nearly
/// collinear inputs may lose precision. Not meant for cryptographic use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealCurve {
    a: f64,
    b: f64,
}

impl RealCurve {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Non-negative `y` with `(x, y)` on the curve, if there is one.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        let rhs = self.rhs(x);
        if rhs < 0.0 {
            None
        } else {
            Some(rhs.sqrt())
        }
    }

    pub fn is_on_curve(&self, point: &Point<f64>, tolerance: f64) -> bool {
        match *point {
            Point::Identity => true,
            Point::Affine { x, y } => (y * y - self.rhs(x)).abs() <= tolerance,
        }
    }

    pub fn negate(&self, point: &Point<f64>) -> Point<f64> {
        match *point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::new(x, -y),
        }
    }

    /// Chord-and-tangent sum. Inverse points are mirrored across the x-axis,
    /// `x1 == x2 && y1 == -y2`, so `(x, y)` and `(-x, y)` are not inverses.
    pub fn sum_points(&self, lhs: &Point<f64>, rhs: &Point<f64>) -> Point<f64> {
        let (x1, y1) = match *lhs {
            Point::Identity => return *rhs,
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match *rhs {
            Point::Identity => return *lhs,
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 && y1 == -y2 {
            trace!(x = x1, "vertical line, sum is the identity");
            return Point::Identity;
        }

        if x1 == x2 {
            return self.tangent(x1, y1);
        }

        let slope = (y2 - y1) / (x2 - x1);
        let x3 = slope * slope - x1 - x2;
        Point::new(x3, -y1 + slope * (x1 - x3))
    }

    pub fn double(&self, point: &Point<f64>) -> Point<f64> {
        match *point {
            Point::Identity => Point::Identity,
            Point::Affine { y, .. } if y == 0.0 => Point::Identity,
            Point::Affine { x, y } => self.tangent(x, y),
        }
    }

    /// `n * point` as `n` repeated additions.
    pub fn multiply(&self, point: &Point<f64>, n: &BigInt) -> Result<Point<f64>, GroupLawError> {
        repeated_addition(self, point, n)
    }

    fn tangent(&self, x: f64, y: f64) -> Point<f64> {
        let slope = (3.0 * x * x + self.a) / (2.0 * y);
        let x3 = slope * slope - 2.0 * x;
        Point::new(x3, -y + slope * (x - x3))
    }

    fn rhs(&self, x: f64) -> f64 {
        x * x * x + self.a * x + self.b
    }
}

impl GroupLaw for RealCurve {
    type Coordinate = f64;

    fn add(&self, lhs: &Point<f64>, rhs: &Point<f64>) -> Result<Point<f64>, GroupLawError> {
        Ok(self.sum_points(lhs, rhs))
    }

    fn double(&self, point: &Point<f64>) -> Result<Point<f64>, GroupLawError> {
        Ok(RealCurve::double(self, point))
    }

    fn negate(&self, point: &Point<f64>) -> Point<f64> {
        RealCurve::negate(self, point)
    }
}
