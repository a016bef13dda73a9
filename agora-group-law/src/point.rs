use std::fmt;

/// A curve point, either the point at infinity or an affine `(x, y)` pair.
///
/// Points carry no reference to a curve; the same value can be fed to any
/// curve whose coordinate type matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Point<T> {
    Identity,
    Affine { x: T, y: T },
}

impl<T> Default for Point<T> {
    fn default() -> Self {
        Self::Identity
    }
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self::Affine { x, y }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn x(&self) -> Option<&T> {
        self.coordinates().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<&T> {
        self.coordinates().map(|(_, y)| y)
    }

    pub fn coordinates(&self) -> Option<(&T, &T)> {
        match self {
            Self::Identity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }

    /// Applies `f` to both coordinates, keeping the identity as is.
    pub fn map<U, F: Fn(&T) -> U>(&self, f: F) -> Point<U> {
        match self {
            Self::Identity => Point::Identity,
            Self::Affine { x, y } => Point::Affine { x: f(x), y: f(y) },
        }
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "O"),
            Self::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn structural_equality() {
        let p = Point::new(BigInt::from(3), BigInt::from(6));
        assert_eq!(p, Point::new(BigInt::from(3), BigInt::from(6)));
        assert_ne!(p, Point::new(BigInt::from(3), BigInt::from(91)));
        assert_ne!(p, Point::Identity);
        assert_eq!(Point::<BigInt>::Identity, Point::default());
    }

    #[test]
    fn accessors() {
        let p = Point::new(-3.0_f64, 9.0);
        assert_eq!(p.x(), Some(&-3.0));
        assert_eq!(p.y(), Some(&9.0));
        assert!(!p.is_identity());

        let o = Point::<f64>::Identity;
        assert!(o.is_identity());
        assert_eq!(o.coordinates(), None);
        assert_eq!(o.map(|c| c * 2.0), Point::Identity);
        assert_eq!(p.map(|c| c * 2.0), Point::new(-6.0, 18.0));
    }

    #[test]
    fn display() {
        let p = Point::new(BigInt::from(80), BigInt::from(10));
        assert_eq!(p.to_string(), "(80, 10)");
        assert_eq!(Point::new(6.25, -4.375).to_string(), "(6.25, -4.375)");
        assert_eq!(Point::<BigInt>::Identity.to_string(), "O");
    }
}
