use super::FieldCurve;
use crate::Point;

use hex_literal::hex;
use num_bigint::{BigInt, Sign};

const SECP256K1_MODULUS: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
const SECP256K1_ORDER: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
const SECP256K1_GENERATOR_X: [u8; 32] =
    hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
const SECP256K1_GENERATOR_Y: [u8; 32] =
    hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

// tom256k1 is defined over the secp256k1 scalar field
const TOM256K1_GENERATOR_X: [u8; 32] =
    hex!("ac81a9587b8da43a9519bd50d96191fd8f2c4f66b8f1550e366e3c7f9ed18897");
const TOM256K1_GENERATOR_Y: [u8; 32] =
    hex!("6ad7d16db13c428e5dce61c8bfe2b3860a306d201f059826120e7ac684ee209f");

fn uint(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// A standard curve together with its base point and the order of the group
/// that base point generates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedCurve {
    pub name: &'static str,
    pub curve: FieldCurve,
    pub generator: Point<BigInt>,
    pub order: BigInt,
}

impl NamedCurve {
    pub fn secp256k1() -> Self {
        Self {
            name: "secp256k1",
            curve: FieldCurve::new(0, 7, uint(&SECP256K1_MODULUS)),
            generator: Point::new(uint(&SECP256K1_GENERATOR_X), uint(&SECP256K1_GENERATOR_Y)),
            order: uint(&SECP256K1_ORDER),
        }
    }

    pub fn tom256k1() -> Self {
        Self {
            name: "tom256k1",
            curve: FieldCurve::new(0, 7, uint(&SECP256K1_ORDER)),
            generator: Point::new(uint(&TOM256K1_GENERATOR_X), uint(&TOM256K1_GENERATOR_Y)),
            order: uint(&SECP256K1_MODULUS),
        }
    }

    /// Whether the two curves form a cycle: each one's group order is the
    /// other one's field modulus.
    pub fn is_cycle_of(&self, other: &Self) -> bool {
        &self.order == other.curve.modulus() && &other.order == self.curve.modulus()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::GroupLawError;

    fn hex_int(digits: &str) -> BigInt {
        BigInt::parse_bytes(digits.as_bytes(), 16).unwrap()
    }

    #[test]
    fn generators_on_curve() {
        let secp = NamedCurve::secp256k1();
        let tom = NamedCurve::tom256k1();
        assert!(secp.curve.is_on_curve(&secp.generator));
        assert!(tom.curve.is_on_curve(&tom.generator));
        assert!(secp.curve.is_on_curve(&secp.curve.double(&secp.generator).unwrap()));
        assert!(tom.curve.is_on_curve(&tom.curve.double(&tom.generator).unwrap()));

        // generators swapped between the two fields land off the curve
        assert!(!secp.curve.is_on_curve(&tom.generator));
        assert!(!tom.curve.is_on_curve(&secp.generator));
        assert!(matches!(
            secp.curve.ensure_on_curve(&tom.generator),
            Err(GroupLawError::PointNotOnCurve(_))
        ));
    }

    #[test]
    fn cycle_check() {
        let secp = NamedCurve::secp256k1();
        let tom = NamedCurve::tom256k1();
        assert!(tom.is_cycle_of(&secp));
        assert!(secp.is_cycle_of(&tom));
        assert!(!secp.is_cycle_of(&secp));
    }

    #[test]
    fn point_addition() {
        let secp = NamedCurve::secp256k1();
        let curve = &secp.curve;
        let g = &secp.generator;

        let g2 = curve.double(g).unwrap();
        assert_eq!(
            g2,
            Point::new(
                hex_int("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
                hex_int("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
            )
        );
        assert_eq!(curve.add(g, g).unwrap(), g2);

        let g4 = curve.multiply(g, &BigInt::from(4)).unwrap();
        assert_eq!(curve.double(&g2).unwrap(), g4);
        assert_eq!(curve.add(&g2, &g2).unwrap(), g4);

        let g5 = curve.multiply(g, &BigInt::from(5)).unwrap();
        assert_eq!(curve.add(&g4, g).unwrap(), g5);
        assert!(curve.is_on_curve(&g5));
    }

    #[test]
    fn generator_order() {
        let secp = NamedCurve::secp256k1();
        let curve = &secp.curve;
        let g = &secp.generator;

        assert_eq!(curve.multiply(g, &secp.order).unwrap(), Point::Identity);
        assert_eq!(
            curve.multiply(g, &(&secp.order - 1)).unwrap(),
            curve.negate(g)
        );
        assert_eq!(curve.multiply(g, &(&secp.order + 1)).unwrap(), *g);
    }

    #[test]
    fn large_scalar_is_on_curve() {
        let tom = NamedCurve::tom256k1();
        let point = tom
            .curve
            .multiply(&tom.generator, &BigInt::from(678910))
            .unwrap();
        assert!(tom.curve.is_on_curve(&point));

        let secp = NamedCurve::secp256k1();
        let point = secp
            .curve
            .multiply(&secp.generator, &BigInt::from(123456))
            .unwrap();
        assert!(secp.curve.is_on_curve(&point));
    }
}
