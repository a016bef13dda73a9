use crate::{FieldCurve, GroupLawError, Point};

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid integer literal: {0:?}")]
    InvalidInteger(String),
    #[error(transparent)]
    Curve(#[from] GroupLawError),
}

/// Curve parameters as they appear in configuration files.
///
/// Every field is a decimal literal or a `0x`-prefixed hex literal, with an
/// optional leading minus sign.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveParams {
    pub a: String,
    pub b: String,
    pub modulus: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointCoords {
    pub x: String,
    pub y: String,
}

impl TryFrom<CurveParams> for FieldCurve {
    type Error = ParseError;
    fn try_from(rhs: CurveParams) -> Result<Self, Self::Error> {
        let a = parse_integer(&rhs.a)?;
        let b = parse_integer(&rhs.b)?;
        let modulus = parse_integer(&rhs.modulus)?;
        Ok(FieldCurve::try_new(a, b, modulus)?)
    }
}

impl TryFrom<PointCoords> for Point<BigInt> {
    type Error = ParseError;
    fn try_from(rhs: PointCoords) -> Result<Self, Self::Error> {
        Ok(Point::new(parse_integer(&rhs.x)?, parse_integer(&rhs.y)?))
    }
}

pub fn parse_integer(literal: &str) -> Result<BigInt, ParseError> {
    let invalid = || ParseError::InvalidInteger(literal.to_string());
    let trimmed = literal.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };
    // NOTE `parse_bytes` also takes its own sign and `_` separators, so the
    // body is restricted to plain digits before handing it over
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    let parsed = BigInt::parse_bytes(digits.as_bytes(), radix);
    let value = parsed.ok_or_else(invalid)?;
    Ok(if negative { -value } else { value })
}
