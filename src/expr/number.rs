
use num::{BigInt, BigRational, Zero, One};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops;
use std::str::FromStr;

/// Exact real number type, stored as either an arbitrary-precision
/// integer or a rational number.
///
/// A rational value whose denominator divides evenly into its
/// numerator is normalized to the integer representation at
/// construction time, so a given mathematical value always has exactly
/// one representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number {
  inner: NumberImpl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum NumberImpl {
  Integer(BigInt),
  Ratio(BigRational),
}

/// Two numbers promoted to their common representation, so arithmetic
/// can be written once per representation rather than once per pair.
enum NumberPair {
  Integers(BigInt, BigInt),
  Ratios(BigRational, BigRational),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse number")]
#[non_exhaustive]
pub struct ParseNumberError {}

impl Number {
  /// Produces a rational number. If the denominator divides evenly
  /// into the numerator, the result will be stored as an integer.
  ///
  /// Panics if `denom == 0`.
  pub fn ratio(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Number {
    Number::from(BigRational::new(numer.into(), denom.into()))
  }

  /// If this number is an integer, its value.
  pub fn as_integer(&self) -> Option<&BigInt> {
    match &self.inner {
      NumberImpl::Integer(i) => Some(i),
      NumberImpl::Ratio(_) => None,
    }
  }

  pub fn is_integer(&self) -> bool {
    self.as_integer().is_some()
  }

  /// Simplify representation. A rational which is in fact an integer
  /// converts to the integer representation.
  fn simplify(self) -> Number {
    if let NumberImpl::Ratio(r) = &self.inner {
      if r.denom().is_one() {
        return Number::from(r.numer().clone());
      }
    }
    self
  }
}

impl NumberPair {
  fn promote(left: Number, right: Number) -> NumberPair {
    match (left.inner, right.inner) {
      (NumberImpl::Integer(a), NumberImpl::Integer(b)) =>
        NumberPair::Integers(a, b),
      (NumberImpl::Integer(a), NumberImpl::Ratio(b)) =>
        NumberPair::Ratios(BigRational::from(a), b),
      (NumberImpl::Ratio(a), NumberImpl::Integer(b)) =>
        NumberPair::Ratios(a, BigRational::from(b)),
      (NumberImpl::Ratio(a), NumberImpl::Ratio(b)) =>
        NumberPair::Ratios(a, b),
    }
  }
}

impl From<BigInt> for Number {
  fn from(i: BigInt) -> Number {
    Number { inner: NumberImpl::Integer(i) }
  }
}

impl From<BigRational> for Number {
  fn from(r: BigRational) -> Number {
    Number { inner: NumberImpl::Ratio(r) }.simplify()
  }
}

impl From<i64> for Number {
  fn from(i: i64) -> Number {
    Number::from(BigInt::from(i))
  }
}

impl Display for Number {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      NumberImpl::Integer(i) => i.fmt(f),
      NumberImpl::Ratio(r) => write!(f, "{}:{}", r.numer(), r.denom()),
    }
  }
}

/// `PartialEq` compares the numerical value. Since representations are
/// normalized at construction, equal values always compare equal.
impl PartialEq for Number {
  fn eq(&self, other: &Number) -> bool {
    match NumberPair::promote(self.clone(), other.clone()) {
      NumberPair::Integers(left, right) => left == right,
      NumberPair::Ratios(left, right) => left == right,
    }
  }
}

impl Eq for Number {}

impl PartialOrd for Number {
  fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Number {
  fn cmp(&self, other: &Number) -> Ordering {
    match NumberPair::promote(self.clone(), other.clone()) {
      NumberPair::Integers(left, right) => left.cmp(&right),
      NumberPair::Ratios(left, right) => left.cmp(&right),
    }
  }
}

impl ops::Add for Number {
  type Output = Number;

  fn add(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => Number::from(left + right),
      NumberPair::Ratios(left, right) => Number::from(left + right),
    }
  }
}

impl ops::Add for &Number {
  type Output = Number;

  fn add(self, other: &Number) -> Number {
    (*self).clone() + (*other).clone()
  }
}

impl ops::Sub for Number {
  type Output = Number;

  fn sub(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => Number::from(left - right),
      NumberPair::Ratios(left, right) => Number::from(left - right),
    }
  }
}

impl ops::Sub for &Number {
  type Output = Number;

  fn sub(self, other: &Number) -> Number {
    (*self).clone() - (*other).clone()
  }
}

impl ops::Mul for Number {
  type Output = Number;

  fn mul(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => Number::from(left * right),
      NumberPair::Ratios(left, right) => Number::from(left * right),
    }
  }
}

impl ops::Mul for &Number {
  type Output = Number;

  fn mul(self, other: &Number) -> Number {
    (*self).clone() * (*other).clone()
  }
}

/// This division will not truncate, even for two integer inputs; the
/// result is an exact rational.
///
/// Panics if `other == 0`.
impl ops::Div for Number {
  type Output = Number;

  fn div(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) =>
        Number::from(BigRational::new(left, right)),
      NumberPair::Ratios(left, right) => Number::from(left / right),
    }
  }
}

impl ops::Div for &Number {
  type Output = Number;

  fn div(self, other: &Number) -> Number {
    (*self).clone() / (*other).clone()
  }
}

impl ops::Neg for Number {
  type Output = Number;

  fn neg(self) -> Number {
    match self.inner {
      NumberImpl::Integer(i) => Number::from(-i),
      NumberImpl::Ratio(r) => Number::from(-r),
    }
  }
}

impl ops::Neg for &Number {
  type Output = Number;

  fn neg(self) -> Number {
    (*self).clone().neg()
  }
}

impl Zero for Number {
  fn zero() -> Number {
    Number::from(0i64)
  }
  fn is_zero(&self) -> bool {
    match &self.inner {
      NumberImpl::Integer(i) => i.is_zero(),
      NumberImpl::Ratio(r) => r.is_zero(),
    }
  }
}

impl One for Number {
  fn one() -> Number {
    Number::from(1i64)
  }
  fn is_one(&self) -> bool {
    match &self.inner {
      NumberImpl::Integer(i) => i.is_one(),
      NumberImpl::Ratio(r) => r.is_one(),
    }
  }
}

impl FromStr for Number {
  type Err = ParseNumberError;

  fn from_str(s: &str) -> Result<Number, ParseNumberError> {
    parse_integer(s).or_else(|| parse_ratio(s)).ok_or(ParseNumberError {})
  }
}

fn parse_integer(s: &str) -> Option<Number> {
  BigInt::from_str(s).map(Number::from).ok()
}

fn parse_ratio(s: &str) -> Option<Number> {
  static RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?\d+):([+-]?\d+)$").unwrap()
  });
  let caps = RE.captures(s)?;
  // The regex guarantees both captures parse as integers.
  let numerator = BigInt::from_str(caps.get(1).unwrap().as_str()).unwrap();
  let denominator = BigInt::from_str(caps.get(2).unwrap().as_str()).unwrap();
  if denominator.is_zero() {
    // Fail the parse.
    return None;
  }
  Some(Number::from(BigRational::new(numerator, denominator)))
}
