
use super::Expr;
use super::atom::Atom;
use super::number::Number;

use num::Zero;
use num::pow::Pow;

use std::ops::{Add, Sub, Mul, Div, Neg};

// Simple numeric operands are folded inline when arithmetic is
// performed; anything symbolic builds the corresponding expression
// node and leaves simplification to the reduction engine. Division
// enters the tree as multiplication by the reciprocal, and subtraction
// as addition of a negated operand, so the node set stays closed over
// sums, products, and powers.

fn as_number_pair<'a>(x: &'a Expr, y: &'a Expr) -> Option<(&'a Number, &'a Number)> {
  match (x, y) {
    (Expr::Atom(Atom::Number(a)), Expr::Atom(Atom::Number(b))) => Some((a, b)),
    _ => None,
  }
}

impl Add for Expr {
  type Output = Expr;

  fn add(self, rhs: Expr) -> Expr {
    if let Some((a, b)) = as_number_pair(&self, &rhs) {
      return Expr::from(a + b);
    }
    Expr::sum(vec![self, rhs])
  }
}

impl Sub for Expr {
  type Output = Expr;

  fn sub(self, rhs: Expr) -> Expr {
    if let Some((a, b)) = as_number_pair(&self, &rhs) {
      return Expr::from(a - b);
    }
    Expr::sum(vec![self, -rhs])
  }
}

impl Mul for Expr {
  type Output = Expr;

  fn mul(self, rhs: Expr) -> Expr {
    if let Some((a, b)) = as_number_pair(&self, &rhs) {
      return Expr::from(a * b);
    }
    Expr::product(vec![self, rhs])
  }
}

impl Div for Expr {
  type Output = Expr;

  fn div(self, rhs: Expr) -> Expr {
    match as_number_pair(&self, &rhs) {
      Some((a, b)) if !b.is_zero() => Expr::from(a / b),
      // Division by zero stays structural; the reduction engine deals
      // with the offending node.
      _ => Expr::product(vec![self, Expr::power(rhs, Expr::from(-1))]),
    }
  }
}

impl Neg for Expr {
  type Output = Expr;

  fn neg(self) -> Expr {
    if let Expr::Atom(Atom::Number(n)) = &self {
      return Expr::from(-n);
    }
    Expr::product(vec![Expr::from(-1), self])
  }
}

impl Pow<Expr> for Expr {
  type Output = Expr;

  fn pow(self, rhs: Expr) -> Expr {
    // `^` has a lot of corner cases (zero bases, negative exponents),
    // so we keep it simple here and just eliminate exponents of 0 and
    // 1, leaving the rest for the reduction engine.
    if rhs.is_zero() {
      Expr::one()
    } else if rhs.is_one() {
      self
    } else {
      Expr::power(self, rhs)
    }
  }
}

macro_rules! impl_mixed_arith {
  (impl $trait: ident <$t: ty> for Expr { fn $method: ident };) => {
    impl $trait<$t> for Expr {
      type Output = Expr;

      fn $method(self, rhs: $t) -> Self::Output {
        Expr::$method(self, Expr::from(rhs))
      }
    }

    impl $trait<Expr> for $t {
      type Output = Expr;

      fn $method(self, rhs: Expr) -> Self::Output {
        Expr::$method(Expr::from(self), rhs)
      }
    }
  }
}

impl_mixed_arith! { impl Add<i64> for Expr { fn add }; }
impl_mixed_arith! { impl Sub<i64> for Expr { fn sub }; }
impl_mixed_arith! { impl Mul<i64> for Expr { fn mul }; }
impl_mixed_arith! { impl Div<i64> for Expr { fn div }; }
impl_mixed_arith! { impl Pow<i64> for Expr { fn pow }; }
impl_mixed_arith! { impl Add<Number> for Expr { fn add }; }
impl_mixed_arith! { impl Sub<Number> for Expr { fn sub }; }
impl_mixed_arith! { impl Mul<Number> for Expr { fn mul }; }
impl_mixed_arith! { impl Div<Number> for Expr { fn div }; }
impl_mixed_arith! { impl Pow<Number> for Expr { fn pow }; }

#[cfg(test)]
mod tests {
  use super::*;

  fn var(name: &str) -> Expr {
    Expr::symbol(name).unwrap()
  }

  #[test]
  fn test_numeric_operands_fold() {
    assert_eq!(Expr::from(10) + Expr::from(20), Expr::from(30));
    assert_eq!(Expr::from(10) - Expr::from(20), Expr::from(-10));
    assert_eq!(Expr::from(10) * Expr::from(20), Expr::from(200));
    assert_eq!(Expr::from(4) / Expr::from(2), Expr::from(2));
    assert_eq!(Expr::from(2) / Expr::from(4), Expr::from(Number::ratio(1, 2)));
    assert_eq!(-Expr::from(7), Expr::from(-7));
  }

  #[test]
  fn test_symbolic_operands_build_structure() {
    assert_eq!(
      var("x") + var("y"),
      Expr::Sum(vec![var("x"), var("y")]),
    );
    assert_eq!(
      var("x") * var("y"),
      Expr::Product(vec![var("x"), var("y")]),
    );
    assert_eq!(
      var("x") - var("y"),
      Expr::Sum(vec![
        var("x"),
        Expr::Product(vec![Expr::from(-1), var("y")]),
      ]),
    );
    assert_eq!(
      var("x") / var("y"),
      Expr::Product(vec![
        var("x"),
        Expr::power(var("y"), Expr::from(-1)),
      ]),
    );
    assert_eq!(
      -var("x"),
      Expr::Product(vec![Expr::from(-1), var("x")]),
    );
  }

  #[test]
  fn test_chained_sums_flatten() {
    let expr = Expr::from(1) + var("x") + Expr::from(1);
    assert_eq!(expr, Expr::Sum(vec![Expr::from(1), var("x"), Expr::from(1)]));
  }

  #[test]
  fn test_negation_splices_into_product() {
    let expr = -(Expr::from(2) * var("x"));
    assert_eq!(
      expr,
      Expr::Product(vec![Expr::from(-1), Expr::from(2), var("x")]),
    );
  }

  #[test]
  fn test_mixed_operands_convert() {
    assert_eq!(var("x") + 1, Expr::Sum(vec![var("x"), Expr::from(1)]));
    assert_eq!(2 * var("x"), Expr::Product(vec![Expr::from(2), var("x")]));
    assert_eq!(
      var("x") + Number::ratio(1, 2),
      Expr::Sum(vec![var("x"), Expr::from(Number::ratio(1, 2))]),
    );
  }

  #[test]
  fn test_pow_eliminates_trivial_exponents() {
    assert_eq!(var("x").pow(0), Expr::one());
    assert_eq!(var("x").pow(1), var("x"));
    assert_eq!(var("x").pow(3), Expr::power(var("x"), Expr::from(3)));
  }

  #[test]
  fn test_division_by_zero_stays_structural() {
    assert_eq!(
      Expr::from(1) / Expr::from(0),
      Expr::Product(vec![
        Expr::from(1),
        Expr::power(Expr::from(0), Expr::from(-1)),
      ]),
    );
  }
}
