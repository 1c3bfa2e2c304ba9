
use super::{Expr, OpKind};
use super::factor::{factor_out_power, factor_out_sum};

/// Combines two operands under the given operator, applying whichever
/// arithmetic rule fits: numeric folding, identity and absorbing
/// element elimination, or common-factor extraction. When no rule
/// applies, the result is the plain structural node over both
/// operands.
///
/// Inputs are never mutated; the result is always a fresh tree. The
/// reduction engine accepts a combined node only when it is strictly
/// smaller than the structural pairing, so this function is free to
/// return the plain node as its fallback.
pub fn combine(op: OpKind, x: &Expr, y: &Expr) -> Expr {
  if let (Some(a), Some(b)) = (x.as_number(), y.as_number()) {
    match op {
      OpKind::Sum => return Expr::from(a + b),
      OpKind::Product => return Expr::from(a * b),
      // Numeric powers are not folded; they stay as written.
      OpKind::Power => {}
    }
  }
  match op {
    OpKind::Sum => {
      if x.is_zero() {
        return y.clone();
      }
      if y.is_zero() {
        return x.clone();
      }
      if let Some(factored) = factor_out_sum(x, y) {
        return factored;
      }
      Expr::sum(vec![x.clone(), y.clone()])
    }
    OpKind::Product => {
      if x.is_zero() || y.is_zero() {
        return Expr::zero();
      }
      if x.is_one() {
        return y.clone();
      }
      if y.is_one() {
        return x.clone();
      }
      if let Some(merged) = factor_out_power(x, y) {
        return merged;
      }
      Expr::product(vec![x.clone(), y.clone()])
    }
    OpKind::Power => {
      // The exponent is checked first: x^0 is 1 even when x is 0.
      if y.is_zero() {
        return Expr::one();
      }
      if y.is_one() {
        return x.clone();
      }
      if x.is_zero() {
        return Expr::zero();
      }
      if x.is_one() {
        return Expr::one();
      }
      Expr::power(x.clone(), y.clone())
    }
  }
}
