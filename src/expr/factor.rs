
use super::{Expr, is_equal, reduce};

use thiserror::Error;

/// The outcome of matching the children of two composite nodes
/// against each other: the children both sides share, and what each
/// side has left over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonFactors {
  pub common: Vec<Expr>,
  pub left: Vec<Expr>,
  pub right: Vec<Expr>,
}

/// An internal operation was invoked on nodes violating its documented
/// precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("common-factor search requires two composite nodes of the same kind")]
#[non_exhaustive]
pub struct PreconditionError {}

/// Finds the children shared between two composite nodes of the same
/// kind. Children are matched by structural equality, not identity;
/// matching is greedy, so the first equal child wins and no attempt is
/// made to find a globally optimal pairing. Fails fast if either node
/// is a terminal or the kinds differ.
pub fn find_common(x: &Expr, y: &Expr) -> Result<CommonFactors, PreconditionError> {
  match (x, y) {
    (Expr::Sum(xs), Expr::Sum(ys)) => Ok(find_common_children(xs, ys)),
    (Expr::Product(xs), Expr::Product(ys)) => Ok(find_common_children(xs, ys)),
    (Expr::Power(xb, xe), Expr::Power(yb, ye)) => {
      let xs = [(**xb).clone(), (**xe).clone()];
      let ys = [(**yb).clone(), (**ye).clone()];
      Ok(find_common_children(&xs, &ys))
    }
    _ => Err(PreconditionError {}),
  }
}

fn find_common_children(xs: &[Expr], ys: &[Expr]) -> CommonFactors {
  let mut left: Vec<Expr> = xs.to_vec();
  let mut common = Vec::new();
  let mut right = Vec::new();
  for yc in ys {
    match left.iter().position(|xc| is_equal(xc, yc)) {
      Some(pos) => {
        left.remove(pos);
        common.push(yc.clone());
      }
      None => right.push(yc.clone()),
    }
  }
  CommonFactors { common, left, right }
}

/// Tries to shrink `x + y` by pulling out a shared multiplicative
/// factor. Each operand is viewed as a product (a bare term is a
/// product of that single factor); if the two factor lists share
/// nothing, or factoring does not make the sum of the leftovers any
/// smaller, reports no improvement.
pub(crate) fn factor_out_sum(x: &Expr, y: &Expr) -> Option<Expr> {
  let xs = product_factors(x);
  let ys = product_factors(y);
  let CommonFactors { common, left, right } = find_common_children(&xs, &ys);
  if common.is_empty() {
    return None;
  }
  let candidate = Expr::sum(vec![product_or_one(left), product_or_one(right)]);
  let reduced = reduce(&candidate);
  if reduced.size() >= candidate.size() {
    return None;
  }
  Some(reduce(&Expr::product(vec![reduced, Expr::product(common)])))
}

/// Tries to merge `x * y` into a single power. Each operand is viewed
/// as a power (a bare term has exponent 1); the merge applies only
/// when the bases are structurally equal and the summed exponent
/// reduces to something smaller than the sum itself.
pub(crate) fn factor_out_power(x: &Expr, y: &Expr) -> Option<Expr> {
  let (x_base, x_exponent) = power_parts(x);
  let (y_base, y_exponent) = power_parts(y);
  if !is_equal(&x_base, &y_base) {
    return None;
  }
  let raw = Expr::sum(vec![x_exponent, y_exponent]);
  let exponent = reduce(&raw);
  if exponent.size() >= raw.size() {
    return None;
  }
  Some(reduce(&Expr::power(x_base, exponent)))
}

fn product_factors(expr: &Expr) -> Vec<Expr> {
  match expr {
    Expr::Product(children) => children.clone(),
    other => vec![other.clone()],
  }
}

fn power_parts(expr: &Expr) -> (Expr, Expr) {
  match expr {
    Expr::Power(base, exponent) => ((**base).clone(), (**exponent).clone()),
    other => (other.clone(), Expr::one()),
  }
}

/// An empty factor list stands for the multiplicative identity, not an
/// empty product.
fn product_or_one(factors: Vec<Expr>) -> Expr {
  if factors.is_empty() {
    Expr::one()
  } else {
    Expr::product(factors)
  }
}
