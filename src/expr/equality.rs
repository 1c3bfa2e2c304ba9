
use super::{Expr, reduce};

/// Structural equivalence up to commutativity and associativity.
///
/// Both sides are reduced first, so trees that merely wrote the same
/// value differently (e.g. `x + x` against `2x`) compare equal. The
/// children of same-kind composites are then matched as multisets:
/// order does not matter, but multiplicity does. Matching is greedy,
/// with each child of the left tree taking the first equal child
/// remaining on the right.
pub fn is_equal(x: &Expr, y: &Expr) -> bool {
  let x = reduce(x);
  let y = reduce(y);
  match (&x, &y) {
    (Expr::Atom(a), Expr::Atom(b)) => a == b,
    (Expr::Sum(xs), Expr::Sum(ys)) =>
      multiset_matches(xs.iter().collect(), ys.iter().collect()),
    (Expr::Product(xs), Expr::Product(ys)) =>
      multiset_matches(xs.iter().collect(), ys.iter().collect()),
    (Expr::Power(xb, xe), Expr::Power(yb, ye)) =>
      multiset_matches(
        vec![xb.as_ref(), xe.as_ref()],
        vec![yb.as_ref(), ye.as_ref()],
      ),
    _ => false,
  }
}

fn multiset_matches(xs: Vec<&Expr>, ys: Vec<&Expr>) -> bool {
  let mut remaining = ys;
  for xc in xs {
    match remaining.iter().position(|yc| is_equal(xc, yc)) {
      Some(pos) => {
        remaining.remove(pos);
      }
      None => return false,
    }
  }
  remaining.is_empty()
}
