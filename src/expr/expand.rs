
use super::Expr;

use itertools::repeat_n;
use num::traits::ToPrimitive;

/// Applies the distributive law, pushing products into sums and
/// unrolling non-negative integer powers into repeated products.
///
/// Expansion works bottom-up: children are expanded first, then a
/// product with a sum among its children distributes over the first
/// such sum. Any further sums among the children ride along inside the
/// per-term products and are picked up when those products are
/// re-expanded, so a single call fully distributes nested structure.
pub fn expand(expr: &Expr) -> Expr {
  match expr {
    Expr::Atom(_) => expr.clone(),
    Expr::Sum(children) => Expr::sum(children.iter().map(expand).collect()),
    Expr::Product(children) => expand_product(children.iter().map(expand).collect()),
    Expr::Power(base, exponent) => expand_power(expand(base), expand(exponent)),
  }
}

fn expand_product(children: Vec<Expr>) -> Expr {
  let Some(pos) = children.iter().position(|c| matches!(c, Expr::Sum(_))) else {
    return Expr::product(children);
  };
  let mut others = children;
  let terms = match others.remove(pos) {
    Expr::Sum(terms) => terms,
    _ => unreachable!("position() found a sum at this index"),
  };
  let factor = Expr::product(others);
  let distributed = terms.into_iter()
    .map(|term| expand(&Expr::product(vec![factor.clone(), term])))
    .collect();
  Expr::sum(distributed)
}

fn expand_power(base: Expr, exponent: Expr) -> Expr {
  match unroll_count(&exponent) {
    // A product of zero copies is the multiplicative identity.
    Some(0) => Expr::one(),
    Some(n) => expand_product(repeat_n(base, n).collect()),
    // Negative and non-integer exponents are left as written.
    None => Expr::power(base, exponent),
  }
}

fn unroll_count(exponent: &Expr) -> Option<usize> {
  exponent.as_number()?.as_integer()?.to_usize()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::{is_equal, reduce};

  fn var(name: &str) -> Expr {
    Expr::symbol(name).unwrap()
  }

  #[test]
  fn test_terminals_expand_to_themselves() {
    assert_eq!(expand(&Expr::from(3)), Expr::from(3));
    assert_eq!(expand(&var("x")), var("x"));
  }

  #[test]
  fn test_product_distributes_over_sum() {
    let expr = Expr::Product(vec![
      Expr::from(2),
      Expr::Sum(vec![var("x"), Expr::from(2)]),
    ]);
    assert_eq!(expand(&expr), Expr::Sum(vec![
      Expr::Product(vec![Expr::from(2), var("x")]),
      Expr::Product(vec![Expr::from(2), Expr::from(2)]),
    ]));
  }

  #[test]
  fn test_product_of_two_sums_distributes_fully() {
    let expr = Expr::Product(vec![
      Expr::Sum(vec![var("a"), var("b")]),
      Expr::Sum(vec![var("c"), var("d")]),
    ]);
    assert_eq!(expand(&expr), Expr::Sum(vec![
      Expr::Product(vec![var("a"), var("c")]),
      Expr::Product(vec![var("a"), var("d")]),
      Expr::Product(vec![var("b"), var("c")]),
      Expr::Product(vec![var("b"), var("d")]),
    ]));
  }

  #[test]
  fn test_integer_power_unrolls() {
    let expr = Expr::power(var("x"), Expr::from(3));
    assert_eq!(
      expand(&expr),
      Expr::Product(vec![var("x"), var("x"), var("x")]),
    );
  }

  #[test]
  fn test_power_of_sum_expands() {
    let expr = Expr::power(Expr::Sum(vec![var("a"), var("b")]), Expr::from(2));
    assert_eq!(expand(&expr), Expr::Sum(vec![
      Expr::Product(vec![var("a"), var("a")]),
      Expr::Product(vec![var("a"), var("b")]),
      Expr::Product(vec![var("b"), var("a")]),
      Expr::Product(vec![var("b"), var("b")]),
    ]));
  }

  #[test]
  fn test_zero_power_expands_to_one() {
    let expr = Expr::power(var("x"), Expr::from(0));
    assert_eq!(expand(&expr), Expr::one());
  }

  #[test]
  fn test_negative_and_symbolic_exponents_stay_unexpanded() {
    let negative = Expr::power(var("x"), Expr::from(-2));
    assert_eq!(expand(&negative), negative);
    let symbolic = Expr::power(var("x"), var("n"));
    assert_eq!(expand(&symbolic), symbolic);
    let rational = Expr::power(var("x"), Expr::try_from("1:2").unwrap());
    assert_eq!(expand(&rational), rational);
  }

  #[test]
  fn test_expansion_preserves_value() {
    let exprs = [
      Expr::Sum(vec![Expr::from(1), var("x"), Expr::from(1)]),
      Expr::Product(vec![Expr::from(2), var("x"), var("y")]),
      Expr::power(var("x"), Expr::from(3)),
      Expr::power(var("x"), Expr::from(-2)),
    ];
    for expr in exprs {
      assert!(is_equal(&expr, &expand(&expr)), "expansion changed {expr}");
    }
  }

  #[test]
  fn test_expanded_square_reduces_to_binomial_form() {
    let expr = Expr::power(Expr::Sum(vec![var("a"), var("b")]), Expr::from(2));
    let normal = reduce(&expand(&expr));
    assert_eq!(normal.to_string(), "a^2 + 2ba + b^2");
  }
}
