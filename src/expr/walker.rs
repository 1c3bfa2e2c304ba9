
//! Utility functions for walking an expression tree.

use super::Expr;

use std::convert::Infallible;

/// Rebuilds the tree bottom-up, applying `f` to every node after its
/// children have already been walked.
pub fn postorder_walk<E, F>(expr: Expr, mut f: F) -> Result<Expr, E>
where F: FnMut(Expr) -> Result<Expr, E> {
  postorder_walk_impl(expr, &mut f)
}

pub fn postorder_walk_ok<F>(expr: Expr, mut f: F) -> Expr
where F: FnMut(Expr) -> Expr {
  let result: Result<Expr, Infallible> = postorder_walk(expr, |e| Ok(f(e)));
  match result {
    Ok(expr) => expr,
    Err(never) => match never {},
  }
}

fn postorder_walk_impl<E, F>(expr: Expr, f: &mut F) -> Result<Expr, E>
where F: FnMut(Expr) -> Result<Expr, E> {
  let expr = match expr {
    Expr::Atom(atom) => Expr::Atom(atom),
    Expr::Sum(children) => Expr::Sum(walk_children(children, f)?),
    Expr::Product(children) => Expr::Product(walk_children(children, f)?),
    Expr::Power(base, exponent) => Expr::Power(
      Box::new(postorder_walk_impl(*base, f)?),
      Box::new(postorder_walk_impl(*exponent, f)?),
    ),
  };
  f(expr)
}

fn walk_children<E, F>(children: Vec<Expr>, f: &mut F) -> Result<Vec<Expr>, E>
where F: FnMut(Expr) -> Result<Expr, E> {
  children.into_iter().map(|c| postorder_walk_impl(c, f)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::number::Number;

  fn var(name: &str) -> Expr {
    Expr::symbol(name).unwrap()
  }

  #[test]
  fn test_walk_visits_children_before_parents() {
    let expr = Expr::Sum(vec![
      Expr::Product(vec![Expr::from(2), var("x")]),
      Expr::from(1),
    ]);
    let mut seen = Vec::new();
    postorder_walk_ok(expr, |e| {
      seen.push(e.to_string());
      e
    });
    assert_eq!(seen, vec!["2", "x", "2x", "1", "2x + 1"]);
  }

  #[test]
  fn test_walk_rebuilds_from_transformed_children() {
    let expr = Expr::Sum(vec![Expr::from(1), Expr::from(2)]);
    let walked = postorder_walk_ok(expr, |e| {
      match e.as_number() {
        Some(n) => Expr::from(n + &Number::from(10)),
        None => e,
      }
    });
    assert_eq!(walked, Expr::Sum(vec![Expr::from(11), Expr::from(12)]));
  }
}
