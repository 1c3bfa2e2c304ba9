
use super::{Expr, OpKind};

/// Incrementally assembles a sum or product node.
///
/// This is the only stage at which a node is mutable: the builder owns
/// its children exclusively, and [`build`](ExprBuilder::build)
/// consumes the builder to publish an immutable [`Expr`]. Appending or
/// prepending a node of the same operator kind splices that node's
/// children in rather than nesting it, so same-operator chains stay
/// maximally flat.
#[derive(Debug)]
pub struct ExprBuilder {
  kind: OpKind,
  children: Vec<Expr>,
}

impl ExprBuilder {
  pub fn sum() -> Self {
    Self { kind: OpKind::Sum, children: Vec::new() }
  }

  pub fn product() -> Self {
    Self { kind: OpKind::Product, children: Vec::new() }
  }

  /// Appends a child at the end, splicing same-kind nodes.
  pub fn append(&mut self, expr: Expr) {
    match (self.kind, expr) {
      (OpKind::Sum, Expr::Sum(grandchildren)) =>
        self.children.extend(grandchildren),
      (OpKind::Product, Expr::Product(grandchildren)) =>
        self.children.extend(grandchildren),
      (_, expr) => self.children.push(expr),
    }
  }

  /// Prepends a child at the front, splicing same-kind nodes. Spliced
  /// children keep their internal order.
  pub fn prepend(&mut self, expr: Expr) {
    match (self.kind, expr) {
      (OpKind::Sum, Expr::Sum(grandchildren)) => {
        self.children.splice(0..0, grandchildren);
      }
      (OpKind::Product, Expr::Product(grandchildren)) => {
        self.children.splice(0..0, grandchildren);
      }
      (_, expr) => self.children.insert(0, expr),
    }
  }

  /// Appends every element of `exprs`, in order.
  pub fn extend(&mut self, exprs: impl IntoIterator<Item = Expr>) {
    for expr in exprs {
      self.append(expr);
    }
  }

  pub fn is_empty(&self) -> bool {
    self.children.is_empty()
  }

  pub fn len(&self) -> usize {
    self.children.len()
  }

  /// Publishes the assembled node. A single child is returned
  /// directly rather than wrapped; zero children produce an empty
  /// composite, which is valid only as a transient value and must not
  /// appear in a finished tree.
  pub fn build(mut self) -> Expr {
    if self.children.len() == 1 {
      return self.children.pop().expect("children is non-empty");
    }
    match self.kind {
      OpKind::Sum => Expr::Sum(self.children),
      OpKind::Product => Expr::Product(self.children),
      OpKind::Power => unreachable!("ExprBuilder only assembles sums and products"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn var(name: &str) -> Expr {
    Expr::symbol(name).unwrap()
  }

  #[test]
  fn test_append_splices_same_kind() {
    let mut builder = ExprBuilder::sum();
    builder.append(var("x"));
    builder.append(Expr::Sum(vec![var("y"), var("z")]));
    assert_eq!(builder.build(), Expr::Sum(vec![var("x"), var("y"), var("z")]));
  }

  #[test]
  fn test_append_nests_other_kinds() {
    let product = Expr::Product(vec![Expr::from(2), var("x")]);
    let mut builder = ExprBuilder::sum();
    builder.append(var("y"));
    builder.append(product.clone());
    assert_eq!(builder.build(), Expr::Sum(vec![var("y"), product]));
  }

  #[test]
  fn test_prepend_splices_in_order() {
    let mut builder = ExprBuilder::product();
    builder.append(var("z"));
    builder.prepend(Expr::Product(vec![var("x"), var("y")]));
    assert_eq!(
      builder.build(),
      Expr::Product(vec![var("x"), var("y"), var("z")]),
    );
  }

  #[test]
  fn test_build_collapses_singleton() {
    let mut builder = ExprBuilder::product();
    builder.append(var("x"));
    assert_eq!(builder.build(), var("x"));
  }

  #[test]
  fn test_empty_builder_is_transient_empty_node() {
    let builder = ExprBuilder::sum();
    assert!(builder.is_empty());
    assert_eq!(builder.build(), Expr::Sum(vec![]));
  }

  #[test]
  fn test_spliced_empty_node_vanishes() {
    let mut builder = ExprBuilder::product();
    builder.append(Expr::Product(vec![]));
    builder.append(var("x"));
    assert_eq!(builder.build(), var("x"));
  }
}
