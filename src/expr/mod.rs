
pub mod arithmetic;
pub mod atom;
pub mod builder;
pub mod combine;
pub mod display;
pub mod equality;
pub mod expand;
pub mod factor;
pub mod number;
pub mod reduce;
pub mod symbol;
pub mod walker;

pub use combine::combine;
pub use equality::is_equal;
pub use expand::expand;
pub use reduce::reduce;

use atom::Atom;
use builder::ExprBuilder;
use number::{Number, ParseNumberError};
use symbol::{Symbol, ParseSymbolError};

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::str::FromStr;

/// The cost of a symbol terminal under [`Expr::size`]. Symbols cost
/// far more than numbers, so an accepted rewrite collapses numeric
/// structure rather than duplicating symbolic sub-expressions.
const SYMBOL_SIZE: u64 = 1000;

/// An arithmetic expression tree.
///
/// The node set is closed: numeric literals and symbols at the leaves,
/// with sums, products, and powers above them. Sums and products hold
/// any number of children in insertion order; a power is always
/// exactly a base and an exponent.
///
/// Published values are immutable. Construction goes through the
/// flattening constructors here (or [`ExprBuilder`] for incremental
/// assembly), which maintain two invariants: a sum or product never
/// holds a child of its own kind (same-operator chains stay flat), and
/// a sum or product constructed over a single child collapses to that
/// child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
  Atom(Atom),
  Sum(Vec<Expr>),
  Product(Vec<Expr>),
  Power(Box<Expr>, Box<Expr>),
}

/// The operator tag of a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
  Sum,
  Product,
  Power,
}

/// A string that could not be interpreted as either a numeric literal
/// or a symbol name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConversionError {
  #[error("{0}")]
  Number(#[from] ParseNumberError),
  #[error("{0}")]
  Symbol(#[from] ParseSymbolError),
}

impl Expr {
  /// Builds a sum over the given children, splicing any child which is
  /// itself a sum and collapsing a singleton to its sole element.
  pub fn sum(children: Vec<Expr>) -> Expr {
    let mut builder = ExprBuilder::sum();
    builder.extend(children);
    builder.build()
  }

  /// Builds a product over the given children, with the same
  /// flattening and collapsing behavior as [`Expr::sum`].
  pub fn product(children: Vec<Expr>) -> Expr {
    let mut builder = ExprBuilder::product();
    builder.extend(children);
    builder.build()
  }

  pub fn power(base: Expr, exponent: Expr) -> Expr {
    Expr::Power(Box::new(base), Box::new(exponent))
  }

  /// Convenience constructor for a symbol node.
  pub fn symbol(name: &str) -> Result<Expr, ParseSymbolError> {
    Ok(Expr::from(Symbol::try_from(name)?))
  }

  pub fn zero() -> Expr {
    Expr::from(0)
  }

  pub fn one() -> Expr {
    Expr::from(1)
  }

  /// Returns true if the node is a terminal (a number or a symbol).
  pub fn is_terminal(&self) -> bool {
    matches!(self, Expr::Atom(_))
  }

  pub fn is_zero(&self) -> bool {
    self.as_number().is_some_and(|n| *n == Number::from(0))
  }

  pub fn is_one(&self) -> bool {
    self.as_number().is_some_and(|n| *n == Number::from(1))
  }

  pub fn as_number(&self) -> Option<&Number> {
    match self {
      Expr::Atom(Atom::Number(n)) => Some(n),
      _ => None,
    }
  }

  /// The operator tag, for composite nodes.
  pub fn op_kind(&self) -> Option<OpKind> {
    match self {
      Expr::Atom(_) => None,
      Expr::Sum(_) => Some(OpKind::Sum),
      Expr::Product(_) => Some(OpKind::Product),
      Expr::Power(_, _) => Some(OpKind::Power),
    }
  }

  /// Cost metric guiding the reduction engine: a symbol terminal costs
  /// [`SYMBOL_SIZE`], a number terminal costs 1, and a composite costs
  /// 1 plus the sizes of its children.
  pub fn size(&self) -> u64 {
    match self {
      Expr::Atom(Atom::Number(_)) => 1,
      Expr::Atom(Atom::Symbol(_)) => SYMBOL_SIZE,
      Expr::Sum(children) | Expr::Product(children) =>
        1 + children.iter().map(Expr::size).sum::<u64>(),
      Expr::Power(base, exponent) => 1 + base.size() + exponent.size(),
    }
  }
}

impl OpKind {
  /// Rebuilds a node of this kind over the given children. A singleton
  /// collapses to its sole element, and an empty sum or product
  /// becomes the corresponding identity literal, so an empty composite
  /// never escapes into a finished tree.
  ///
  /// Panics if the kind is `Power` and there are not exactly two
  /// children.
  pub fn node(self, mut children: Vec<Expr>) -> Expr {
    if children.len() == 1 {
      return children.pop().expect("children is non-empty");
    }
    match self {
      OpKind::Sum if children.is_empty() => Expr::zero(),
      OpKind::Product if children.is_empty() => Expr::one(),
      OpKind::Sum => Expr::sum(children),
      OpKind::Product => Expr::product(children),
      OpKind::Power => {
        assert!(children.len() == 2, "power nodes take a base and an exponent");
        let exponent = children.pop().expect("children has two elements");
        let base = children.pop().expect("children has two elements");
        Expr::power(base, exponent)
      }
    }
  }
}

impl From<Atom> for Expr {
  fn from(a: Atom) -> Expr {
    Expr::Atom(a)
  }
}

impl From<Number> for Expr {
  fn from(n: Number) -> Expr {
    Expr::Atom(Atom::Number(n))
  }
}

impl From<Symbol> for Expr {
  fn from(s: Symbol) -> Expr {
    Expr::Atom(Atom::Symbol(s))
  }
}

impl From<i64> for Expr {
  fn from(n: i64) -> Expr {
    Expr::Atom(Atom::from(n))
  }
}

/// Interprets a string as a numeric literal if it leads with a digit
/// or a sign, and as a symbol name otherwise.
impl TryFrom<&str> for Expr {
  type Error = ConversionError;

  fn try_from(s: &str) -> Result<Expr, ConversionError> {
    if s.starts_with(|c: char| c.is_ascii_digit() || c == '+' || c == '-') {
      let number = Number::from_str(s)?;
      Ok(Expr::from(number))
    } else {
      let symbol = Symbol::try_from(s)?;
      Ok(Expr::from(symbol))
    }
  }
}

impl TryFrom<String> for Expr {
  type Error = ConversionError;

  fn try_from(s: String) -> Result<Expr, ConversionError> {
    Expr::try_from(s.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn var(name: &str) -> Expr {
    Expr::symbol(name).unwrap()
  }

  #[test]
  fn test_sum_flattens_same_kind_children() {
    let inner = Expr::Sum(vec![var("x"), var("y")]);
    let expr = Expr::sum(vec![Expr::from(1), inner, Expr::from(2)]);
    assert_eq!(expr, Expr::Sum(vec![
      Expr::from(1),
      var("x"),
      var("y"),
      Expr::from(2),
    ]));
  }

  #[test]
  fn test_product_does_not_flatten_other_kinds() {
    let inner = Expr::Sum(vec![var("x"), var("y")]);
    let expr = Expr::product(vec![Expr::from(2), inner.clone()]);
    assert_eq!(expr, Expr::Product(vec![Expr::from(2), inner]));
  }

  #[test]
  fn test_singleton_collapses() {
    assert_eq!(Expr::sum(vec![var("x")]), var("x"));
    assert_eq!(Expr::product(vec![Expr::from(3)]), Expr::from(3));
  }

  #[test]
  fn test_op_kind() {
    assert_eq!(var("x").op_kind(), None);
    assert_eq!(Expr::from(1).op_kind(), None);
    assert_eq!(Expr::Sum(vec![]).op_kind(), Some(OpKind::Sum));
    assert_eq!(Expr::Product(vec![]).op_kind(), Some(OpKind::Product));
    assert_eq!(
      Expr::power(var("x"), Expr::from(2)).op_kind(),
      Some(OpKind::Power),
    );
  }

  #[test]
  fn test_size_metric() {
    assert_eq!(Expr::from(3).size(), 1);
    assert_eq!(var("x").size(), 1000);
    assert_eq!(Expr::Sum(vec![Expr::from(1), var("x")]).size(), 1002);
    assert_eq!(Expr::power(var("x"), Expr::from(2)).size(), 1002);
    assert_eq!(
      Expr::Product(vec![Expr::from(2), Expr::power(var("x"), Expr::from(3))]).size(),
      1004,
    );
  }

  #[test]
  fn test_op_kind_node_collapses_and_rebuilds() {
    assert_eq!(OpKind::Sum.node(vec![var("x")]), var("x"));
    assert_eq!(OpKind::Sum.node(vec![]), Expr::zero());
    assert_eq!(OpKind::Product.node(vec![]), Expr::one());
    assert_eq!(
      OpKind::Power.node(vec![var("x"), Expr::from(2)]),
      Expr::power(var("x"), Expr::from(2)),
    );
  }

  #[test]
  fn test_convert_from_str() {
    assert_eq!(Expr::try_from("42").unwrap(), Expr::from(42));
    assert_eq!(Expr::try_from("-3").unwrap(), Expr::from(-3));
    assert_eq!(Expr::try_from("1:2").unwrap(), Expr::from(Number::ratio(1, 2)));
    assert_eq!(Expr::try_from("x").unwrap(), var("x"));
    assert!(matches!(
      Expr::try_from("2x").unwrap_err(),
      ConversionError::Number(_),
    ));
    assert!(matches!(
      Expr::try_from("a b").unwrap_err(),
      ConversionError::Symbol(_),
    ));
  }

  #[test]
  fn test_deep_copy_shares_no_structure() {
    let original = Expr::sum(vec![var("x"), Expr::from(1)]);
    let copy = original.clone();
    assert_eq!(original, copy);
    drop(original);
    assert_eq!(copy, Expr::Sum(vec![var("x"), Expr::from(1)]));
  }

  #[test]
  fn test_serde_roundtrip() {
    let expr = Expr::sum(vec![
      Expr::product(vec![Expr::from(2), var("x")]),
      Expr::power(var("y"), Expr::from(-1)),
      Expr::from(Number::ratio(1, 3)),
    ]);
    let encoded = serde_json::to_string(&expr).unwrap();
    let decoded: Expr = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, expr);
  }
}
