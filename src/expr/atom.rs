
use super::number::Number;
use super::symbol::Symbol;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// A terminal node of an expression tree: a numeric literal or a
/// symbolic variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Atom {
  Number(Number),
  Symbol(Symbol),
}

impl From<Number> for Atom {
  fn from(n: Number) -> Self {
    Self::Number(n)
  }
}

impl From<Symbol> for Atom {
  fn from(s: Symbol) -> Self {
    Self::Symbol(s)
  }
}

impl From<i64> for Atom {
  fn from(n: i64) -> Self {
    Self::Number(Number::from(n))
  }
}

impl Display for Atom {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Atom::Number(n) => write!(f, "{n}"),
      Atom::Symbol(s) => write!(f, "{s}"),
    }
  }
}
