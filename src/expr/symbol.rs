
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// A symbolic variable, left intentionally un-evaluated by the engine.
///
/// Symbols are identified by strings. A symbol's name must begin with
/// a letter, followed by zero or more letters, digits, or apostrophes.
/// This structure enforces these constraints.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid symbol name")]
pub struct ParseSymbolError {
  original_string: String,
}

static VALID_NAME_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[a-zA-Z$][a-zA-Z$0-9']*$").unwrap()
});

impl Symbol {
  pub fn new(name: impl Into<String>) -> Option<Self> {
    Self::try_from(name.into()).ok()
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl ParseSymbolError {
  /// The string which failed to parse as a symbol name.
  pub fn original_string(&self) -> &str {
    &self.original_string
  }
}

impl TryFrom<String> for Symbol {
  type Error = ParseSymbolError;

  fn try_from(name: String) -> Result<Self, Self::Error> {
    if VALID_NAME_RE.is_match(&name) {
      Ok(Self(name))
    } else {
      Err(ParseSymbolError { original_string: name })
    }
  }
}

impl TryFrom<&str> for Symbol {
  type Error = ParseSymbolError;

  fn try_from(name: &str) -> Result<Self, Self::Error> {
    Symbol::try_from(name.to_owned())
  }
}

impl From<Symbol> for String {
  fn from(s: Symbol) -> Self {
    s.0
  }
}

impl Display for Symbol {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", &self.0)
  }
}
