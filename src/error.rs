
use crate::expr::ConversionError;
use crate::expr::factor::PreconditionError;

use thiserror::Error;

/// Top-level error type, aggregating every failure the engine can
/// surface to an embedding layer. All failures are synchronous and
/// fatal to the requested operation; there is nothing to retry.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ConversionError(#[from] ConversionError),
  #[error("{0}")]
  PreconditionError(#[from] PreconditionError),
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::{Expr, factor};

  #[test]
  fn test_errors_convert_from_module_errors() {
    fn convert(s: &str) -> Result<Expr, Error> {
      Ok(Expr::try_from(s)?)
    }
    fn common(x: &Expr, y: &Expr) -> Result<factor::CommonFactors, Error> {
      Ok(factor::find_common(x, y)?)
    }

    assert!(convert("x").is_ok());
    assert!(matches!(convert("?!"), Err(Error::ConversionError(_))));
    assert!(matches!(
      common(&Expr::from(1), &Expr::from(2)),
      Err(Error::PreconditionError(_)),
    ));
  }
}
