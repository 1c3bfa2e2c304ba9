
use super::Expr;
use super::atom::Atom;
use super::number::Number;

use num::{Zero, One};

use std::fmt::{self, Display, Formatter};

/// Renders the expression in conventional infix notation.
///
/// Sums join their terms with `" + "`, switching to `" - "` for a term
/// that carries a negative leading coefficient (whose sign is then
/// stripped from the term itself). Products write `" * "` only before
/// a numeric factor; every other adjacency is implicit multiplication,
/// so `Product(2, b, a)` renders as `2ba`. A leading coefficient of
/// exactly -1 renders as a bare minus sign. Parentheses go around sums
/// nested in products, around non-terminal bases and exponents of
/// powers, and around negative numbers at non-initial positions of a
/// product.
impl Display for Expr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let mut out = String::new();
    write_expr(&mut out, self);
    f.write_str(&out)
  }
}

fn write_expr(out: &mut String, expr: &Expr) {
  match expr {
    Expr::Atom(atom) => out.push_str(&atom.to_string()),
    Expr::Sum(children) => write_sum(out, children),
    Expr::Product(children) => write_product(out, children),
    Expr::Power(base, exponent) => write_power(out, base, exponent),
  }
}

fn write_sum(out: &mut String, children: &[Expr]) {
  let mut first = true;
  for term in children {
    if first {
      write_expr(out, term);
      first = false;
    } else if let Some(flipped) = negated_term(term) {
      out.push_str(" - ");
      write_expr(out, &flipped);
    } else {
      out.push_str(" + ");
      write_expr(out, term);
    }
  }
}

/// For a term that renders with a leading minus sign, the same term
/// with the sign flipped; `None` for anything else.
fn negated_term(term: &Expr) -> Option<Expr> {
  match term {
    Expr::Atom(Atom::Number(n)) if *n < Number::zero() => Some(Expr::from(-n)),
    Expr::Product(children) => match children.first() {
      Some(Expr::Atom(Atom::Number(n))) if *n < Number::zero() => {
        let flipped = -n;
        let mut rest: Vec<Expr> = children[1..].to_vec();
        if !flipped.is_one() {
          rest.insert(0, Expr::from(flipped));
        }
        Some(Expr::product(rest))
      }
      _ => None,
    },
    _ => None,
  }
}

fn write_product(out: &mut String, children: &[Expr]) {
  for (index, factor) in children.iter().enumerate() {
    if index == 0 && is_bare_minus_coefficient(children) {
      out.push('-');
      continue;
    }
    if index > 0 && factor.as_number().is_some() {
      out.push_str(" * ");
    }
    write_factor(out, factor, index);
  }
}

/// A leading factor of exactly -1 renders as a bare minus sign,
/// unless the next factor is numeric: a bare sign directly followed by
/// the ` * ` separator would not read as a coefficient, so in that
/// case the -1 is written out.
fn is_bare_minus_coefficient(children: &[Expr]) -> bool {
  match (children.first(), children.get(1)) {
    (Some(first), Some(second)) =>
      first.as_number().is_some_and(|n| *n == -Number::one())
        && second.as_number().is_none(),
    _ => false,
  }
}

fn write_factor(out: &mut String, factor: &Expr, index: usize) {
  let parenthesize = match factor {
    Expr::Sum(_) => true,
    Expr::Atom(Atom::Number(n)) => index > 0 && *n < Number::zero(),
    _ => false,
  };
  if parenthesize {
    out.push('(');
    write_expr(out, factor);
    out.push(')');
  } else {
    write_expr(out, factor);
  }
}

fn write_power(out: &mut String, base: &Expr, exponent: &Expr) {
  write_power_operand(out, base);
  out.push('^');
  write_power_operand(out, exponent);
}

fn write_power_operand(out: &mut String, operand: &Expr) {
  if operand.is_terminal() {
    write_expr(out, operand);
  } else {
    out.push('(');
    write_expr(out, operand);
    out.push(')');
  }
}

impl Expr {
  /// Writes an indented multi-line tree representation into `out`:
  /// one node per line, children indented two spaces below their
  /// parent. Diagnostic only; nothing parses this back.
  pub fn write_tree(&self, out: &mut String) {
    write_tree_indented(out, self, 0);
  }

  pub fn tree_string(&self) -> String {
    let mut out = String::new();
    self.write_tree(&mut out);
    out
  }
}

fn write_tree_indented(out: &mut String, expr: &Expr, depth: usize) {
  for _ in 0..depth {
    out.push_str("  ");
  }
  match expr {
    Expr::Atom(Atom::Number(n)) => {
      out.push_str("Number ");
      out.push_str(&n.to_string());
      out.push('\n');
    }
    Expr::Atom(Atom::Symbol(s)) => {
      out.push_str("Symbol ");
      out.push_str(s.as_str());
      out.push('\n');
    }
    Expr::Sum(children) => {
      out.push_str("Sum\n");
      for child in children {
        write_tree_indented(out, child, depth + 1);
      }
    }
    Expr::Product(children) => {
      out.push_str("Product\n");
      for child in children {
        write_tree_indented(out, child, depth + 1);
      }
    }
    Expr::Power(base, exponent) => {
      out.push_str("Power\n");
      write_tree_indented(out, base, depth + 1);
      write_tree_indented(out, exponent, depth + 1);
    }
  }
}
