
use super::{Expr, OpKind, combine};
use super::walker::postorder_walk_ok;

/// Normalizes a tree to a smaller equivalent form.
///
/// Children are reduced first, bottom-up; each composite node then
/// runs a single left-to-right greedy pass over its children, merging
/// a pair whenever [`combine`] produces something strictly smaller
/// (per [`Expr::size`]) than the plain two-child node. An accepted
/// merge is immediately retried against the next neighbor; a rejected
/// one advances the scan.
///
/// This is a local simplifier, not a global one: it never backtracks
/// past an accepted merge, and its outcome can depend on the order of
/// the children. That order dependence is part of the contract, not
/// something callers should paper over by sorting.
pub fn reduce(expr: &Expr) -> Expr {
  postorder_walk_ok(expr.clone(), merge_siblings)
}

fn merge_siblings(expr: Expr) -> Expr {
  match expr {
    Expr::Atom(atom) => Expr::Atom(atom),
    Expr::Sum(children) => merge_pass(OpKind::Sum, children),
    Expr::Product(children) => merge_pass(OpKind::Product, children),
    Expr::Power(base, exponent) => merge_pass(OpKind::Power, vec![*base, *exponent]),
  }
}

fn merge_pass(op: OpKind, mut children: Vec<Expr>) -> Expr {
  let mut i = 0;
  while i < children.len() {
    let mut j = i + 1;
    while j < children.len() {
      let combined = combine(op, &children[i], &children[j]);
      let paired_size = 1 + children[i].size() + children[j].size();
      if combined.size() < paired_size {
        children[i] = combined;
        children.remove(j);
      } else {
        j += 1;
      }
    }
    i += 1;
  }
  op.node(children)
}
