//! Pareto dominance over fitness vectors.

use std::cmp::Ordering;

/// Describes Pareto dominance for slices of fitness values, where greater
/// fitness is better.
pub trait ParetoDominance {
  /// Returns `Greater` if `self` dominates `other`, `Less` if `other`
  /// dominates `self`, otherwise `Equal`. `self` dominates `other` if none
  /// of its values is smaller than the respective `other` value and at least
  /// one is greater.
  ///
  /// Slices are compared pairwise up to the shorter length; callers check
  /// lengths beforehand. Pairs involving `NaN` are treated as ties.
  fn dominance(&self, other: &Self) -> Ordering;
}

impl ParetoDominance for [f64] {
  fn dominance(&self, other: &Self) -> Ordering {
    let mut ord = Ordering::Equal;
    for (a, b) in self.iter().zip(other) {
      match (ord, a.partial_cmp(b).unwrap_or(Ordering::Equal)) {
        (Ordering::Equal, next_ord) => ord = next_ord,
        (Ordering::Greater, Ordering::Less)
        | (Ordering::Less, Ordering::Greater) => return Ordering::Equal,
        _ => {}
      }
    }
    ord
  }
}
