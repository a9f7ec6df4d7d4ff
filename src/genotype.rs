//! Genetic encodings of candidate solutions.

use std::fmt::Debug;

use rand::Rng;

/// A capability interface over any genetic encoding: a list of genes, a
/// tree, a fixed vector and so on. [`Individual`] and everything built on it
/// depend only on this trait, never on a concrete encoding.
///
/// Serialization is opted into separately by implementing `serde` traits for
/// the genotype and its [`State`](Genotype::State).
///
/// # Examples
/// ```
/// # use paretic::Genotype;
/// # use rand::Rng;
/// #[derive(Clone, Debug)]
/// struct Bits(Vec<bool>);
///
/// impl Genotype for Bits {
///   type Phenotype = u32;
///   type State = ();
///
///   fn express(&self, _: &()) -> u32 {
///     self.0.iter().fold(0, |acc, &b| acc << 1 | u32::from(b))
///   }
///
///   fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
///     let i = rng.gen_range(0..self.0.len());
///     self.0[i] = !self.0[i];
///   }
///
///   fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> Self {
///     let cut = rng.gen_range(0..=self.0.len());
///     Bits(self.0[..cut].iter().chain(&other.0[cut..]).copied().collect())
///   }
/// }
/// ```
///
/// [`Individual`]: crate::Individual
pub trait Genotype: Clone + Debug {
  /// Task-specific view derived from the genotype and the individual's state.
  type Phenotype: Clone + Debug;

  /// Auxiliary per-individual data the phenotype may depend on.
  type State: Clone + Debug + Default;

  /// Computes the phenotype.
  fn express(&self, state: &Self::State) -> Self::Phenotype;

  /// Mutates the genotype in place.
  fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R);

  /// Creates an offspring genotype from `self` and `other`.
  fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> Self;
}
