//! Reduction of objective vectors to single numbers.

use crate::{
  crowding::crowding_distances,
  error::Error,
  genotype::Genotype,
  individual::Individual,
  sorting::{non_dominated_sort, Fronts},
  Result,
};

/// Maps an individual to one real number, so that individuals can be
/// linearly ordered. Must be deterministic for fixed objectives.
///
/// Scalarizations receive both the individual and its index in the
/// population being processed. Plain ones ignore the index; population-aware
/// ones such as [`Nsga2Scores`] look their precomputed values up by it.
///
/// Implemented for closures of type `Fn(&Individual<G>) -> f64`.
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Scalarization<G: Genotype> {
  /// Returns the scalar value of `individual`, found at `index` of the
  /// population.
  fn scalarize(&self, index: usize, individual: &Individual<G>) -> Result<f64>;
}

impl<G, F> Scalarization<G> for F
where
  G: Genotype,
  F: Fn(&Individual<G>) -> f64,
{
  fn scalarize(&self, _: usize, individual: &Individual<G>) -> Result<f64> {
    Ok(self(individual))
  }
}

/// Sum of fitness over all objectives. Individuals without objectives
/// scalarize to `0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct WeightedSum;

impl WeightedSum {
  /// Returns the sum of `individual`'s fitness.
  pub fn of<G: Genotype>(individual: &Individual<G>) -> f64 {
    individual.fitness().into_iter().fold(0.0, |sum, f| sum + f)
  }
}

impl<G: Genotype> Scalarization<G> for WeightedSum {
  fn scalarize(&self, _: usize, individual: &Individual<G>) -> Result<f64> {
    Ok(Self::of(individual))
  }
}

/// NSGA-II ranking of a population as a scalarization.
///
/// Fronts and crowding distances are computed once, then the individual at
/// index `i` scores `r + (1 - ε) / max(1, r / d)`, where `r` is its one-based
/// front rank and `d` its crowding distance. Every score lies within
/// `[r, r + 1 - ε]`, so scores of different fronts never meet and the front
/// always decides first. Lower scores are better: pick with
/// [`WorstSelector`](crate::selection::WorstSelector) to prefer better fronts.
///
/// Within a front the score grows with crowding distance, capped once
/// `d >= r`. Lower being better, members in denser regions of a front are
/// preferred, and members with `d >= r`, boundary ones included, tie.
///
/// Scores are only meaningful for the population they were computed from.
#[derive(Clone, PartialEq, Debug)]
pub struct Nsga2Scores {
  scores: Vec<f64>,
}

impl Nsga2Scores {
  /// Gap kept between the score of the most isolated member of a front and
  /// the lowest possible score of the next front.
  pub const EPSILON: f64 = 1e-9;

  /// Ranks `population`.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::ObjectiveCountMismatch`] if individuals have
  /// different numbers of objectives.
  pub fn new<G: Genotype>(population: &[Individual<G>]) -> Result<Self> {
    let fronts = non_dominated_sort(population)?;
    let distances = crowding_distances(population, &fronts)?;
    Self::from_parts(&fronts, &distances)
  }

  /// Scores a population from precomputed fronts and crowding distances
  /// aligned with the population.
  pub fn from_parts(fronts: &Fronts, distances: &[f64]) -> Result<Self> {
    if fronts.population_len() != distances.len() {
      return Err(Error::invalid(format!(
        "fronts cover {} individuals but {} distances were given",
        fronts.population_len(),
        distances.len()
      )));
    }
    let scores = fronts
      .ranks()
      .iter()
      .zip(distances)
      .map(|(&rank, &distance)| {
        let rank = (rank + 1) as f64;
        rank + (1.0 - Self::EPSILON) / f64::max(1.0, rank / distance)
      })
      .collect();
    Ok(Self { scores })
  }

  /// Scores of the whole population, in population order.
  pub fn scores(&self) -> &[f64] {
    &self.scores
  }

  /// Score of the individual at `index`.
  pub fn score(&self, index: usize) -> Result<f64> {
    self.scores.get(index).copied().ok_or(Error::IndexOutOfRange {
      index,
      len: self.scores.len(),
    })
  }
}

impl<G: Genotype> Scalarization<G> for Nsga2Scores {
  fn scalarize(&self, index: usize, _: &Individual<G>) -> Result<f64> {
    self.score(index)
  }
}
