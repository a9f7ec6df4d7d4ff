//! Fast non-dominated sorting.
//!
//! Partitions a population into Pareto fronts following Deb et al.,
//! *A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II* (2002), in
//! O(M·N²) time for N individuals with M objectives.

use std::cmp::Ordering;

use log::trace;

use crate::{
  dominance::ParetoDominance,
  error::Error,
  genotype::Genotype,
  individual::Individual,
  Result,
};

// index of an individual in the sorted population
type IndividualIndex = usize;
// number of individuals dominating an individual
type DominanceCounter = usize;
// individuals dominated by an individual
type DominanceList = Vec<IndividualIndex>;
// indices of individuals of a front
type Front = Vec<IndividualIndex>;

/// Pareto fronts of a population, best first. Fronts hold indices into the
/// sorted population, so results stay valid for as long as the population is
/// not reordered.
///
/// Every index appears in exactly one front, and within a front indices are
/// in ascending (population) order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Fronts {
  fronts: Vec<Front>,
  ranks: Vec<usize>,
}

impl Fronts {
  /// All fronts, front `0` being the non-dominated one.
  pub fn fronts(&self) -> &[Vec<usize>] {
    &self.fronts
  }

  /// Front number `rank`, if there is one.
  pub fn front(&self, rank: usize) -> Option<&[usize]> {
    self.fronts.get(rank).map(Vec::as_slice)
  }

  /// Indices of individuals dominated by nobody. Empty only for an empty
  /// population.
  pub fn first(&self) -> &[usize] {
    self.front(0).unwrap_or_default()
  }

  /// Zero-based number of the front the individual at `index` belongs to.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::IndexOutOfRange`] if `index` is not an index of the
  /// sorted population.
  pub fn rank(&self, index: usize) -> Result<usize> {
    self.ranks.get(index).copied().ok_or(Error::IndexOutOfRange {
      index,
      len: self.ranks.len(),
    })
  }

  /// Zero-based front number of each individual, in population order.
  pub fn ranks(&self) -> &[usize] {
    &self.ranks
  }

  /// Number of fronts.
  pub fn len(&self) -> usize {
    self.fronts.len()
  }

  /// Returns `true` if the sorted population was empty.
  pub fn is_empty(&self) -> bool {
    self.fronts.is_empty()
  }

  /// Size of the sorted population.
  pub fn population_len(&self) -> usize {
    self.ranks.len()
  }

  /// Iterates over fronts, best first.
  pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
    self.fronts.iter().map(Vec::as_slice)
  }

  /// Moves fronts out.
  pub fn into_inner(self) -> Vec<Vec<usize>> {
    self.fronts
  }
}

/// Sorts `population` into Pareto fronts.
///
/// # Errors
///
/// Fails with [`Error::ObjectiveCountMismatch`] if individuals do not all have
/// the same number of objectives.
///
/// # Examples
/// ```ignore
/// let fronts = non_dominated_sort(&population)?;
/// let best = fronts.first().iter().map(|&i| &population[i]);
/// ```
pub fn non_dominated_sort<G: Genotype>(
  population: &[Individual<G>],
) -> Result<Fronts> {
  let fitness = fitness_matrix(population)?;
  let fronts = sort_fitness(&fitness);
  trace!(
    "sorted {} individuals into {} fronts",
    population.len(),
    fronts.len()
  );
  Ok(fronts)
}

/// Returns individuals of `population` which no other individual dominates,
/// in population order.
pub fn pareto_front<G: Genotype>(
  population: &[Individual<G>],
) -> Result<Vec<&Individual<G>>> {
  Ok(
    non_dominated_sort(population)?
      .first()
      .iter()
      .map(|&i| &population[i])
      .collect(),
  )
}

/// Collects fitness vectors, checking that all of them have equal length.
pub(crate) fn fitness_matrix<'a, G, I>(individuals: I) -> Result<Vec<Vec<f64>>>
where
  G: Genotype + 'a,
  I: IntoIterator<Item = &'a Individual<G>>,
{
  let mut expected = None;
  individuals
    .into_iter()
    .map(|individual| {
      let count = individual.objective_count();
      match *expected.get_or_insert(count) {
        left if left != count => Err(Error::ObjectiveCountMismatch {
          left,
          right: count,
        }),
        _ => Ok(individual.fitness()),
      }
    })
    .collect()
}

/// Fast non-dominated sort over fitness vectors of equal length.
pub(crate) fn sort_fitness(fitness: &[Vec<f64>]) -> Fronts {
  let n = fitness.len();
  let mut dominance_lists: Vec<DominanceList> = vec![Vec::new(); n];
  let mut dominance_counters: Vec<DominanceCounter> = vec![0; n];
  let mut ranks = vec![0; n];
  let mut first_front: Front = Vec::new();

  // fill dominance lists and counters
  for p_idx in 0..n {
    // for each unique pair of individuals `p` and `q`...
    for q_idx in p_idx + 1..n {
      match fitness[p_idx].dominance(&fitness[q_idx]) {
        // if `p` dominates `q`...
        Ordering::Greater => {
          // put `q` into the list of individuals dominated by `p`
          dominance_lists[p_idx].push(q_idx);
          // and increment the counter of individuals dominating `q`
          dominance_counters[q_idx] += 1;
        }
        // if `q` dominates `p`, do the same the other way around
        Ordering::Less => {
          dominance_lists[q_idx].push(p_idx);
          dominance_counters[p_idx] += 1;
        }
        Ordering::Equal => {}
      }
    }
    // all individuals before `p` were already compared with it, so its
    // counter is final here
    if dominance_counters[p_idx] == 0 {
      first_front.push(p_idx);
    }
  }

  let mut fronts = Vec::new();
  let mut last_front = first_front;
  // until no individual is left...
  while !last_front.is_empty() {
    let mut next_front = Vec::new();
    // for each individual `p` in the last front...
    for &p_idx in &last_front {
      // for each individual `q` dominated by `p`...
      for &q_idx in &dominance_lists[p_idx] {
        dominance_counters[q_idx] -= 1;
        // if nobody else dominates `q`, it belongs to the next front
        if dominance_counters[q_idx] == 0 {
          ranks[q_idx] = fronts.len() + 1;
          next_front.push(q_idx);
        }
      }
    }
    next_front.sort_unstable();
    fronts.push(std::mem::replace(&mut last_front, next_front));
  }

  debug_assert_eq!(
    fronts.iter().map(Vec::len).sum::<usize>(),
    n,
    "fronts must partition the population"
  );

  Fronts { fronts, ranks }
}
