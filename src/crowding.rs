//! Crowding distance: how isolated an individual is among the members of its
//! front in objective space.

use itertools::Itertools;

use crate::{
  error::Error,
  genotype::Genotype,
  individual::Individual,
  sorting::{fitness_matrix, Fronts},
  Result,
};

/// Computes crowding distances of the members of one front.
///
/// `front` lists indices into `population`; the returned distances are
/// aligned with `front`. For every objective, members are ordered by fitness
/// (ties keep `front` order), the two boundary members get `+∞`, and each
/// interior member accumulates the fitness gap between its neighbours divided
/// by `M × range`, where `M` is the number of objectives and `range` is the
/// spread of that objective across the front.
///
/// An objective on which the whole front is tied (zero range), or whose range
/// is not a finite number, adds nothing to interior members. Fronts of at most
/// two members are all boundary, so every member gets `+∞`.
///
/// # Errors
///
/// Fails with [`Error::IndexOutOfRange`] if `front` holds an index outside
/// `population`, and with [`Error::ObjectiveCountMismatch`] if members have
/// different numbers of objectives.
pub fn crowding_distance<G: Genotype>(
  population: &[Individual<G>],
  front: &[usize],
) -> Result<Vec<f64>> {
  let members = front
    .iter()
    .map(|&index| {
      population.get(index).ok_or(Error::IndexOutOfRange {
        index,
        len: population.len(),
      })
    })
    .collect::<Result<Vec<_>>>()?;
  let fitness = fitness_matrix(members)?;
  Ok(front_distances(&fitness))
}

/// Computes crowding distances of every individual of `population` within
/// its own front. The result is aligned with `population`.
///
/// # Errors
///
/// Fails with [`Error::InvalidArgument`] if `fronts` were computed for a
/// population of another size, and with [`Error::ObjectiveCountMismatch`] if
/// individuals have different numbers of objectives.
pub fn crowding_distances<G: Genotype>(
  population: &[Individual<G>],
  fronts: &Fronts,
) -> Result<Vec<f64>> {
  if fronts.population_len() != population.len() {
    return Err(Error::invalid(format!(
      "fronts cover {} individuals but the population has {}",
      fronts.population_len(),
      population.len()
    )));
  }
  let fitness = fitness_matrix(population)?;
  let mut distances = vec![0.0; population.len()];
  for front in fronts.iter() {
    let front_fitness: Vec<Vec<f64>> =
      front.iter().map(|&i| fitness[i].clone()).collect();
    for (&i, distance) in front.iter().zip(front_distances(&front_fitness)) {
      distances[i] = distance;
    }
  }
  Ok(distances)
}

/// Crowding distances over fitness vectors of equal length.
pub(crate) fn front_distances(fitness: &[Vec<f64>]) -> Vec<f64> {
  let n = fitness.len();
  if n <= 2 {
    return vec![f64::INFINITY; n];
  }

  let objective_cnt = fitness[0].len();
  let mut distances = vec![0.0; n];
  for o_idx in 0..objective_cnt {
    // sort members by their fitness on objective `o`, keeping front order
    // for ties
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| fitness[a][o_idx].total_cmp(&fitness[b][o_idx]));

    let first_idx = order[0];
    let last_idx = order[n - 1];
    // boundary members stay infinitely far whatever other objectives add
    distances[first_idx] = f64::INFINITY;
    distances[last_idx] = f64::INFINITY;

    let range = fitness[last_idx][o_idx] - fitness[first_idx][o_idx];
    if !(range > 0.0 && range.is_finite()) {
      continue;
    }
    let norm = objective_cnt as f64 * range;
    for (&prev, &idx, &next) in order.iter().tuple_windows() {
      distances[idx] += (fitness[next][o_idx] - fitness[prev][o_idx]) / norm;
    }
  }
  distances
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    individual::tests::{with_fitness, Genes},
    sorting::non_dominated_sort,
  };

  fn population(fitness: &[&[f64]]) -> Vec<Individual<Genes>> {
    fitness.iter().map(|f| with_fitness(f)).collect()
  }

  #[test]
  fn test_small_fronts_are_all_boundary() {
    let population = population(&[&[1.0, 3.0], &[3.0, 1.0]]);
    assert!(crowding_distance(&population, &[]).unwrap().is_empty());
    assert_eq!(
      crowding_distance(&population, &[1]).unwrap(),
      vec![f64::INFINITY]
    );
    assert_eq!(
      crowding_distance(&population, &[0, 1]).unwrap(),
      vec![f64::INFINITY; 2]
    );
  }

  #[test]
  fn test_evenly_spaced_front() {
    let population = population(&[
      &[2.0, 2.0],
      &[0.0, 4.0],
      &[4.0, 0.0],
      &[1.0, 3.0],
      &[3.0, 1.0],
    ]);
    let distances = crowding_distance(&population, &[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(distances[1], f64::INFINITY);
    assert_eq!(distances[2], f64::INFINITY);
    // each objective adds (2 / (2 * 4)) to every interior member
    for d in [distances[0], distances[3], distances[4]] {
      assert!((d - 0.5).abs() < 1e-12, "unexpected distance {d}");
    }
  }

  #[test]
  fn test_uneven_front() {
    let population =
      population(&[&[0.0, 10.0], &[1.0, 9.0], &[9.0, 1.0], &[10.0, 0.0]]);
    let distances = crowding_distance(&population, &[0, 1, 2, 3]).unwrap();
    // (9 - 0) / (2 * 10) on both objectives
    assert!((distances[1] - 0.9).abs() < 1e-12);
    assert!((distances[2] - 0.9).abs() < 1e-12);
    assert!(distances[0].is_infinite() && distances[3].is_infinite());
  }

  #[test]
  fn test_zero_range_objective_is_skipped() {
    let population = population(&[&[1.0, 5.0], &[2.0, 5.0], &[3.0, 5.0]]);
    let distances = crowding_distance(&population, &[0, 1, 2]).unwrap();
    assert!(distances.iter().all(|d| !d.is_nan()));
    assert_eq!(distances[0], f64::INFINITY);
    assert_eq!(distances[2], f64::INFINITY);
    // only the first objective contributes: (3 - 1) / (2 * 2)
    assert!((distances[1] - 0.5).abs() < 1e-12);
  }

  #[test]
  fn test_infinite_fitness_never_yields_nan() {
    let population = population(&[
      &[f64::NEG_INFINITY, 1.0],
      &[0.0, 0.5],
      &[1.0, 0.0],
      &[f64::INFINITY, -1.0],
    ]);
    let distances = crowding_distance(&population, &[0, 1, 2, 3]).unwrap();
    assert!(distances.iter().all(|d| !d.is_nan() && *d >= 0.0));
  }

  #[test]
  fn test_errors() {
    let population = population(&[&[1.0], &[2.0, 1.0], &[3.0]]);
    assert!(matches!(
      crowding_distance(&population, &[0, 7]),
      Err(Error::IndexOutOfRange { index: 7, len: 3 })
    ));
    assert!(matches!(
      crowding_distance(&population, &[0, 1, 2]),
      Err(Error::ObjectiveCountMismatch { .. })
    ));
  }

  #[test]
  fn test_distances_per_population() {
    let population = population(&[
      &[0.0, 4.0],
      &[2.0, 2.0],
      &[4.0, 0.0],
      &[1.0, 1.0],
      &[0.0, 0.0],
    ]);
    let fronts = non_dominated_sort(&population).unwrap();
    assert_eq!(fronts.fronts(), &[vec![0, 1, 2], vec![3], vec![4]]);

    let distances = crowding_distances(&population, &fronts).unwrap();
    assert_eq!(distances.len(), 5);
    assert!(distances[0].is_infinite() && distances[2].is_infinite());
    assert!((distances[1] - 1.0).abs() < 1e-12);
    assert!(distances[3].is_infinite() && distances[4].is_infinite());

    assert!(crowding_distances(&population[1..], &fronts).is_err());
  }
}
