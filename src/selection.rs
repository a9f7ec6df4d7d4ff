//! Selection operators and utilities.
//!
//! Every selector picks exactly `amount` individuals out of a population or
//! fails. Selectors never reorder the population they are given: sorting
//! selectors sort a working list of indices instead.

use std::cmp::Ordering;

use log::debug;
use rand::{seq::SliceRandom, Rng};
use typed_builder::TypedBuilder;

use crate::{
  crowding::crowding_distance,
  error::Error,
  genotype::Genotype,
  individual::Individual,
  scalarization::{Scalarization, WeightedSum},
  sorting::{fitness_matrix, sort_fitness, Fronts},
  Result,
};

/// An operator that selects individuals from a population, for example as
/// parents of the next generation or as its survivors.
///
/// Selectors work on indices: [`select_indices`](Selector::select_indices)
/// draws from `candidates`, a list of indices into `population`, which lets
/// one selector decide the outcome of another one's sub-sample (see
/// [`TournamentSelector`]). [`select`](Selector::select) draws from the whole
/// population.
///
/// **Note that you always can implement this trait for your own type.**
pub trait Selector<G: Genotype> {
  /// Selects exactly `amount` indices out of `candidates`.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::IndexOutOfRange`] if a candidate is not an index of
  /// `population`, or with a selector specific error if `amount` individuals
  /// cannot be selected.
  fn select_indices<R: Rng + ?Sized>(
    &self,
    amount: usize,
    population: &[Individual<G>],
    candidates: &[usize],
    rng: &mut R,
  ) -> Result<Vec<usize>>;

  /// Selects exactly `amount` individuals of `population`.
  fn select<'a, R: Rng + ?Sized>(
    &self,
    amount: usize,
    population: &'a [Individual<G>],
    rng: &mut R,
  ) -> Result<Vec<&'a Individual<G>>> {
    let candidates: Vec<usize> = (0..population.len()).collect();
    Ok(
      self
        .select_indices(amount, population, &candidates, rng)?
        .into_iter()
        .map(|i| &population[i])
        .collect(),
    )
  }
}

/// Selects `amount` individuals with the greatest scalar value. Ties are
/// resolved in favour of the candidate listed first, and `NaN` values rank
/// below every number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct BestSelector<S = WeightedSum>(pub S);

impl<G, S> Selector<G> for BestSelector<S>
where
  G: Genotype,
  S: Scalarization<G>,
{
  fn select_indices<R: Rng + ?Sized>(
    &self,
    amount: usize,
    population: &[Individual<G>],
    candidates: &[usize],
    _: &mut R,
  ) -> Result<Vec<usize>> {
    let scores = scalarize(&self.0, population, candidates)?;
    ensure_available(amount, candidates.len())?;
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| compare_scores(scores[a], scores[b], true));
    Ok(order.into_iter().take(amount).map(|k| candidates[k]).collect())
  }
}

/// Selects `amount` individuals with the smallest scalar value. Ties are
/// resolved in favour of the candidate listed first, and `NaN` values rank
/// below every number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct WorstSelector<S = WeightedSum>(pub S);

impl<G, S> Selector<G> for WorstSelector<S>
where
  G: Genotype,
  S: Scalarization<G>,
{
  fn select_indices<R: Rng + ?Sized>(
    &self,
    amount: usize,
    population: &[Individual<G>],
    candidates: &[usize],
    _: &mut R,
  ) -> Result<Vec<usize>> {
    let scores = scalarize(&self.0, population, candidates)?;
    ensure_available(amount, candidates.len())?;
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| compare_scores(scores[a], scores[b], false));
    Ok(order.into_iter().take(amount).map(|k| candidates[k]).collect())
  }
}

/// Selects `amount` distinct individuals uniformly at random.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RandomSelector;

impl<G: Genotype> Selector<G> for RandomSelector {
  fn select_indices<R: Rng + ?Sized>(
    &self,
    amount: usize,
    population: &[Individual<G>],
    candidates: &[usize],
    rng: &mut R,
  ) -> Result<Vec<usize>> {
    ensure_indices(population.len(), candidates)?;
    ensure_available(amount, candidates.len())?;
    Ok(candidates.choose_multiple(rng, amount).copied().collect())
  }
}

/// Runs `amount` tournaments. Each tournament draws `size` distinct
/// contestants at random and lets the `winner` selector pick one of them.
///
/// Unless `duplicates` is set, winners leave the pool of contestants, so no
/// individual is selected twice. Once fewer than `size` individuals are left
/// in the pool, tournaments are held among all of them.
///
/// # Examples
/// ```
/// # use paretic::selection::{TournamentSelector, WorstSelector};
/// # use paretic::WeightedSum;
/// let selector = TournamentSelector::builder()
///   .size(3)
///   .duplicates(true)
///   .winner(WorstSelector(WeightedSum))
///   .build();
/// ```
#[derive(TypedBuilder, Clone, Debug)]
pub struct TournamentSelector<W> {
  /// Number of contestants of each tournament.
  size: usize,
  /// Whether an individual can win more than one tournament.
  #[builder(default)]
  duplicates: bool,
  /// Selector picking the winner among contestants.
  winner: W,
}

impl TournamentSelector<BestSelector> {
  /// Tournaments of `size` contestants won by the greatest
  /// [`WeightedSum`], without duplicates.
  pub fn new(size: usize) -> Self {
    Self {
      size,
      duplicates: false,
      winner: BestSelector(WeightedSum),
    }
  }
}

impl<G, W> Selector<G> for TournamentSelector<W>
where
  G: Genotype,
  W: Selector<G>,
{
  fn select_indices<R: Rng + ?Sized>(
    &self,
    amount: usize,
    population: &[Individual<G>],
    candidates: &[usize],
    rng: &mut R,
  ) -> Result<Vec<usize>> {
    ensure_indices(population.len(), candidates)?;
    if self.size == 0 {
      return Err(Error::invalid("tournament size must be positive"));
    }
    ensure_available(self.size, candidates.len())?;
    if !self.duplicates {
      ensure_available(amount, candidates.len())?;
    }

    let mut pool = candidates.to_vec();
    let mut winners = Vec::with_capacity(amount);
    for _ in 0..amount {
      let contestants: Vec<usize> = pool
        .choose_multiple(rng, self.size.min(pool.len()))
        .copied()
        .collect();
      let winner = self
        .winner
        .select_indices(1, population, &contestants, rng)?
        .first()
        .copied()
        .ok_or_else(|| Error::invalid("tournament ended without a winner"))?;
      if !self.duplicates {
        if let Some(position) = pool.iter().position(|&i| i == winner) {
          pool.swap_remove(position);
        }
      }
      winners.push(winner);
    }
    Ok(winners)
  }
}

/// Draws `amount` indices of `weights` with replacement, each index with
/// probability proportional to its weight.
///
/// Zero weights are never drawn unless all weights are zero, in which case
/// indices are drawn uniformly.
///
/// # Errors
///
/// Fails with [`Error::InvalidArgument`] if a weight is negative or not
/// finite, or if the weights sum up to infinity, and with
/// [`Error::SampleTooLarge`] if `weights` is empty while `amount` is not
/// zero.
pub fn proportionate<R: Rng + ?Sized>(
  amount: usize,
  weights: &[f64],
  rng: &mut R,
) -> Result<Vec<usize>> {
  if amount == 0 {
    return Ok(Vec::new());
  }
  ensure_available(1, weights.len())?;
  if let Some(weight) = weights.iter().find(|w| !(w.is_finite() && **w >= 0.0))
  {
    return Err(Error::invalid(format!(
      "selection weight {weight} is negative or not finite"
    )));
  }

  let total: f64 = weights.iter().sum();
  if !total.is_finite() {
    return Err(Error::invalid("selection weights sum up to infinity"));
  }
  if total == 0.0 {
    return Ok((0..amount).map(|_| rng.gen_range(0..weights.len())).collect());
  }

  let bounds: Vec<f64> = weights
    .iter()
    .scan(0.0, |cumulative, w| {
      *cumulative += w;
      Some(*cumulative / total)
    })
    .collect();
  let last = weights.len() - 1;
  Ok(
    (0..amount)
      .map(|_| {
        let roll: f64 = rng.gen();
        // rounding may leave the last bound just below 1
        bounds.partition_point(|&bound| bound <= roll).min(last)
      })
      .collect(),
  )
}

/// Roulette-wheel selection with replacement: the chance of an individual to
/// be drawn is proportional to its scalar value.
///
/// Fails with [`Error::InvalidArgument`] if any candidate's scalar value is
/// negative or not finite.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RouletteSelector<S = WeightedSum>(pub S);

impl<G, S> Selector<G> for RouletteSelector<S>
where
  G: Genotype,
  S: Scalarization<G>,
{
  fn select_indices<R: Rng + ?Sized>(
    &self,
    amount: usize,
    population: &[Individual<G>],
    candidates: &[usize],
    rng: &mut R,
  ) -> Result<Vec<usize>> {
    let weights = scalarize(&self.0, population, candidates)?;
    Ok(
      proportionate(amount, &weights, rng)?
        .into_iter()
        .map(|k| candidates[k])
        .collect(),
    )
  }
}

/// Rank selection with replacement: candidates are ordered by ascending
/// scalar value and drawn with probability proportional to their position,
/// `1` for the smallest value and `N` for the greatest. `NaN` values take
/// the lowest positions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RankSelector<S = WeightedSum>(pub S);

impl<G, S> Selector<G> for RankSelector<S>
where
  G: Genotype,
  S: Scalarization<G>,
{
  fn select_indices<R: Rng + ?Sized>(
    &self,
    amount: usize,
    population: &[Individual<G>],
    candidates: &[usize],
    rng: &mut R,
  ) -> Result<Vec<usize>> {
    let scores = scalarize(&self.0, population, candidates)?;
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
      let (x, y) = (scores[a], scores[b]);
      y.is_nan().cmp(&x.is_nan()).then_with(|| x.total_cmp(&y))
    });
    let ranks: Vec<f64> = (1..=order.len()).map(|r| r as f64).collect();
    Ok(
      proportionate(amount, &ranks, rng)?
        .into_iter()
        .map(|position| candidates[order[position]])
        .collect(),
    )
  }
}

/// NSGA-II survivor selection.
///
/// Takes whole Pareto fronts, best first, for as long as they fit into
/// `amount`. The remainder is taken from the next front, preferring its
/// members with the greatest crowding distance.
///
/// Fronts and crowding distances are computed on every selection unless
/// precomputed ones are supplied. Precomputed values are indexed by
/// population index and must belong to the population being selected from.
///
/// # Examples
/// ```ignore
/// let fronts = non_dominated_sort(&population)?;
/// let distances = crowding_distances(&population, &fronts)?;
/// let survivors = Nsga2Selector::builder()
///   .fronts(fronts)
///   .distances(distances)
///   .build()
///   .select(100, &population, &mut rng)?;
/// ```
#[derive(TypedBuilder, Clone, PartialEq, Debug, Default)]
pub struct Nsga2Selector {
  /// Precomputed fronts of the population.
  #[builder(default, setter(strip_option))]
  fronts: Option<Fronts>,
  /// Precomputed crowding distances, one per individual of the population.
  #[builder(default, setter(strip_option))]
  distances: Option<Vec<f64>>,
}

impl Nsga2Selector {
  /// Selector computing fronts and distances on its own.
  pub fn new() -> Self {
    Self::default()
  }

  // candidates grouped by front, best front first
  fn group<G: Genotype>(
    &self,
    population: &[Individual<G>],
    candidates: &[usize],
  ) -> Result<Vec<Vec<usize>>> {
    match &self.fronts {
      Some(fronts) => {
        if fronts.population_len() != population.len() {
          return Err(Error::invalid(format!(
            "fronts cover {} individuals but the population has {}",
            fronts.population_len(),
            population.len()
          )));
        }
        let mut groups = vec![Vec::new(); fronts.len()];
        for &c in candidates {
          groups[fronts.rank(c)?].push(c);
        }
        groups.retain(|group| !group.is_empty());
        Ok(groups)
      }
      None => {
        let fitness =
          fitness_matrix(candidates.iter().map(|&c| &population[c]))?;
        Ok(
          sort_fitness(&fitness)
            .into_inner()
            .into_iter()
            .map(|front| front.into_iter().map(|k| candidates[k]).collect())
            .collect(),
        )
      }
    }
  }

  fn distances<G: Genotype>(
    &self,
    population: &[Individual<G>],
    front: &[usize],
  ) -> Result<Vec<f64>> {
    match &self.distances {
      Some(distances) => front
        .iter()
        .map(|&i| {
          distances.get(i).copied().ok_or(Error::IndexOutOfRange {
            index: i,
            len: distances.len(),
          })
        })
        .collect(),
      None => crowding_distance(population, front),
    }
  }
}

impl<G: Genotype> Selector<G> for Nsga2Selector {
  fn select_indices<R: Rng + ?Sized>(
    &self,
    amount: usize,
    population: &[Individual<G>],
    candidates: &[usize],
    _: &mut R,
  ) -> Result<Vec<usize>> {
    ensure_indices(population.len(), candidates)?;
    ensure_available(amount, candidates.len())?;
    if let Some(distances) = &self.distances {
      if distances.len() != population.len() {
        return Err(Error::invalid(format!(
          "{} crowding distances given for {} individuals",
          distances.len(),
          population.len()
        )));
      }
    }

    let mut selected = Vec::with_capacity(amount);
    for front in self.group(population, candidates)? {
      let remaining = amount - selected.len();
      if remaining == 0 {
        break;
      }
      if front.len() <= remaining {
        selected.extend(front);
        continue;
      }

      let distances = self.distances(population, &front)?;
      let mut order: Vec<usize> = (0..front.len()).collect();
      order.sort_by(|&a, &b| distances[b].total_cmp(&distances[a]));
      debug!(
        "taking {} of {} individuals of the last front by crowding distance",
        remaining,
        front.len()
      );
      selected.extend(order.into_iter().take(remaining).map(|k| front[k]));
      break;
    }
    Ok(selected)
  }
}

// `NaN` goes last in either direction
fn compare_scores(a: f64, b: f64, descending: bool) -> Ordering {
  let numbers = if descending {
    b.total_cmp(&a)
  } else {
    a.total_cmp(&b)
  };
  a.is_nan().cmp(&b.is_nan()).then(numbers)
}

fn ensure_available(amount: usize, available: usize) -> Result<()> {
  if amount > available {
    return Err(Error::SampleTooLarge { amount, available });
  }
  Ok(())
}

fn ensure_indices(len: usize, candidates: &[usize]) -> Result<()> {
  match candidates.iter().find(|&&index| index >= len) {
    Some(&index) => Err(Error::IndexOutOfRange { index, len }),
    None => Ok(()),
  }
}

fn scalarize<G, S>(
  scalarization: &S,
  population: &[Individual<G>],
  candidates: &[usize],
) -> Result<Vec<f64>>
where
  G: Genotype,
  S: Scalarization<G> + ?Sized,
{
  candidates
    .iter()
    .map(|&index| {
      let individual = population.get(index).ok_or(Error::IndexOutOfRange {
        index,
        len: population.len(),
      })?;
      scalarization.scalarize(index, individual)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use rand::{rngs::StdRng, SeedableRng};

  use super::*;
  use crate::{
    crowding::crowding_distances,
    individual::tests::{with_fitness, Genes},
    objective::Objective,
    scalarization::Nsga2Scores,
    sorting::non_dominated_sort,
  };

  type Population = Vec<Individual<Genes>>;

  fn population(fitness: &[&[f64]]) -> Population {
    fitness.iter().map(|f| with_fitness(f)).collect()
  }

  fn one_to_five() -> Population {
    population(&[&[3.0], &[1.0], &[5.0], &[2.0], &[4.0]])
  }

  fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
  }

  fn values(selected: &[&Individual<Genes>]) -> Vec<f64> {
    selected.iter().map(|i| i.values()[0]).collect()
  }

  #[test]
  fn test_best_and_worst() {
    let population = one_to_five();
    let best = BestSelector(WeightedSum).select(1, &population, &mut rng());
    assert_eq!(values(&best.unwrap()), vec![5.0]);
    let worst = WorstSelector(WeightedSum).select(1, &population, &mut rng());
    assert_eq!(values(&worst.unwrap()), vec![1.0]);

    let best =
      BestSelector::<WeightedSum>::default().select(3, &population, &mut rng());
    assert_eq!(values(&best.unwrap()), vec![5.0, 4.0, 3.0]);
    // the population keeps its order
    assert_eq!(population[0].values(), vec![3.0]);
  }

  #[test]
  fn test_best_ties_keep_order() {
    let population = population(&[&[1.0], &[2.0], &[2.0], &[2.0]]);
    let indices = BestSelector(WeightedSum)
      .select_indices(2, &population, &[3, 2, 1, 0], &mut rng())
      .unwrap();
    assert_eq!(indices, vec![3, 2]);
  }

  #[test]
  fn test_nan_scores_come_last() {
    let mut undefined = with_fitness(&[]);
    undefined.set_objectives(vec![Objective::new(f64::INFINITY, 0.0).unwrap()]);
    let population = vec![
      undefined,
      with_fitness(&[f64::NEG_INFINITY]),
      with_fitness(&[f64::INFINITY]),
    ];
    let candidates = [0, 1, 2];
    let best = BestSelector(WeightedSum)
      .select_indices(3, &population, &candidates, &mut rng())
      .unwrap();
    assert_eq!(best, vec![2, 1, 0]);
    let worst = WorstSelector(WeightedSum)
      .select_indices(3, &population, &candidates, &mut rng())
      .unwrap();
    assert_eq!(worst, vec![1, 2, 0]);

    let ranked = RankSelector(WeightedSum)
      .select_indices(2000, &population, &candidates, &mut rng())
      .unwrap();
    let count = |i: usize| ranked.iter().filter(|&&r| r == i).count();
    // weights 1, 2 and 3 out of 6
    assert!(count(0) < count(1) && count(1) < count(2));
  }

  #[test]
  fn test_best_with_closure() {
    let population = one_to_five();
    let closest_to_two = |i: &Individual<Genes>| -(i.values()[0] - 2.0).abs();
    let best = BestSelector(closest_to_two).select(2, &population, &mut rng());
    assert_eq!(values(&best.unwrap()), vec![2.0, 3.0]);
  }

  #[test]
  fn test_sorting_selectors_reject_large_amounts() {
    let population = one_to_five();
    assert!(matches!(
      BestSelector(WeightedSum).select(6, &population, &mut rng()),
      Err(Error::SampleTooLarge {
        amount: 6,
        available: 5
      })
    ));
    assert!(WorstSelector(WeightedSum)
      .select_indices(1, &population, &[9], &mut rng())
      .is_err());
  }

  #[test]
  fn test_random() {
    let population = one_to_five();
    let mut rng = rng();
    for _ in 0..20 {
      let indices = RandomSelector
        .select_indices(3, &population, &[0, 1, 2, 3, 4], &mut rng)
        .unwrap();
      assert_eq!(indices.len(), 3);
      assert_eq!(indices.iter().collect::<HashSet<_>>().len(), 3);
    }
    assert_eq!(
      RandomSelector.select(5, &population, &mut rng).unwrap().len(),
      5
    );
    assert!(matches!(
      RandomSelector.select(6, &population, &mut rng),
      Err(Error::SampleTooLarge { .. })
    ));
  }

  #[test]
  fn test_full_tournament_is_deterministic() {
    let population = one_to_five();
    let selector = TournamentSelector::new(5);
    let mut rng = rng();
    for _ in 0..20 {
      let winner = selector.select(1, &population, &mut rng).unwrap();
      assert_eq!(values(&winner), vec![5.0]);
    }
  }

  #[test]
  fn test_tournament_without_duplicates() {
    let population = one_to_five();
    let selector = TournamentSelector::new(2);
    let indices = selector
      .select_indices(5, &population, &[0, 1, 2, 3, 4], &mut rng())
      .unwrap();
    assert_eq!(indices.iter().collect::<HashSet<_>>().len(), 5);

    let selector = TournamentSelector::new(5);
    let winners = selector.select(5, &population, &mut rng()).unwrap();
    assert_eq!(values(&winners), vec![5.0, 4.0, 3.0, 2.0, 1.0]);
  }

  #[test]
  fn test_tournament_with_duplicates() {
    let population = one_to_five();
    let selector = TournamentSelector::builder()
      .size(5)
      .duplicates(true)
      .winner(WorstSelector(WeightedSum))
      .build();
    let winners = selector.select(8, &population, &mut rng()).unwrap();
    assert_eq!(values(&winners), vec![1.0; 8]);
  }

  #[test]
  fn test_tournament_errors() {
    let population = one_to_five();
    assert!(matches!(
      TournamentSelector::new(6).select(1, &population, &mut rng()),
      Err(Error::SampleTooLarge {
        amount: 6,
        available: 5
      })
    ));
    assert!(matches!(
      TournamentSelector::new(0).select(1, &population, &mut rng()),
      Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
      TournamentSelector::new(2).select(6, &population, &mut rng()),
      Err(Error::SampleTooLarge {
        amount: 6,
        available: 5
      })
    ));
  }

  #[test]
  fn test_proportionate() {
    let mut rng = rng();
    let drawn = proportionate(100, &[0.0, 3.0, 0.0], &mut rng).unwrap();
    assert!(drawn.iter().all(|&i| i == 1));

    let drawn = proportionate(1000, &[1.0, 3.0], &mut rng).unwrap();
    let ones = drawn.iter().filter(|&&i| i == 1).count();
    assert!((650..850).contains(&ones), "drew index 1 {ones} times");

    let drawn = proportionate(50, &[0.0, 0.0, 0.0], &mut rng).unwrap();
    assert!(drawn.iter().all(|&i| i < 3));

    assert!(proportionate(0, &[], &mut rng).unwrap().is_empty());
  }

  #[test]
  fn test_proportionate_rejects_bad_weights() {
    let mut rng = rng();
    for weights in [
      &[1.0, -0.5][..],
      &[f64::NAN, 1.0],
      &[f64::INFINITY],
      &[f64::MAX, f64::MAX],
    ] {
      assert!(matches!(
        proportionate(1, weights, &mut rng),
        Err(Error::InvalidArgument(_))
      ));
    }
    assert!(matches!(
      proportionate(1, &[], &mut rng),
      Err(Error::SampleTooLarge { .. })
    ));
  }

  #[test]
  fn test_roulette() {
    let positive = population(&[&[0.0], &[2.0], &[0.0]]);
    let selected = RouletteSelector(WeightedSum)
      .select(10, &positive, &mut rng())
      .unwrap();
    assert_eq!(values(&selected), vec![2.0; 10]);

    let negative = population(&[&[1.0], &[-1.0]]);
    assert!(matches!(
      RouletteSelector(WeightedSum).select(1, &negative, &mut rng()),
      Err(Error::InvalidArgument(_))
    ));
  }

  #[test]
  fn test_rank_prefers_greater_values() {
    let population = one_to_five();
    let selected = RankSelector(WeightedSum)
      .select(5000, &population, &mut rng())
      .unwrap();
    let count = |v: f64| selected.iter().filter(|i| i.values()[0] == v).count();
    assert!(count(5.0) > count(3.0));
    assert!(count(3.0) > count(1.0));
    // weights 1 and 5 out of 15
    assert!((200..470).contains(&count(1.0)));
  }

  #[test]
  fn test_nsga2_whole_fronts() {
    let population = population(&[
      &[0.0, 4.0],
      &[2.0, 2.0],
      &[4.0, 0.0],
      &[1.0, 1.0],
      &[0.0, 0.0],
    ]);
    let selector = Nsga2Selector::new();
    let indices = |amount| {
      selector
        .select_indices(amount, &population, &[0, 1, 2, 3, 4], &mut rng())
        .unwrap()
    };
    assert_eq!(indices(3), vec![0, 1, 2]);
    assert_eq!(indices(4), vec![0, 1, 2, 3]);
    assert_eq!(indices(5), vec![0, 1, 2, 3, 4]);
    assert!(indices(0).is_empty());
  }

  #[test]
  fn test_nsga2_truncates_by_crowding_distance() {
    let population = population(&[
      &[1.0, 9.0],
      &[0.0, 10.0],
      &[0.0, 0.0],
      &[9.0, 1.0],
      &[10.0, 0.0],
    ]);
    let selector = Nsga2Selector::new();
    let selected = selector.select(2, &population, &mut rng()).unwrap();
    assert_eq!(
      selected.iter().map(|i| i.values()).collect::<Vec<_>>(),
      vec![vec![0.0, 10.0], vec![10.0, 0.0]]
    );
    assert_eq!(selector.select(3, &population, &mut rng()).unwrap().len(), 3);
    assert!(matches!(
      selector.select(6, &population, &mut rng()),
      Err(Error::SampleTooLarge { .. })
    ));
  }

  #[test]
  fn test_nsga2_precomputed() {
    let population = population(&[
      &[0.0, 4.0],
      &[2.0, 2.0],
      &[4.0, 0.0],
      &[1.0, 1.0],
      &[0.0, 0.0],
    ]);
    let fronts = non_dominated_sort(&population).unwrap();
    let selector = Nsga2Selector::builder()
      .fronts(fronts.clone())
      .distances(vec![0.0, 5.0, 1.0, 0.0, 0.0])
      .build();
    assert_eq!(
      selector
        .select_indices(2, &population, &[0, 1, 2, 3, 4], &mut rng())
        .unwrap(),
      vec![1, 2]
    );

    let distances = crowding_distances(&population, &fronts).unwrap();
    let selector = Nsga2Selector::builder()
      .fronts(fronts)
      .distances(distances)
      .build();
    assert_eq!(
      selector
        .select_indices(2, &population, &[4, 3, 1], &mut rng())
        .unwrap(),
      vec![1, 3]
    );
    assert!(selector
      .select_indices(1, &population[..4], &[0], &mut rng())
      .is_err());
  }

  #[test]
  fn test_worst_nsga2_score_prefers_better_fronts() {
    let population = population(&[
      &[0.0, 0.0],
      &[0.0, 4.0],
      &[1.0, 1.0],
      &[2.0, 2.0],
      &[4.0, 0.0],
    ]);
    let scores = Nsga2Scores::new(&population).unwrap();
    let mut selected = WorstSelector(scores)
      .select_indices(3, &population, &[0, 1, 2, 3, 4], &mut rng())
      .unwrap();
    selected.sort_unstable();
    assert_eq!(selected, vec![1, 3, 4]);
  }
}
