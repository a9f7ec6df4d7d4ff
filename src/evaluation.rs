//! Evaluation operators and population-wide evaluation.
//!
//! A population is evaluated in two phases: every objective list is computed
//! first, and only when all of them are ready are they assigned. Sorting and
//! selection therefore always see a consistent, fully evaluated snapshot, and
//! a failing evaluation leaves the whole population untouched.

use std::future::Future;

use futures::future::join_all;
use log::debug;
use rayon::prelude::*;

use crate::{
  error::Error,
  execution::*,
  genotype::Genotype,
  individual::Individual,
  objective::{IntoObjectives, Objective},
  operator::{ParBatch, ParBatchOperator, ParEach, ParEachOperator},
  Result,
};

/// An operator that evaluates a single individual, producing its objectives.
///
/// Implemented for closures of type `Fn(&Individual<G>) -> O` where `O` is
/// an [`Objective`], a `Vec` or an array of them, or any of those wrapped in a
/// [`Result`].
///
/// Can be applied in parallel to each individual or to batches of individuals
/// by converting it into a parallelized operator with `par_each()` or
/// `par_batch()` methods.
///
/// # Examples
/// ```ignore
/// let e = |i: &Individual<MyGenotype>| Objective::minimize(i.phenotype().cost);
/// let e = e.par_batch();
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Evaluation<G: Genotype> {
  /// Returns the objectives of given individual, in order.
  fn evaluate(&self, individual: &Individual<G>) -> Result<Vec<Objective>>;
}

impl<G, F, O> Evaluation<G> for F
where
  G: Genotype,
  F: Fn(&Individual<G>) -> O,
  O: IntoObjectives,
{
  fn evaluate(&self, individual: &Individual<G>) -> Result<Vec<Objective>> {
    self(individual).into_objectives()
  }
}

impl<G: Genotype, E: Evaluation<G>> ParEach<G> for E {}

impl<G: Genotype, E: Evaluation<G>> ParBatch<G> for E {}

/// An operator that evaluates a whole population at once, returning one
/// objective list per individual, in population order.
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Evaluator<G: Genotype> {
  /// Returns objectives for each of given individuals.
  ///
  /// Returning a different number of lists than there are individuals makes
  /// population evaluation fail.
  fn evaluate(
    &self,
    population: &[Individual<G>],
  ) -> Result<Vec<Vec<Objective>>>;
}

impl<G, F> Evaluator<G> for F
where
  G: Genotype,
  F: Fn(&[Individual<G>]) -> Result<Vec<Vec<Objective>>>,
{
  fn evaluate(
    &self,
    population: &[Individual<G>],
  ) -> Result<Vec<Vec<Objective>>> {
    self(population)
  }
}

/// An executor computing objectives of a population, optionally
/// parallelizing operator's application. Implemented for every
/// [`Evaluation`], its `par_each()`/`par_batch()` wrappers and every
/// [`Evaluator`].
pub trait EvaluationExecutor<G: Genotype, ExecutionStrategy> {
  /// Computes objectives of each individual without assigning them.
  fn execute_evaluations(
    &self,
    population: &[Individual<G>],
  ) -> Result<Vec<Vec<Objective>>>;
}

impl<G, E> EvaluationExecutor<G, CustomExecutionStrategy> for E
where
  G: Genotype,
  E: Evaluator<G>,
{
  fn execute_evaluations(
    &self,
    population: &[Individual<G>],
  ) -> Result<Vec<Vec<Objective>>> {
    Evaluator::evaluate(self, population)
  }
}

impl<G, E> EvaluationExecutor<G, SequentialExecutionStrategy> for E
where
  G: Genotype,
  E: Evaluation<G>,
{
  fn execute_evaluations(
    &self,
    population: &[Individual<G>],
  ) -> Result<Vec<Vec<Objective>>> {
    population
      .iter()
      .map(|i| Evaluation::evaluate(self, i))
      .collect()
  }
}

impl<G, E> EvaluationExecutor<G, ParallelEachExecutionStrategy>
  for ParEachOperator<G, E>
where
  G: Genotype + Sync,
  G::State: Sync,
  G::Phenotype: Sync,
  E: Evaluation<G> + Sync,
{
  fn execute_evaluations(
    &self,
    population: &[Individual<G>],
  ) -> Result<Vec<Vec<Objective>>> {
    population
      .par_iter()
      .map(|i| Evaluation::evaluate(self.operator(), i))
      .collect()
  }
}

impl<G, E> EvaluationExecutor<G, ParallelBatchExecutionStrategy>
  for ParBatchOperator<G, E>
where
  G: Genotype + Sync,
  G::State: Sync,
  G::Phenotype: Sync,
  E: Evaluation<G> + Sync,
{
  fn execute_evaluations(
    &self,
    population: &[Individual<G>],
  ) -> Result<Vec<Vec<Objective>>> {
    let chunk_size = (population.len() / rayon::current_num_threads()).max(1);
    population
      .par_chunks(chunk_size)
      .flat_map_iter(|chunk| {
        chunk
          .iter()
          .map(|i| Evaluation::evaluate(self.operator(), i))
      })
      .collect()
  }
}

/// Evaluates every individual of `population` with given operator and then
/// assigns the results. If any evaluation fails, no individual is changed.
///
/// # Examples
/// ```ignore
/// let evaluation = |i: &Individual<MyGenotype>| [
///   Objective::minimize(f1(i.phenotype())),
///   Objective::minimize(f2(i.phenotype())),
/// ];
/// evaluate_population(&mut population, &evaluation)?;
/// evaluate_population(&mut population, &evaluation.par_each())?;
/// ```
pub fn evaluate_population<G, ES, E>(
  population: &mut [Individual<G>],
  executor: &E,
) -> Result<()>
where
  G: Genotype,
  E: EvaluationExecutor<G, ES> + ?Sized,
{
  let objectives = executor.execute_evaluations(population)?;
  assign(population, objectives)
}

/// Asynchronous counterpart of [`evaluate_population`]: starts evaluation of
/// every individual, waits for all of them and only then assigns the results.
///
/// The futures are polled concurrently on the current task; spawn them on an
/// executor inside `evaluation` to run them in parallel. There is no timeout:
/// if an evaluation never resolves, neither does this function.
pub async fn evaluate_population_async<G, F, Fut, O>(
  population: &mut [Individual<G>],
  evaluation: F,
) -> Result<()>
where
  G: Genotype,
  F: Fn(&Individual<G>) -> Fut,
  Fut: Future<Output = O>,
  O: IntoObjectives,
{
  let pending: Vec<Fut> = population.iter().map(&evaluation).collect();
  let objectives = join_all(pending)
    .await
    .into_iter()
    .map(IntoObjectives::into_objectives)
    .collect::<Result<Vec<_>>>()?;
  assign(population, objectives)
}

fn assign<G: Genotype>(
  population: &mut [Individual<G>],
  objectives: Vec<Vec<Objective>>,
) -> Result<()> {
  if objectives.len() != population.len() {
    return Err(Error::invalid(format!(
      "evaluator returned {} objective lists for {} individuals",
      objectives.len(),
      population.len()
    )));
  }
  debug!("assigning objectives to {} individuals", population.len());
  population
    .iter_mut()
    .zip(objectives)
    .for_each(|(individual, objectives)| {
      individual.set_objectives(objectives)
    });
  Ok(())
}
