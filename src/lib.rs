//! **Paretic** is the ranking core of a multi-objective genetic algorithm:
//! individuals and their objectives, Pareto dominance, fast non-dominated
//! sorting, crowding distance, scalarization and selection. It strives to be
//! simple, predictable and highly focused on usage of closures.
//!
//! Here's a [quick start example](#example) for the impatient.
//!
//! # Data model
//!
//! - An [`Objective`] is one weighted criterion. Its **fitness** is
//!   `value × weight`, and greater fitness is always better: maximize with a
//!   positive weight, minimize with a negative one.
//! - A [`Genotype`] is whatever encoding your problem needs. It expresses a
//!   phenotype, mutates and crosses over; this crate never looks inside it.
//! - An [`Individual`] pairs a genotype with its phenotype, some auxiliary
//!   state and the objectives it was last evaluated with.
//! - A **population** is a plain slice of individuals. Everything that ranks
//!   a population refers to its members by index, so results such as
//!   [`Fronts`] or crowding distances are arrays aligned with it.
//!
//! # Operators
//!
//! Evaluation and selection are **operators**, each represented with a
//! trait and implemented for closures where that is practical:
//!
//! | Operator             | Trait                                       | Closure form                                        |
//! |:---------------------|:--------------------------------------------|:----------------------------------------------------|
//! | **Evaluation**       | [`Evaluation`]                              | `Fn(&Individual<G>) -> O` where `O: IntoObjectives` |
//! | **Evaluator**        | [`Evaluator`]                               | `Fn(&[Individual<G>]) -> Result<Vec<Vec<Objective>>>` |
//! | **Scalarization**    | [`Scalarization`]                           | `Fn(&Individual<G>) -> f64`                         |
//! | **Selection**        | [`Selector`]                                | -                                                   |
//!
//! [`Evaluation`]s are applied by [`evaluate_population`], which computes all
//! objectives first and assigns them only if every evaluation succeeded.
//! They can be parallelized by calling [`par_each()`] or [`par_batch()`] on
//! them, closures included:
//! ```ignore
//! let evaluation = |i: &Individual<Point>| [
//!   Objective::minimize(f1(i.phenotype())),
//!   Objective::minimize(f2(i.phenotype())),
//! ];
//! evaluate_population(&mut population, &evaluation.par_batch())?;
//! ```
//! Parallelization is implemented with [rayon]. For simple evaluations it
//! usually only adds overhead. Benchmark, if in doubt.
//!
//! Asynchronous evaluations go through [`Individual::evaluate_async`] and
//! [`evaluate_population_async`], the latter waiting for every individual
//! before assigning anything.
//!
//! # Ranking
//!
//! - [`non_dominated_sort`] splits a population into Pareto [`Fronts`].
//! - [`crowding_distance`] and [`crowding_distances`] measure how isolated
//!   individuals are within their fronts.
//! - [`WeightedSum`] and [`Nsga2Scores`] reduce objectives to one number for
//!   the selectors that need a linear order.
//!
//! # Selection
//!
//! This crate implements [`BestSelector`], [`WorstSelector`],
//! [`RandomSelector`], [`TournamentSelector`], [`RouletteSelector`],
//! [`RankSelector`] and [`Nsga2Selector`], plus the underlying
//! [`proportionate`](selection::proportionate) sampling. Stochastic selectors
//! take the random number generator as an argument, so seeding it makes a run
//! reproducible.
//!
//! # Example
//!
//! One NSGA-II survivor selection over a small population of numbers with two
//! conflicting objectives `x²` and `(x - 2)²`, both minimized.
//! ```
//! use paretic::{
//!   evaluate_population, Genotype, Individual, Nsga2Selector, Objective,
//!   Selector,
//! };
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//!
//! #[derive(Clone, Debug)]
//! struct X(f64);
//!
//! impl Genotype for X {
//!   type Phenotype = f64;
//!   type State = ();
//!
//!   fn express(&self, _: &()) -> f64 {
//!     self.0
//!   }
//!
//!   fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
//!     self.0 += rng.gen_range(-0.5..0.5);
//!   }
//!
//!   fn crossover<R: Rng + ?Sized>(&self, other: &Self, _: &mut R) -> Self {
//!     X((self.0 + other.0) / 2.0)
//!   }
//! }
//!
//! let mut population: Vec<_> =
//!   (-5..=5).map(|x| Individual::new(X(f64::from(x)))).collect();
//! let evaluation = |i: &Individual<X>| {
//!   let x = *i.phenotype();
//!   [Objective::minimize(x * x), Objective::minimize((x - 2.0).powi(2))]
//! };
//! evaluate_population(&mut population, &evaluation).unwrap();
//!
//! let survivors = Nsga2Selector::new()
//!   .select(3, &population, &mut StdRng::seed_from_u64(0))
//!   .unwrap();
//! // the Pareto optimal set is `0 ≤ x ≤ 2`
//! assert!(survivors.iter().all(|i| (0.0..=2.0).contains(i.phenotype())));
//! ```
//!
//! You can find a longer example in the *demos* folder in the root of the
//! project.
//!
//! # Common pitfalls
//!
//! - Closures are great and handy to use until they aren't. A subtle mistake
//!   can paint your code red and the error will appear far away from where you
//!   actually made a mistake. Annotate closure arguments
//!   (`|i: &Individual<MyGenotype>|`) or implement the traits for your own
//!   types instead.
//! - Fronts, crowding distances and [`Nsga2Scores`] describe the population
//!   they were computed for. Reordering or changing it invalidates them.
//!
//! [`par_each()`]: crate::operator::ParEach::par_each
//! [`par_batch()`]: crate::operator::ParBatch::par_batch

#![warn(missing_docs)]

pub mod codec;
pub mod crowding;
pub mod dominance;
pub mod error;
pub mod evaluation;
pub mod execution;
pub mod genotype;
pub mod individual;
pub mod objective;
pub mod operator;
pub mod scalarization;
pub mod selection;
pub mod sorting;

pub use crowding::{crowding_distance, crowding_distances};
pub use dominance::ParetoDominance;
pub use error::{Error, Result};
pub use evaluation::{
  evaluate_population,
  evaluate_population_async,
  Evaluation,
  Evaluator,
};
pub use genotype::Genotype;
pub use individual::Individual;
pub use objective::{IntoObjectives, Objective};
pub use operator::{ParBatch, ParEach};
pub use scalarization::{Nsga2Scores, Scalarization, WeightedSum};
pub use selection::{
  BestSelector,
  Nsga2Selector,
  RandomSelector,
  RankSelector,
  RouletteSelector,
  Selector,
  TournamentSelector,
  WorstSelector,
};
pub use sorting::{non_dominated_sort, pareto_front, Fronts};
