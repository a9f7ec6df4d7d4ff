//! Candidate solutions and their evaluation.

use std::{cmp::Ordering, future::Future};

use rand::Rng;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
  dominance::ParetoDominance,
  error::Error,
  evaluation::Evaluation,
  genotype::Genotype,
  objective::{IntoObjectives, Objective},
  Result,
};

/// A candidate solution: a genotype, the phenotype expressed from it, some
/// auxiliary state and the list of objectives it was last evaluated with.
///
/// Objectives start empty and are replaced as a whole by
/// [`evaluate`](Individual::evaluate) or
/// [`set_objectives`](Individual::set_objectives). Their order is the order
/// the evaluation produced them in and is significant: dominance compares
/// objectives index by index.
#[derive(Clone, Debug)]
pub struct Individual<G: Genotype> {
  genotype: G,
  state: G::State,
  phenotype: G::Phenotype,
  objectives: Vec<Objective>,
}

impl<G: Genotype> Individual<G> {
  /// Creates an individual with default state and no objectives.
  pub fn new(genotype: G) -> Self {
    Self::with_state(genotype, G::State::default())
  }

  /// Creates an individual with given state and no objectives.
  pub fn with_state(genotype: G, state: G::State) -> Self {
    let phenotype = genotype.express(&state);
    Self {
      genotype,
      state,
      phenotype,
      objectives: Vec::new(),
    }
  }

  /// Genetic encoding.
  pub fn genotype(&self) -> &G {
    &self.genotype
  }

  /// Phenotype expressed at construction or after the last mutation.
  pub fn phenotype(&self) -> &G::Phenotype {
    &self.phenotype
  }

  /// Auxiliary state.
  pub fn state(&self) -> &G::State {
    &self.state
  }

  /// Returns a copy of the current objectives. Changing the returned vector
  /// does not affect the individual.
  pub fn objectives(&self) -> Vec<Objective> {
    self.objectives.clone()
  }

  /// Returns the objective at `index`.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::IndexOutOfRange`] if there is no such objective.
  pub fn objective(&self, index: usize) -> Result<Objective> {
    self
      .objectives
      .get(index)
      .copied()
      .ok_or(Error::IndexOutOfRange {
        index,
        len: self.objectives.len(),
      })
  }

  /// Number of objectives.
  pub fn objective_count(&self) -> usize {
    self.objectives.len()
  }

  /// Replaces all objectives.
  pub fn set_objectives(&mut self, objectives: Vec<Objective>) {
    self.objectives = objectives;
  }

  /// Fitness of every objective, in order.
  pub fn fitness(&self) -> Vec<f64> {
    self.objectives.iter().map(Objective::fitness).collect()
  }

  /// Raw value of every objective, in order.
  pub fn values(&self) -> Vec<f64> {
    self.objectives.iter().map(Objective::value).collect()
  }

  /// Evaluates the individual, replacing its objectives with the result.
  /// Nothing is assigned if the evaluation fails.
  pub fn evaluate<E: Evaluation<G> + ?Sized>(
    &mut self,
    evaluation: &E,
  ) -> Result<()> {
    self.objectives = evaluation.evaluate(self)?;
    Ok(())
  }

  /// Evaluates the individual with an asynchronous function. The returned
  /// future resolves once the new objectives are assigned; until then the
  /// old ones stay in place, and a failed evaluation assigns nothing.
  ///
  /// The future produced by `evaluation` cannot borrow the individual, so
  /// copy out whatever the evaluation needs.
  ///
  /// # Examples
  /// ```
  /// # use paretic::{Genotype, Individual, Objective};
  /// # use rand::Rng;
  /// # #[derive(Clone, Debug)]
  /// # struct Number(f64);
  /// # impl Genotype for Number {
  /// #   type Phenotype = f64;
  /// #   type State = ();
  /// #   fn express(&self, _: &()) -> f64 { self.0 }
  /// #   fn mutate<R: Rng + ?Sized>(&mut self, _: &mut R) {}
  /// #   fn crossover<R: Rng + ?Sized>(&self, o: &Self, _: &mut R) -> Self { o.clone() }
  /// # }
  /// let mut individual = Individual::new(Number(3.0));
  /// futures::executor::block_on(individual.evaluate_async(|i| {
  ///   let x = *i.phenotype();
  ///   async move { Objective::minimize(x * x) }
  /// }))
  /// .unwrap();
  /// assert_eq!(individual.fitness(), vec![-9.0]);
  /// ```
  pub async fn evaluate_async<F, Fut, O>(&mut self, evaluation: F) -> Result<()>
  where
    F: FnOnce(&Self) -> Fut,
    Fut: Future<Output = O>,
    O: IntoObjectives,
  {
    let pending = evaluation(&*self);
    self.objectives = pending.await.into_objectives()?;
    Ok(())
  }

  /// Returns `true` if `self` Pareto-dominates `rival`: its fitness is no
  /// worse on every objective and better on at least one. Individuals
  /// without objectives never dominate each other.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::ObjectiveCountMismatch`] if the individuals have
  /// different numbers of objectives.
  pub fn dominates(&self, rival: &Self) -> Result<bool> {
    Ok(self.dominance(rival)? == Ordering::Greater)
  }

  /// Compares Pareto dominance in both directions at once: `Greater` if
  /// `self` dominates `rival`, `Less` if `rival` dominates `self`, otherwise
  /// `Equal`.
  pub fn dominance(&self, rival: &Self) -> Result<Ordering> {
    if self.objectives.len() != rival.objectives.len() {
      return Err(Error::ObjectiveCountMismatch {
        left: self.objectives.len(),
        right: rival.objectives.len(),
      });
    }
    Ok(self.fitness().dominance(&rival.fitness()))
  }

  /// Mutates the genotype and expresses the phenotype anew. Objectives no
  /// longer describe the mutated genotype and are cleared.
  pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    self.genotype.mutate(rng);
    self.phenotype = self.genotype.express(&self.state);
    self.objectives.clear();
  }

  /// Creates an unevaluated offspring of `self` and `mate`.
  pub fn offspring<R: Rng + ?Sized>(&self, mate: &Self, rng: &mut R) -> Self {
    Self::new(self.genotype.crossover(&mate.genotype, rng))
  }
}

#[derive(Serialize)]
struct IndividualView<'a, G, St> {
  genotype: &'a G,
  state: &'a St,
  objectives: &'a [Objective],
}

#[derive(Deserialize)]
struct IndividualRecord<G, St> {
  genotype: G,
  #[serde(default)]
  state: St,
  #[serde(default)]
  objectives: Vec<Objective>,
}

impl<G> Individual<G>
where
  G: Genotype + Serialize,
  G::State: Serialize,
{
  /// Serializes genotype, state and objectives into JSON. The phenotype is
  /// derived data and is not written.
  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string(&IndividualView {
      genotype: &self.genotype,
      state: &self.state,
      objectives: &self.objectives,
    })?)
  }
}

impl<G> Individual<G>
where
  G: Genotype + DeserializeOwned,
  G::State: DeserializeOwned,
{
  /// Restores an individual written by [`to_json`](Individual::to_json),
  /// expressing its phenotype again.
  pub fn from_json(json: &str) -> Result<Self> {
    let record: IndividualRecord<G, G::State> = serde_json::from_str(json)?;
    let mut individual = Self::with_state(record.genotype, record.state);
    individual.objectives = record.objectives;
    Ok(individual)
  }
}
