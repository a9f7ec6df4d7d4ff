//! Wrappers marking operators for parallel execution.

use std::marker::PhantomData;

/// A wrapper around an operator that marks it to be executed in parallel for
/// **each** individual by its executor.
#[derive(Clone, Copy, Debug)]
pub struct ParEachOperator<G, O> {
  operator: O,
  _genotype: PhantomData<G>,
}

impl<G, O> ParEachOperator<G, O> {
  /// Returns the wrapped operator.
  pub fn operator(&self) -> &O {
    &self.operator
  }
}

/// A wrapper around an operator that marks it to be executed in parallel for
/// each **batch** of individuals by its executor.
#[derive(Clone, Copy, Debug)]
pub struct ParBatchOperator<G, O> {
  operator: O,
  _genotype: PhantomData<G>,
}

impl<G, O> ParBatchOperator<G, O> {
  /// Returns the wrapped operator.
  pub fn operator(&self) -> &O {
    &self.operator
  }
}

/// Conversion of an operator into one applied in parallel to each individual.
pub trait ParEach<G>: Sized {
  /// Creates a wrapper around given operator that marks it to
  /// be executed in parallel for **each** individual.
  ///
  /// **Parallelization is implemented with [rayon]. As a result, for simple
  /// functions, parallelization may only decrease performance because of
  /// additional overhead introduced. Benchmark if in doubt.**
  fn par_each(self) -> ParEachOperator<G, Self> {
    ParEachOperator {
      operator: self,
      _genotype: PhantomData,
    }
  }
}

/// Conversion of an operator into one applied in parallel to batches of
/// individuals.
pub trait ParBatch<G>: Sized {
  /// Creates a wrapper around given operator that marks it to
  /// be executed in parallel for each **batch** of individuals.
  /// The crate calculates the size of the batch in such a way as to evenly
  /// distribute the calculations across all available threads.
  ///
  /// **Parallelization is implemented with [rayon]. As a result, for simple
  /// functions, parallelization may only decrease performance because of
  /// additional overhead introduced. Benchmark if in doubt.**
  fn par_batch(self) -> ParBatchOperator<G, Self> {
    ParBatchOperator {
      operator: self,
      _genotype: PhantomData,
    }
  }
}
