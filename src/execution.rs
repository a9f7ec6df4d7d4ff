//! Execution strategy markers.
//!
//! Markers let one operator type pick its executor implementation at compile
//! time. Users never name them; they are inferred from the operator passed.

/// Sequential execution strategy, i.e. no parallelization involved.
pub enum SequentialExecutionStrategy {}

/// Parallel execution strategy, parallelizes operator application for
/// **each** individual.
pub enum ParallelEachExecutionStrategy {}

/// Parallel execution strategy, parallelizes operator application for a
/// **batch** of individuals. The crate tries to split the work equally for
/// each available thread.
pub enum ParallelBatchExecutionStrategy {}

/// Custom execution strategy, the operator handles the whole population.
pub enum CustomExecutionStrategy {}
