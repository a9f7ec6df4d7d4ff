//! Errors raised by the crate.

use thiserror::Error;

/// An alias for results returned throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure the crate reports. All of them are precondition violations
/// detected at the point of the call, never transient faults.
#[derive(Debug, Error)]
pub enum Error {
  /// An argument has the right type but an unusable value, like a `NaN`
  /// objective value or a negative roulette weight.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// An index does not address an existing element.
  #[error("index {index} is out of range for length {len}")]
  IndexOutOfRange {
    /// Requested index.
    index: usize,
    /// Length of the indexed sequence.
    len: usize,
  },

  /// More elements were requested than there are available to draw from.
  #[error("cannot draw {amount} individuals out of {available}")]
  SampleTooLarge {
    /// Requested number of elements.
    amount: usize,
    /// Number of elements available.
    available: usize,
  },

  /// Two individuals with different numbers of objectives were compared.
  #[error("cannot compare {left} objectives with {right} objectives")]
  ObjectiveCountMismatch {
    /// Objective count of the left-hand individual.
    left: usize,
    /// Objective count of the right-hand individual.
    right: usize,
  },

  /// JSON encoding or decoding failed.
  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn invalid(message: impl Into<String>) -> Self {
    Self::InvalidArgument(message.into())
  }
}
