//! A single weighted evaluation criterion.

use serde::{Deserialize, Serialize};

use crate::{codec, error::Error, Result};

/// One weighted scalar criterion of an individual.
///
/// `value` is the raw measurement, `weight` is its signed importance: a
/// positive weight maximizes the criterion, a negative one minimizes it.
/// Their product is the objective's [`fitness`](Objective::fitness), and the
/// crate always treats greater fitness as better.
///
/// Neither field can ever hold `NaN`; infinities are allowed.
///
/// # Examples
/// ```
/// # use paretic::Objective;
/// let cost = Objective::new(12.5, -1.0).unwrap(); // minimize cost
/// assert_eq!(cost.fitness(), -12.5);
/// assert!(Objective::new(f64::NAN, 1.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "ObjectiveRecord", into = "ObjectiveRecord")]
pub struct Objective {
  value: f64,
  weight: f64,
}

impl Objective {
  /// Creates an objective.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::InvalidArgument`] if `value` or `weight` is `NaN`.
  pub fn new(value: f64, weight: f64) -> Result<Self> {
    Ok(Self {
      value: checked("value", value)?,
      weight: checked("weight", weight)?,
    })
  }

  /// Creates an objective with weight `1`.
  pub fn maximize(value: f64) -> Result<Self> {
    Self::new(value, 1.0)
  }

  /// Creates an objective with weight `-1`.
  pub fn minimize(value: f64) -> Result<Self> {
    Self::new(value, -1.0)
  }

  /// Raw measured value.
  pub fn value(&self) -> f64 {
    self.value
  }

  /// Signed weight.
  pub fn weight(&self) -> f64 {
    self.weight
  }

  /// Replaces the value, rejecting `NaN`.
  pub fn set_value(&mut self, value: f64) -> Result<()> {
    self.value = checked("value", value)?;
    Ok(())
  }

  /// Replaces the weight, rejecting `NaN`.
  pub fn set_weight(&mut self, weight: f64) -> Result<()> {
    self.weight = checked("weight", weight)?;
    Ok(())
  }

  /// Returns `value * weight`.
  ///
  /// Follows IEEE-754: an infinite value times a positive weight is `+∞`,
  /// times a negative weight is `-∞`. An infinite value with a zero weight
  /// yields `NaN`; such a fitness never panics and selectors sorting by
  /// score rank it below every number.
  pub fn fitness(&self) -> f64 {
    self.value * self.weight
  }
}

fn checked(field: &str, number: f64) -> Result<f64> {
  if number.is_nan() {
    Err(Error::invalid(format!("objective {field} cannot be NaN")))
  } else {
    Ok(number)
  }
}

#[derive(Serialize, Deserialize)]
struct ObjectiveRecord {
  #[serde(with = "codec::number")]
  value: f64,
  #[serde(with = "codec::number")]
  weight: f64,
}

impl TryFrom<ObjectiveRecord> for Objective {
  type Error = Error;

  fn try_from(record: ObjectiveRecord) -> Result<Self> {
    Self::new(record.value, record.weight)
  }
}

impl From<Objective> for ObjectiveRecord {
  fn from(objective: Objective) -> Self {
    Self {
      value: objective.value,
      weight: objective.weight,
    }
  }
}

/// Conversion of an evaluation result into an ordered list of objectives.
///
/// Evaluation functions may return a single [`Objective`], a `Vec` or an
/// array of them, or any of those wrapped in a [`Result`]. A `Vec` or an array
/// of `Result<Objective>` fails on its first error.
pub trait IntoObjectives {
  /// Performs the conversion.
  fn into_objectives(self) -> Result<Vec<Objective>>;
}

impl IntoObjectives for Objective {
  fn into_objectives(self) -> Result<Vec<Objective>> {
    Ok(vec![self])
  }
}

impl IntoObjectives for Vec<Objective> {
  fn into_objectives(self) -> Result<Vec<Objective>> {
    Ok(self)
  }
}

impl<const N: usize> IntoObjectives for [Objective; N] {
  fn into_objectives(self) -> Result<Vec<Objective>> {
    Ok(self.into())
  }
}

impl IntoObjectives for Vec<Result<Objective>> {
  fn into_objectives(self) -> Result<Vec<Objective>> {
    self.into_iter().collect()
  }
}

impl<const N: usize> IntoObjectives for [Result<Objective>; N] {
  fn into_objectives(self) -> Result<Vec<Objective>> {
    self.into_iter().collect()
  }
}

impl<T: IntoObjectives> IntoObjectives for Result<T> {
  fn into_objectives(self) -> Result<Vec<Objective>> {
    self?.into_objectives()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rejects_nan() {
    assert!(matches!(
      Objective::new(f64::NAN, 1.0),
      Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
      Objective::new(1.0, f64::NAN),
      Err(Error::InvalidArgument(_))
    ));

    let mut o = Objective::new(1.0, 2.0).unwrap();
    assert!(o.set_value(f64::NAN).is_err());
    assert!(o.set_weight(f64::NAN).is_err());
    assert_eq!(o, Objective::new(1.0, 2.0).unwrap());
  }

  #[test]
  fn test_fitness() {
    assert_eq!(Objective::new(3.0, 2.0).unwrap().fitness(), 6.0);
    assert_eq!(Objective::minimize(3.0).unwrap().fitness(), -3.0);
    assert_eq!(
      Objective::new(f64::INFINITY, 0.5).unwrap().fitness(),
      f64::INFINITY
    );
    assert_eq!(
      Objective::new(f64::INFINITY, -0.5).unwrap().fitness(),
      f64::NEG_INFINITY
    );
    assert!(Objective::new(f64::INFINITY, 0.0).unwrap().fitness().is_nan());
  }

  #[test]
  fn test_setters() {
    let mut o = Objective::maximize(1.0).unwrap();
    o.set_value(4.0).unwrap();
    o.set_weight(-0.5).unwrap();
    assert_eq!(o.value(), 4.0);
    assert_eq!(o.weight(), -0.5);
    assert_eq!(o.fitness(), -2.0);
  }

  #[test]
  fn test_serialization_round_trip() {
    for value in [0.0, -7.25, f64::INFINITY, f64::NEG_INFINITY] {
      let o = Objective::new(value, -3.0).unwrap();
      let json = serde_json::to_string(&o).unwrap();
      assert_eq!(serde_json::from_str::<Objective>(&json).unwrap(), o);
    }
    assert_eq!(
      serde_json::to_string(&Objective::maximize(f64::INFINITY).unwrap())
        .unwrap(),
      r#"{"value":"Infinity","weight":1.0}"#
    );
  }

  #[test]
  fn test_deserialization_rejects_nan() {
    assert!(
      serde_json::from_str::<Objective>(r#"{"value":"NaN","weight":1}"#)
        .is_err()
    );
  }

  #[test]
  fn test_into_objectives() {
    let a = Objective::maximize(1.0).unwrap();
    let b = Objective::minimize(2.0).unwrap();
    assert_eq!(a.into_objectives().unwrap(), vec![a]);
    assert_eq!([a, b].into_objectives().unwrap(), vec![a, b]);
    assert_eq!(vec![b, a].into_objectives().unwrap(), vec![b, a]);
    assert!(Objective::new(f64::NAN, 1.0).into_objectives().is_err());

    let checked = [Objective::maximize(1.0), Objective::minimize(2.0)];
    assert_eq!(checked.into_objectives().unwrap(), vec![a, b]);
    let failing = vec![Objective::maximize(1.0), Objective::new(f64::NAN, 1.0)];
    assert!(failing.into_objectives().is_err());
  }
}
