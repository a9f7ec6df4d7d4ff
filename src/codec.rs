//! Universal numeric encoding used by serialized objectives and individuals.
//!
//! JSON has no literals for non-finite numbers and no way to tell an absent
//! value from `null` written on purpose. Finite numbers are therefore written
//! as plain JSON numbers while the special values are replaced with tokens:
//!
//! | value        | token         |
//! |:-------------|:--------------|
//! | `NaN`        | `"NaN"`       |
//! | `+∞`         | `"Infinity"`  |
//! | `-∞`         | `"-Infinity"` |
//! | absent       | `"undefined"` |
//!
//! Use the submodules with `#[serde(with = "...")]` on `f64` and
//! `Option<f64>` fields respectively.

use serde::{Deserialize, Serialize};

/// Token substituted for `NaN`.
pub const NAN: &str = "NaN";
/// Token substituted for positive infinity.
pub const INFINITY: &str = "Infinity";
/// Token substituted for negative infinity.
pub const NEG_INFINITY: &str = "-Infinity";
/// Token substituted for an absent value.
pub const UNDEFINED: &str = "undefined";

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Encoded {
  Number(f64),
  Token(String),
}

fn encode(value: f64) -> Encoded {
  if value.is_nan() {
    Encoded::Token(NAN.to_owned())
  } else if value == f64::INFINITY {
    Encoded::Token(INFINITY.to_owned())
  } else if value == f64::NEG_INFINITY {
    Encoded::Token(NEG_INFINITY.to_owned())
  } else {
    Encoded::Number(value)
  }
}

/// Decodes a token. `Ok(None)` stands for an absent value.
fn decode(encoded: Encoded) -> Result<Option<f64>, String> {
  match encoded {
    Encoded::Number(value) => Ok(Some(value)),
    Encoded::Token(token) => match token.as_str() {
      NAN => Ok(Some(f64::NAN)),
      INFINITY => Ok(Some(f64::INFINITY)),
      NEG_INFINITY => Ok(Some(f64::NEG_INFINITY)),
      UNDEFINED => Ok(None),
      other => Err(format!("unknown numeric token `{other}`")),
    },
  }
}

/// Encoding for plain `f64` fields. An absent value is rejected on decoding.
pub mod number {
  use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

  use super::{decode, encode, Encoded};

  /// Serializes `value`, substituting tokens for non-finite numbers.
  pub fn serialize<S: Serializer>(
    value: &f64,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    encode(*value).serialize(serializer)
  }

  /// Deserializes a number or a token.
  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<f64, D::Error> {
    decode(Encoded::deserialize(deserializer)?)
      .map_err(de::Error::custom)?
      .ok_or_else(|| de::Error::custom("expected a number, found absent value"))
  }
}

/// Encoding for `Option<f64>` fields, where `None` is written as
/// `"undefined"`. A JSON `null` is read back as `None` as well.
pub mod optional_number {
  use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

  use super::{decode, encode, Encoded, UNDEFINED};

  /// Serializes `value`, substituting tokens for non-finite and absent
  /// numbers.
  pub fn serialize<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    match value {
      Some(v) => encode(*v).serialize(serializer),
      None => serializer.serialize_str(UNDEFINED),
    }
  }

  /// Deserializes a number, a token or `null`.
  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<Option<f64>, D::Error> {
    match Option::<Encoded>::deserialize(deserializer)? {
      Some(encoded) => decode(encoded).map_err(de::Error::custom),
      None => Ok(None),
    }
  }
}
