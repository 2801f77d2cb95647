//! Serde integration for [`Opt`]: the wire structure is `{ "is_some": bool, "value": .. }`,
//! with `value` absent for the empty variant.

use serde::de::{Deserialize, Deserializer, Error};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::opt::Opt;

impl<T: Serialize> Serialize for Opt<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Opt::Some(value) => {
        let mut state = serializer.serialize_struct("Opt", 2)?;
        state.serialize_field("is_some", &true)?;
        state.serialize_field("value", value)?;
        state.end()
      }
      Opt::None => {
        let mut state = serializer.serialize_struct("Opt", 1)?;
        state.serialize_field("is_some", &false)?;
        state.end()
      }
    }
  }
}

/// Wire shape of a serialized [`Opt`]. The `value` field is tracked as present-or-absent
/// rather than through `T`'s own deserialization of `null`, so payloads that serialize to
/// `null` (such as `()`) still round-trip.
#[derive(serde::Deserialize)]
#[serde(rename = "Opt", bound(deserialize = "T: Deserialize<'de>"))]
struct OptRepr<T> {
  is_some: bool,
  #[serde(default, deserialize_with = "present")]
  value: Option<T>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  T::deserialize(deserializer).map(Some)
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let repr = OptRepr::deserialize(deserializer)?;
    match (repr.is_some, repr.value) {
      (true, Some(value)) => Ok(Opt::Some(value)),
      (true, None) => Err(D::Error::missing_field("value")),
      (false, _) => Ok(Opt::None),
    }
  }
}
