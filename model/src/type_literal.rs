use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A `type` field that can only ever hold the integer `N`.
///
/// Each variant record of a discriminated union stores its discriminant as a `TypeLiteral`, so a
/// record decodes only from an object carrying its own `type`, and can only be built with it.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TypeLiteral<const N: u8>;

impl<const N: u8> TypeLiteral<N> {
    pub const VALUE: u8 = N;

    pub fn value(&self) -> u8 {
        N
    }
}

impl<const N: u8> Serialize for TypeLiteral<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(N)
    }
}

impl<'de, const N: u8> Deserialize<'de> for TypeLiteral<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u64::deserialize(deserializer)?;

        if value == u64::from(N) {
            Ok(TypeLiteral)
        } else {
            Err(Error::invalid_value(
                Unexpected::Unsigned(value),
                &format!("type {}", N).as_str(),
            ))
        }
    }
}

impl<const N: u8> fmt::Display for TypeLiteral<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let literal: TypeLiteral<7> = serde_json::from_str("7").unwrap();
        assert_eq!(serde_json::to_string(&literal).unwrap(), "7");
        assert_eq!(literal.value(), 7);
    }

    #[test]
    fn test_rejects_other_values() {
        let err = serde_json::from_str::<TypeLiteral<3>>("4").unwrap_err();
        assert!(err.to_string().contains("expected type 3"));

        assert!(serde_json::from_str::<TypeLiteral<3>>(r#""3""#).is_err());
    }
}
