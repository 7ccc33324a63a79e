use crate::error::{ModelError, Result};
use serde::de::{Error, Unexpected};
use serde_json::Value;

pub fn to_unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return Unexpected::Unsigned(u);
            }

            if let Some(i) = n.as_i64() {
                return Unexpected::Signed(i);
            }

            // serde_json numbers are always representable as one of u64 / i64 / f64
            Unexpected::Float(n.as_f64().unwrap_or(f64::NAN))
        }
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Reads the `type` field of a JSON object and converts it into the union's discriminant enum.
pub fn discriminant<T>(value: &Value, kind: &'static str) -> Result<T>
where
    T: TryFrom<u64, Error = ModelError>,
{
    match optional_discriminant(value, kind)? {
        Some(t) => Ok(t),
        None => Err(ModelError::MissingDiscriminant { kind }),
    }
}

/// Like [`discriminant`], but an absent or null `type` is not an error.
pub fn optional_discriminant<T>(value: &Value, kind: &'static str) -> Result<Option<T>>
where
    T: TryFrom<u64, Error = ModelError>,
{
    match value.get("type") {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => raw
            .as_u64()
            .ok_or(ModelError::NonIntegerDiscriminant { kind })
            .and_then(T::try_from)
            .map(Some),
    }
}

pub fn reject<E: Error>(err: ModelError) -> E {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %err, "rejected application command payload");

    E::custom(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ApplicationCommandOptionType;
    use serde_json::json;

    #[test]
    fn test_discriminant() {
        let option_type: ApplicationCommandOptionType =
            discriminant(&json!({"type": 7}), "option type").unwrap();
        assert_eq!(option_type, ApplicationCommandOptionType::Channel);
    }

    #[test]
    fn test_discriminant_errors() {
        assert_eq!(
            discriminant::<ApplicationCommandOptionType>(&json!({}), "option type"),
            Err(ModelError::MissingDiscriminant { kind: "option type" })
        );

        assert_eq!(
            discriminant::<ApplicationCommandOptionType>(&json!({"type": "3"}), "option type"),
            Err(ModelError::NonIntegerDiscriminant { kind: "option type" })
        );

        assert!(matches!(
            discriminant::<ApplicationCommandOptionType>(&json!({"type": 42}), "option type"),
            Err(ModelError::UnknownDiscriminant { value: 42, .. })
        ));
    }

    #[test]
    fn test_optional_discriminant() {
        let missing: Option<ApplicationCommandOptionType> =
            optional_discriminant(&json!({"type": null}), "option type").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_to_unexpected() {
        let value = json!("abc");
        assert_eq!(to_unexpected(&value), Unexpected::Str("abc"));
        assert_eq!(to_unexpected(&json!(-1)), Unexpected::Signed(-1));
    }
}
