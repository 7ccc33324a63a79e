use crate::interaction::CommandOptionNumber;
use serde::{Deserialize, Serialize};

/// A predefined value for an option. `T` matches the owning option's value type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ApplicationCommandOptionChoice<T> {
    pub name: Box<str>,
    pub value: T,
}

pub type StringOptionChoice = ApplicationCommandOptionChoice<Box<str>>;
pub type NumberOptionChoice = ApplicationCommandOptionChoice<CommandOptionNumber>;

impl<T> ApplicationCommandOptionChoice<T> {
    pub fn new(name: impl Into<Box<str>>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_choice() {
        let choice: StringOptionChoice =
            serde_json::from_str(r#"{"name":"Dog","value":"animal_dog"}"#).unwrap();
        assert_eq!(choice, StringOptionChoice::new("Dog", "animal_dog".into()));
    }

    #[test]
    fn test_value_type_must_match() {
        assert!(serde_json::from_str::<StringOptionChoice>(r#"{"name":"One","value":1}"#).is_err());
        assert!(serde_json::from_str::<NumberOptionChoice>(r#"{"name":"One","value":"1"}"#).is_err());
    }

    #[test]
    fn test_number_choice() {
        let choice: NumberOptionChoice =
            serde_json::from_str(r#"{"name":"Half","value":0.5}"#).unwrap();
        assert_eq!(choice.value, CommandOptionNumber::Float(0.5));
    }
}
