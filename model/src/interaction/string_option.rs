use crate::interaction::StringOptionChoice;
use crate::TypeLiteral;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A string option (`type` 3). Predefined choices and autocomplete cannot be combined.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StringOption {
    Choices(ChoicesStringOption),
    Autocomplete(AutocompleteStringOption),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ChoicesStringOption {
    pub r#type: TypeLiteral<3>,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<StringOptionChoice>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct AutocompleteStringOption {
    pub r#type: TypeLiteral<3>,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
}

impl StringOption {
    pub fn name(&self) -> &str {
        match self {
            Self::Choices(o) => &o.name,
            Self::Autocomplete(o) => &o.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Choices(o) => &o.description,
            Self::Autocomplete(o) => &o.description,
        }
    }

    pub fn required(&self) -> Option<bool> {
        match self {
            Self::Choices(o) => o.required,
            Self::Autocomplete(o) => o.required,
        }
    }

    pub fn is_autocomplete(&self) -> bool {
        matches!(self, Self::Autocomplete(o) if o.autocomplete.unwrap_or(false))
    }
}

impl<'de> Deserialize<'de> for StringOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        // Whichever presentation key is present decides the record; the other key is then unknown
        let option = if value.get("autocomplete").is_some() {
            serde_json::from_value(value).map(StringOption::Autocomplete)
        } else {
            serde_json::from_value(value).map(StringOption::Choices)
        }
        .map_err(D::Error::custom)?;

        Ok(option)
    }
}
