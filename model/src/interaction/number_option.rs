use crate::interaction::{CommandOptionNumber, NumberOptionChoice};
use crate::TypeLiteral;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An integer or number option (`type` 4). Exactly one presentation applies: a list of choices, a
/// value range, or autocomplete.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NumberOption {
    Choices(ChoicesNumberOption),
    Range(RangeNumberOption),
    Autocomplete(AutocompleteNumberOption),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ChoicesNumberOption {
    pub r#type: TypeLiteral<4>,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<NumberOptionChoice>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct RangeNumberOption {
    pub r#type: TypeLiteral<4>,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<CommandOptionNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<CommandOptionNumber>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct AutocompleteNumberOption {
    pub r#type: TypeLiteral<4>,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
}

impl NumberOption {
    pub fn name(&self) -> &str {
        match self {
            Self::Choices(o) => &o.name,
            Self::Range(o) => &o.name,
            Self::Autocomplete(o) => &o.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Choices(o) => &o.description,
            Self::Range(o) => &o.description,
            Self::Autocomplete(o) => &o.description,
        }
    }

    pub fn required(&self) -> Option<bool> {
        match self {
            Self::Choices(o) => o.required,
            Self::Range(o) => o.required,
            Self::Autocomplete(o) => o.required,
        }
    }

    pub fn is_autocomplete(&self) -> bool {
        matches!(self, Self::Autocomplete(o) if o.autocomplete.unwrap_or(false))
    }
}

impl<'de> Deserialize<'de> for NumberOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let option = if value.get("autocomplete").is_some() {
            serde_json::from_value(value).map(NumberOption::Autocomplete)
        } else if value.get("min_value").is_some() || value.get("max_value").is_some() {
            serde_json::from_value(value).map(NumberOption::Range)
        } else {
            serde_json::from_value(value).map(NumberOption::Choices)
        }
        .map_err(D::Error::custom)?;

        Ok(option)
    }
}
