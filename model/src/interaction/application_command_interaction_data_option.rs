use crate::interaction::CommandOptionNumber;
use crate::{util, ModelError, Snowflake, TypeLiteral};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// An option value received inside an application command interaction.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ApplicationCommandInteractionDataOption {
    SubCommand(SubCommandInteractionData),
    SubCommandGroup(SubCommandGroupInteractionData),
    Value(InteractionDataOptionValue),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum InteractionDataOptionValue {
    String(StringInteractionData),
    Integer(IntegerInteractionData),
    Boolean(BooleanInteractionData),
    User(UserInteractionData),
    Channel(ChannelInteractionData),
    Role(RoleInteractionData),
    Mentionable(MentionableInteractionData),
    Number(NumberInteractionData),
}

/// Interaction option types. Unlike registration, where `4` covers both, integers (`4`) and
/// numbers (`10`) arrive under different types.
#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum InteractionDataOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
}

impl TryFrom<u64> for InteractionDataOptionType {
    type Error = ModelError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::SubCommand,
            2 => Self::SubCommandGroup,
            3 => Self::String,
            4 => Self::Integer,
            5 => Self::Boolean,
            6 => Self::User,
            7 => Self::Channel,
            8 => Self::Role,
            9 => Self::Mentionable,
            10 => Self::Number,
            _ => {
                return Err(ModelError::UnknownDiscriminant {
                    kind: "interaction option type",
                    value,
                })
            }
        })
    }
}

// ============================================================================
// Subcommands
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SubCommandInteractionData {
    pub name: Box<str>,
    pub r#type: TypeLiteral<1>,
    pub options: Vec<InteractionDataOptionValue>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SubCommandGroupInteractionData {
    pub name: Box<str>,
    pub r#type: TypeLiteral<2>,
    pub options: Vec<SubCommandInteractionData>,
}

// ============================================================================
// Values
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct StringInteractionData {
    pub name: Box<str>,
    pub r#type: TypeLiteral<3>,
    pub value: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct IntegerInteractionData {
    pub name: Box<str>,
    pub r#type: TypeLiteral<4>,
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BooleanInteractionData {
    pub name: Box<str>,
    pub r#type: TypeLiteral<5>,
    pub value: bool,
}

/// A value referencing another entity by id. `N` is the option type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SnowflakeInteractionData<const N: u8> {
    pub name: Box<str>,
    pub r#type: TypeLiteral<N>,
    pub value: Snowflake,
}

pub type UserInteractionData = SnowflakeInteractionData<6>;
pub type ChannelInteractionData = SnowflakeInteractionData<7>;
pub type RoleInteractionData = SnowflakeInteractionData<8>;
pub type MentionableInteractionData = SnowflakeInteractionData<9>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NumberInteractionData {
    pub name: Box<str>,
    pub r#type: TypeLiteral<10>,
    pub value: CommandOptionNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
}

impl ApplicationCommandInteractionDataOption {
    pub fn kind(&self) -> InteractionDataOptionType {
        match self {
            Self::SubCommand(_) => InteractionDataOptionType::SubCommand,
            Self::SubCommandGroup(_) => InteractionDataOptionType::SubCommandGroup,
            Self::Value(value) => value.kind(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::SubCommand(o) => &o.name,
            Self::SubCommandGroup(o) => &o.name,
            Self::Value(value) => value.name(),
        }
    }

    /// Values passed to a subcommand. Empty for groups and plain values.
    pub fn options(&self) -> &[InteractionDataOptionValue] {
        match self {
            Self::SubCommand(o) => &o.options,
            Self::SubCommandGroup(_) | Self::Value(_) => &[],
        }
    }

    /// Finds the value the user is currently typing during an autocomplete interaction.
    pub fn focused(&self) -> Option<&InteractionDataOptionValue> {
        match self {
            Self::SubCommand(o) => o.focused(),
            Self::SubCommandGroup(o) => o.options.iter().find_map(|sub| sub.focused()),
            Self::Value(value) => Some(value).filter(|v| v.is_focused()),
        }
    }
}

impl SubCommandInteractionData {
    pub fn focused(&self) -> Option<&InteractionDataOptionValue> {
        self.options.iter().find(|value| value.is_focused())
    }
}

impl InteractionDataOptionValue {
    pub fn kind(&self) -> InteractionDataOptionType {
        match self {
            Self::String(_) => InteractionDataOptionType::String,
            Self::Integer(_) => InteractionDataOptionType::Integer,
            Self::Boolean(_) => InteractionDataOptionType::Boolean,
            Self::User(_) => InteractionDataOptionType::User,
            Self::Channel(_) => InteractionDataOptionType::Channel,
            Self::Role(_) => InteractionDataOptionType::Role,
            Self::Mentionable(_) => InteractionDataOptionType::Mentionable,
            Self::Number(_) => InteractionDataOptionType::Number,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::String(o) => &o.name,
            Self::Integer(o) => &o.name,
            Self::Boolean(o) => &o.name,
            Self::User(o) => &o.name,
            Self::Channel(o) => &o.name,
            Self::Role(o) => &o.name,
            Self::Mentionable(o) => &o.name,
            Self::Number(o) => &o.name,
        }
    }

    pub fn is_focused(&self) -> bool {
        let focused = match self {
            Self::String(o) => o.focused,
            Self::Integer(o) => o.focused,
            Self::Number(o) => o.focused,
            _ => None,
        };

        focused.unwrap_or(false)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(o) => Some(&o.value),
            _ => None,
        }
    }

    pub fn as_snowflake(&self) -> Option<Snowflake> {
        match self {
            Self::User(o) => Some(o.value),
            Self::Channel(o) => Some(o.value),
            Self::Role(o) => Some(o.value),
            Self::Mentionable(o) => Some(o.value),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for ApplicationCommandInteractionDataOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let option_type: InteractionDataOptionType =
            util::discriminant(&value, "interaction option type")
                .map_err(util::reject::<D::Error>)?;

        let option = match option_type {
            InteractionDataOptionType::SubCommand => {
                serde_json::from_value(value).map(ApplicationCommandInteractionDataOption::SubCommand)
            }
            InteractionDataOptionType::SubCommandGroup => serde_json::from_value(value)
                .map(ApplicationCommandInteractionDataOption::SubCommandGroup),
            _ => serde_json::from_value(value).map(ApplicationCommandInteractionDataOption::Value),
        }
        .map_err(D::Error::custom)?;

        Ok(option)
    }
}

impl<'de> Deserialize<'de> for InteractionDataOptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let option_type: InteractionDataOptionType =
            util::discriminant(&value, "interaction option type")
                .map_err(util::reject::<D::Error>)?;

        let option = match option_type {
            InteractionDataOptionType::SubCommand | InteractionDataOptionType::SubCommandGroup => {
                return Err(util::reject(ModelError::DisallowedDiscriminant {
                    kind: "interaction option type",
                    value: option_type as u64,
                    position: "a subcommand",
                }))
            }
            InteractionDataOptionType::String => {
                serde_json::from_value(value).map(InteractionDataOptionValue::String)
            }
            InteractionDataOptionType::Integer => {
                serde_json::from_value(value).map(InteractionDataOptionValue::Integer)
            }
            InteractionDataOptionType::Boolean => {
                serde_json::from_value(value).map(InteractionDataOptionValue::Boolean)
            }
            InteractionDataOptionType::User => {
                serde_json::from_value(value).map(InteractionDataOptionValue::User)
            }
            InteractionDataOptionType::Channel => {
                serde_json::from_value(value).map(InteractionDataOptionValue::Channel)
            }
            InteractionDataOptionType::Role => {
                serde_json::from_value(value).map(InteractionDataOptionValue::Role)
            }
            InteractionDataOptionType::Mentionable => {
                serde_json::from_value(value).map(InteractionDataOptionValue::Mentionable)
            }
            InteractionDataOptionType::Number => {
                serde_json::from_value(value).map(InteractionDataOptionValue::Number)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(option)
    }
}
