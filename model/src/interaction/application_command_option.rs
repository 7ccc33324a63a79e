use crate::interaction::{
    BooleanOption, ChannelOption, MentionableOption, NumberOption, RoleOption, StringOption,
    UserOption,
};
use crate::{util, ModelError, TypeLiteral};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// An option declared on a command at registration time.
///
/// Subcommand groups hold subcommands, subcommands hold [`LeafOption`]s, so an option tree is at
/// most two levels deep below the command.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ApplicationCommandOption {
    SubCommand(SubCommandOption),
    SubCommandGroup(SubCommandGroupOption),
    Leaf(LeafOption),
}

/// Any option that carries a value rather than nested options.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LeafOption {
    String(StringOption),
    Integer(NumberOption),
    Boolean(BooleanOption),
    User(UserOption),
    Channel(ChannelOption),
    Role(RoleOption),
    Mentionable(MentionableOption),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ApplicationCommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
}

impl TryFrom<u64> for ApplicationCommandOptionType {
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
            _ => {
                return Err(ModelError::UnknownDiscriminant {
                    kind: "application command option type",
                    value,
                })
            }
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SubCommandOption {
    pub r#type: TypeLiteral<1>,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<LeafOption>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SubCommandGroupOption {
    pub r#type: TypeLiteral<2>,
    pub name: Box<str>,
    pub description: Box<str>,
    pub options: Vec<SubCommandOption>,
}

impl ApplicationCommandOption {
    pub fn kind(&self) -> ApplicationCommandOptionType {
        match self {
            Self::SubCommand(_) => ApplicationCommandOptionType::SubCommand,
            Self::SubCommandGroup(_) => ApplicationCommandOptionType::SubCommandGroup,
            Self::Leaf(leaf) => leaf.kind(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::SubCommand(o) => &o.name,
            Self::SubCommandGroup(o) => &o.name,
            Self::Leaf(leaf) => leaf.name(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::SubCommand(o) => &o.description,
            Self::SubCommandGroup(o) => &o.description,
            Self::Leaf(leaf) => leaf.description(),
        }
    }
}

impl LeafOption {
    pub fn kind(&self) -> ApplicationCommandOptionType {
        match self {
            Self::String(_) => ApplicationCommandOptionType::String,
            Self::Integer(_) => ApplicationCommandOptionType::Integer,
            Self::Boolean(_) => ApplicationCommandOptionType::Boolean,
            Self::User(_) => ApplicationCommandOptionType::User,
            Self::Channel(_) => ApplicationCommandOptionType::Channel,
            Self::Role(_) => ApplicationCommandOptionType::Role,
            Self::Mentionable(_) => ApplicationCommandOptionType::Mentionable,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::String(o) => o.name(),
            Self::Integer(o) => o.name(),
            Self::Boolean(o) => &o.name,
            Self::User(o) => &o.name,
            Self::Channel(o) => &o.name,
            Self::Role(o) => &o.name,
            Self::Mentionable(o) => &o.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::String(o) => o.description(),
            Self::Integer(o) => o.description(),
            Self::Boolean(o) => &o.description,
            Self::User(o) => &o.description,
            Self::Channel(o) => &o.description,
            Self::Role(o) => &o.description,
            Self::Mentionable(o) => &o.description,
        }
    }

    pub fn required(&self) -> bool {
        let required = match self {
            Self::String(o) => o.required(),
            Self::Integer(o) => o.required(),
            Self::Boolean(o) => o.required,
            Self::User(o) => o.required,
            Self::Channel(o) => o.required,
            Self::Role(o) => o.required,
            Self::Mentionable(o) => o.required,
        };

        required.unwrap_or(false)
    }
}

impl<'de> Deserialize<'de> for ApplicationCommandOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let option_type: ApplicationCommandOptionType =
            util::discriminant(&value, "application command option type")
                .map_err(util::reject::<D::Error>)?;

        let option = match option_type {
            ApplicationCommandOptionType::SubCommand => {
                serde_json::from_value(value).map(ApplicationCommandOption::SubCommand)
            }
            ApplicationCommandOptionType::SubCommandGroup => {
                serde_json::from_value(value).map(ApplicationCommandOption::SubCommandGroup)
            }
            _ => serde_json::from_value(value).map(ApplicationCommandOption::Leaf),
        }
        .map_err(D::Error::custom)?;

        Ok(option)
    }
}

impl<'de> Deserialize<'de> for LeafOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let option_type: ApplicationCommandOptionType =
            util::discriminant(&value, "application command option type")
                .map_err(util::reject::<D::Error>)?;

        let option = match option_type {
            ApplicationCommandOptionType::SubCommand
            | ApplicationCommandOptionType::SubCommandGroup => {
                return Err(util::reject(ModelError::DisallowedDiscriminant {
                    kind: "application command option type",
                    value: option_type as u64,
                    position: "a subcommand",
                }))
            }
            ApplicationCommandOptionType::String => {
                serde_json::from_value(value).map(LeafOption::String)
            }
            ApplicationCommandOptionType::Integer => {
                serde_json::from_value(value).map(LeafOption::Integer)
            }
            ApplicationCommandOptionType::Boolean => {
                serde_json::from_value(value).map(LeafOption::Boolean)
            }
            ApplicationCommandOptionType::User => {
                serde_json::from_value(value).map(LeafOption::User)
            }
            ApplicationCommandOptionType::Channel => {
                serde_json::from_value(value).map(LeafOption::Channel)
            }
            ApplicationCommandOptionType::Role => {
                serde_json::from_value(value).map(LeafOption::Role)
            }
            ApplicationCommandOptionType::Mentionable => {
                serde_json::from_value(value).map(LeafOption::Mentionable)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(option)
    }
}
