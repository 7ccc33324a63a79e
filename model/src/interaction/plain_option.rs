use crate::interaction::OptionChannelType;
use crate::TypeLiteral;
use serde::{Deserialize, Serialize};

/// An option whose only extra field is `required`. `N` is the option type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct PlainOption<const N: u8> {
    pub r#type: TypeLiteral<N>,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

pub type BooleanOption = PlainOption<5>;
pub type UserOption = PlainOption<6>;
pub type RoleOption = PlainOption<8>;
pub type MentionableOption = PlainOption<9>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ChannelOption {
    pub r#type: TypeLiteral<7>,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<OptionChannelType>>,
}
