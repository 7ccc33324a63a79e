use crate::interaction::{
    ApplicationCommandInteractionDataOption, ApplicationCommandType, InteractionDataOptionValue,
};
use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// The `data` object of an application command or autocomplete interaction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationCommandInteractionData {
    pub id: Snowflake,
    pub name: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ApplicationCommandType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandInteractionDataOption>,
}

impl ApplicationCommandInteractionData {
    pub fn focused(&self) -> Option<&InteractionDataOptionValue> {
        self.options.iter().find_map(|option| option.focused())
    }

    pub fn option(&self, name: &str) -> Option<&ApplicationCommandInteractionDataOption> {
        self.options.iter().find(|option| option.name() == name)
    }
}
