use crate::interaction::{ApplicationCommandOption, ApplicationCommandType, ContextMenuCommandType};
use crate::{util, Snowflake, TypeLiteral};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A command as returned by the API once registered.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ApplicationCommand {
    ChatInput(ChatInputCommand),
    ContextMenu(ContextMenuCommand),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatInputCommand {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TypeLiteral<1>>,
    pub application_id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub name: Box<str>,
    pub description: Box<str>,
    pub options: Vec<ApplicationCommandOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permission: Option<bool>,
    pub version: Snowflake,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContextMenuCommand {
    pub id: Snowflake,
    pub r#type: ContextMenuCommandType,
    pub application_id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permission: Option<bool>,
    pub version: Snowflake,
}

impl ApplicationCommand {
    pub fn kind(&self) -> ApplicationCommandType {
        match self {
            Self::ChatInput(_) => ApplicationCommandType::ChatInput,
            Self::ContextMenu(c) => c.r#type.into(),
        }
    }

    pub fn id(&self) -> Snowflake {
        match self {
            Self::ChatInput(c) => c.id,
            Self::ContextMenu(c) => c.id,
        }
    }

    pub fn application_id(&self) -> Snowflake {
        match self {
            Self::ChatInput(c) => c.application_id,
            Self::ContextMenu(c) => c.application_id,
        }
    }

    /// `None` for global commands.
    pub fn guild_id(&self) -> Option<Snowflake> {
        match self {
            Self::ChatInput(c) => c.guild_id,
            Self::ContextMenu(c) => c.guild_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::ChatInput(c) => &c.name,
            Self::ContextMenu(c) => &c.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::ChatInput(c) => &c.description,
            Self::ContextMenu(c) => &c.description,
        }
    }

    pub fn version(&self) -> Snowflake {
        match self {
            Self::ChatInput(c) => c.version,
            Self::ContextMenu(c) => c.version,
        }
    }

    pub fn options(&self) -> &[ApplicationCommandOption] {
        match self {
            Self::ChatInput(c) => &c.options,
            Self::ContextMenu(_) => &[],
        }
    }
}

impl<'de> Deserialize<'de> for ApplicationCommand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let command_type: ApplicationCommandType =
            util::optional_discriminant(&value, "application command type")
                .map_err(util::reject::<D::Error>)?
                .unwrap_or_default();

        let command = match command_type {
            ApplicationCommandType::ChatInput => {
                serde_json::from_value(value).map(ApplicationCommand::ChatInput)
            }
            ApplicationCommandType::User | ApplicationCommandType::Message => {
                serde_json::from_value(value).map(ApplicationCommand::ContextMenu)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chat_input() -> Value {
        json!({
            "id": "891234567890123456",
            "application_id": "508391840525975553",
            "name": "ticket",
            "description": "Manage tickets",
            "options": [
                {"type": 1, "name": "close", "description": "Close the ticket"}
            ],
            "version": "891234567890123457"
        })
    }

    #[test]
    fn test_missing_type_is_chat_input() {
        let command: ApplicationCommand = serde_json::from_value(chat_input()).unwrap();

        assert_eq!(command.kind(), ApplicationCommandType::ChatInput);
        assert_eq!(command.options().len(), 1);
        assert_eq!(command.guild_id(), None);
        assert_eq!(command.application_id(), Snowflake(508391840525975553));
        assert_eq!(serde_json::to_value(&command).unwrap(), chat_input());
    }

    #[test]
    fn test_explicit_chat_input_type() {
        let mut fixture = chat_input();
        fixture["type"] = json!(1);
        fixture["guild_id"] = json!("41771983423143937");
        fixture["default_permission"] = json!(false);

        let command: ApplicationCommand = serde_json::from_value(fixture.clone()).unwrap();
        assert_eq!(command.guild_id(), Some(Snowflake(41771983423143937)));
        assert_eq!(serde_json::to_value(&command).unwrap(), fixture);
    }

    #[test]
    fn test_context_menu() {
        let fixture = json!({
            "id": "891234567890123458",
            "type": 3,
            "application_id": "508391840525975553",
            "name": "Open ticket from message",
            "description": "",
            "version": "891234567890123459"
        });

        let command: ApplicationCommand = serde_json::from_value(fixture.clone()).unwrap();
        assert_eq!(command.kind(), ApplicationCommandType::Message);
        assert!(command.options().is_empty());
        assert_eq!(serde_json::to_value(&command).unwrap(), fixture);
    }

    #[test]
    fn test_context_menu_rejects_options() {
        let mut fixture = chat_input();
        fixture["type"] = json!(2);

        assert!(serde_json::from_value::<ApplicationCommand>(fixture).is_err());
    }

    #[test]
    fn test_rejects_unknown_type() {
        let mut fixture = chat_input();
        fixture["type"] = json!(4);

        assert!(serde_json::from_value::<ApplicationCommand>(fixture).is_err());
    }

    #[test]
    fn test_chat_input_requires_version() {
        let mut fixture = chat_input();
        fixture.as_object_mut().unwrap().remove("version");

        assert!(serde_json::from_value::<ApplicationCommand>(fixture).is_err());
    }
}
