use crate::interaction::{ApplicationCommandOption, ApplicationCommandType};
use serde::{Deserialize, Serialize};

/// Body sent to create or overwrite a command.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ApplicationCommandPayload {
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permission: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ApplicationCommandType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{ChoicesStringOption, LeafOption, StringOption, StringOptionChoice};
    use serde_json::json;

    #[test]
    fn test_serialize_minimal() {
        let payload = ApplicationCommandPayload {
            name: "help".into(),
            description: "Shows the help menu".into(),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"name": "help", "description": "Shows the help menu"})
        );
    }

    #[test]
    fn test_serialize_with_options() {
        let payload = ApplicationCommandPayload {
            name: "blep".into(),
            description: "Send a random adorable animal photo".into(),
            options: Some(vec![ApplicationCommandOption::Leaf(LeafOption::String(
                StringOption::Choices(ChoicesStringOption {
                    name: "animal".into(),
                    description: "The type of animal".into(),
                    required: Some(true),
                    choices: Some(vec![
                        StringOptionChoice::new("Dog", "animal_dog".into()),
                        StringOptionChoice::new("Cat", "animal_cat".into()),
                    ]),
                    ..Default::default()
                }),
            ))]),
            default_permission: Some(true),
            r#type: Some(ApplicationCommandType::ChatInput),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "blep",
                "type": 1,
                "description": "Send a random adorable animal photo",
                "default_permission": true,
                "options": [{
                    "type": 3,
                    "name": "animal",
                    "description": "The type of animal",
                    "required": true,
                    "choices": [
                        {"name": "Dog", "value": "animal_dog"},
                        {"name": "Cat", "value": "animal_cat"}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_rejects_registered_fields() {
        assert!(serde_json::from_value::<ApplicationCommandPayload>(json!({
            "id": "1",
            "name": "help",
            "description": "Shows the help menu"
        }))
        .is_err());
    }

    #[test]
    fn test_rejects_unknown_type() {
        assert!(serde_json::from_value::<ApplicationCommandPayload>(json!({
            "name": "help",
            "description": "Shows the help menu",
            "type": 4
        }))
        .is_err());
    }
}
