use crate::{ModelError, Snowflake};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Permission overrides for one command in one guild.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GuildApplicationCommandPermissions {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub guild_id: Snowflake,
    pub permissions: Vec<ApplicationCommandPermissions>,
}

/// Entry of a batch edit request, replacing the overrides of the command `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BatchEditApplicationCommandPermissions {
    pub id: Snowflake,
    pub permissions: Vec<ApplicationCommandPermissions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApplicationCommandPermissions {
    pub id: Snowflake,
    pub r#type: ApplicationCommandPermissionType,
    pub permission: bool,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ApplicationCommandPermissionType {
    Role = 1,
    User = 2,
}

impl ApplicationCommandPermissions {
    pub fn role(id: Snowflake, permission: bool) -> Self {
        Self {
            id,
            r#type: ApplicationCommandPermissionType::Role,
            permission,
        }
    }

    pub fn user(id: Snowflake, permission: bool) -> Self {
        Self {
            id,
            r#type: ApplicationCommandPermissionType::User,
            permission,
        }
    }
}

impl TryFrom<u64> for ApplicationCommandPermissionType {
    type Error = ModelError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Role,
            2 => Self::User,
            _ => {
                return Err(ModelError::UnknownDiscriminant {
                    kind: "application command permission type",
                    value,
                })
            }
        })
    }
}

impl From<GuildApplicationCommandPermissions> for BatchEditApplicationCommandPermissions {
    fn from(value: GuildApplicationCommandPermissions) -> Self {
        Self {
            id: value.id,
            permissions: value.permissions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_guild_permissions() {
        let fixture = json!({
            "id": "891234567890123456",
            "application_id": "508391840525975553",
            "guild_id": "41771983423143937",
            "permissions": [
                {"id": "41771983423143936", "type": 1, "permission": true},
                {"id": "53908232506183680", "type": 2, "permission": false}
            ]
        });

        let permissions: GuildApplicationCommandPermissions =
            serde_json::from_value(fixture.clone()).unwrap();

        assert_eq!(
            permissions.permissions,
            vec![
                ApplicationCommandPermissions::role(Snowflake(41771983423143936), true),
                ApplicationCommandPermissions::user(Snowflake(53908232506183680), false),
            ]
        );
        assert_eq!(serde_json::to_value(&permissions).unwrap(), fixture);
    }

    #[test]
    fn test_batch_edit() {
        let batch: Vec<BatchEditApplicationCommandPermissions> = serde_json::from_value(json!([
            {
                "id": "891234567890123456",
                "permissions": [{"id": "41771983423143936", "type": 1, "permission": true}]
            }
        ]))
        .unwrap();

        assert_eq!(batch[0].permissions[0].r#type, ApplicationCommandPermissionType::Role);
    }

    #[test]
    fn test_batch_edit_from_guild_permissions() {
        let guild = GuildApplicationCommandPermissions {
            id: Snowflake(1),
            application_id: Snowflake(2),
            guild_id: Snowflake(3),
            permissions: vec![ApplicationCommandPermissions::user(Snowflake(4), true)],
        };

        assert_eq!(
            serde_json::to_value(BatchEditApplicationCommandPermissions::from(guild)).unwrap(),
            json!({"id": "1", "permissions": [{"id": "4", "type": 2, "permission": true}]})
        );
    }

    #[test]
    fn test_rejects_channel_type() {
        assert!(serde_json::from_value::<ApplicationCommandPermissions>(json!({
            "id": "1",
            "type": 3,
            "permission": true
        }))
        .is_err());
        assert!(ApplicationCommandPermissionType::try_from(3).is_err());
    }
}
