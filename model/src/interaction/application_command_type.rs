use crate::ModelError;
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ApplicationCommandType {
    ChatInput = 1,
    User = 2,
    Message = 3,
}

impl ApplicationCommandType {
    pub fn is_context_menu(&self) -> bool {
        matches!(self, Self::User | Self::Message)
    }
}

impl Default for ApplicationCommandType {
    fn default() -> Self {
        Self::ChatInput
    }
}

impl TryFrom<u64> for ApplicationCommandType {
    type Error = ModelError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ChatInput,
            2 => Self::User,
            3 => Self::Message,
            _ => {
                return Err(ModelError::UnknownDiscriminant {
                    kind: "application command type",
                    value,
                })
            }
        })
    }
}

/// The subset of [`ApplicationCommandType`] that context menu commands may declare.
#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ContextMenuCommandType {
    User = 2,
    Message = 3,
}

impl From<ContextMenuCommandType> for ApplicationCommandType {
    fn from(value: ContextMenuCommandType) -> Self {
        match value {
            ContextMenuCommandType::User => Self::User,
            ContextMenuCommandType::Message => Self::Message,
        }
    }
}
