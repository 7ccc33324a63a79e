use crate::ModelError;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Channel kinds a channel option may be restricted to through `channel_types`.
#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OptionChannelType {
    GuildText = 0,
    GuildVoice = 2,
    GuildCategory = 4,
    GuildNews = 5,
    GuildStore = 6,
    GuildStageVoice = 13,
}

impl TryFrom<u64> for OptionChannelType {
    type Error = ModelError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::GuildText,
            2 => Self::GuildVoice,
            4 => Self::GuildCategory,
            5 => Self::GuildNews,
            6 => Self::GuildStore,
            13 => Self::GuildStageVoice,
            _ => {
                return Err(ModelError::UnknownDiscriminant {
                    kind: "option channel type",
                    value,
                })
            }
        })
    }
}
