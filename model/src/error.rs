pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{kind} was missing")]
    MissingDiscriminant { kind: &'static str },

    #[error("{kind} was not an integer")]
    NonIntegerDiscriminant { kind: &'static str },

    #[error("invalid {kind} \"{value}\"")]
    UnknownDiscriminant { kind: &'static str, value: u64 },

    #[error("{kind} \"{value}\" is not allowed in {position}")]
    DisallowedDiscriminant {
        kind: &'static str,
        value: u64,
        position: &'static str,
    },
}
