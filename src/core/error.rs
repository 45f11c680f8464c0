use thiserror::Error;

use crate::melee::category::LimbSubsystem;

#[derive(Error, Debug)]
pub enum MeleeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Category '{category}' is listed for both {first:?} and {second:?}")]
    DuplicateCategory {
        category: String,
        first: LimbSubsystem,
        second: LimbSubsystem,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MeleeError>;
