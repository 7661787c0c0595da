use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no config directory found")]
    NoConfigDir,

    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
