use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read update config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse update config: {0}")]
    ParseConfig(#[from] serde_json::Error),

    #[error("Invalid remote config: {0}")]
    RemoteConfig(#[from] nudge_core::ConfigError),

    #[error("Update check task failed: {0}")]
    CheckTask(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Host(#[from] nudge_present::HostError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}
