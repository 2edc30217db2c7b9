use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipdeckError {
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Corrupt history file: {0}")]
    CorruptHistory(#[from] serde_json::Error),

    #[error("Corrupt history file: entry id {0} leaves no ids for new entries")]
    HistoryIdsExhausted(u64),

    #[error("Autostart entry: {0}")]
    Autostart(#[from] auto_launch::Error),

    #[error("Path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),

    #[error("Could not determine {0} directory")]
    NoDirectory(&'static str),

    #[error("Unknown route `{0}` (expected /, /about or /prefs)")]
    UnknownRoute(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
