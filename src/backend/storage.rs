use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ClipdeckError;
use crate::gateway::HistoryItem;

const HISTORY_DIR: &str = "clipdeck";
const HISTORY_FILE: &str = "history.json";

/// JSON file holding the history snapshot between runs.
///
/// No file locking - last writer wins if multiple instances run simultaneously.
#[derive(Debug, Clone)]
pub struct HistoryStorage {
    path: PathBuf,
}

impl HistoryStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/clipdeck/history.json`
    pub fn in_data_dir() -> Result<Self, ClipdeckError> {
        dirs::data_dir()
            .map(|dir| Self::new(dir.join(HISTORY_DIR).join(HISTORY_FILE)))
            .ok_or(ClipdeckError::NoDirectory("data"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<HistoryItem>, ClipdeckError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads, falling back to an empty history on any error.
    pub fn load_or_empty(&self) -> Vec<HistoryItem> {
        match self.load() {
            Ok(items) => {
                log::debug!("Loaded {} history entries from {:?}", items.len(), self.path);
                items
            }
            Err(e) => {
                log::warn!("Ignoring history file {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, items: &[HistoryItem]) -> Result<(), ClipdeckError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
