//! Persisted user data: day annotations and birthdays.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calendar::store::{BirthdayBook, EventStore};
use crate::error::{Result, StorageError};

/// Everything the user entered, as stored in the state file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerState {
    pub events: EventStore,
    pub birthdays: BirthdayBook,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load state from `path`. A missing file yields empty state.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No state file at {}, starting empty", path.display());
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path).map_err(StorageError::Read)?;
        let state: PlannerState = serde_json::from_str(&data).map_err(StorageError::Parse)?;
        info!(
            "Loaded state from {} ({} annotations, {} birthdays)",
            path.display(),
            state.events.len(),
            state.birthdays.len()
        );
        Ok(state)
    }

    /// Write state to `path` through a temporary file in the same directory.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(StorageError::Write)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        let tmp = temp_path(path);
        std::fs::write(&tmp, data).map_err(StorageError::Write)?;
        std::fs::rename(&tmp, path).map_err(StorageError::Write)?;

        debug!("Saved state to {}", path.display());
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "state.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
