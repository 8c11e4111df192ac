//! JsonFileStore - the task mapping as a pretty-printed JSON document.
//!
//! ```json
//! {
//!   "1": { "text": "buy milk", "priority": 3, "time": "2026-10-19T08:30:00.123456789Z" }
//! }
//! ```
//!
//! Timestamps are RFC 3339 with full sub-second precision, so load -> save ->
//! load is lossless and the file stays editable by hand.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{Result, TaskMap, TicklerError};
use crate::ports::TaskStore;

/// File-backed [`TaskStore`]. The file is created on the first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> TicklerError {
        TicklerError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Result<TaskMap> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store missing, starting empty");
                return Ok(TaskMap::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        // A truncated file means "no tasks", same as a missing one.
        if contents.trim().is_empty() {
            return Ok(TaskMap::new());
        }

        let tasks: TaskMap =
            serde_json::from_str(&contents).map_err(|source| TicklerError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = tasks.len(), "store loaded");
        Ok(tasks)
    }

    fn save(&self, tasks: &TaskMap) -> Result<()> {
        let mut json = serde_json::to_string_pretty(tasks).map_err(TicklerError::Encode)?;
        json.push('\n');

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), count = tasks.len(), "store saved");
        Ok(())
    }
}
