//! Configuration: where the store lives and the command defaults.
//!
//! Read from an optional TOML file. `TICKLER_CONFIG` points at it; otherwise
//! `.tickler.toml` in the working directory is tried. A missing file means
//! defaults.
//!
//! ```toml
//! store_path = "tasks.json"
//! default_priority = 3
//! default_postpone_days = 7
//! color = true
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::command::{DEFAULT_POSTPONE_DAYS, DEFAULT_PRIORITY};
use crate::domain::{Result, TicklerError};

pub const CONFIG_ENV: &str = "TICKLER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = ".tickler.toml";
pub const DEFAULT_STORE_FILE: &str = "tasks.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store_path: PathBuf,
    pub default_priority: i64,
    pub default_postpone_days: i64,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            default_priority: DEFAULT_PRIORITY,
            default_postpone_days: DEFAULT_POSTPONE_DAYS,
            color: true,
        }
    }
}

impl Config {
    /// Config file location: `$TICKLER_CONFIG`, else `./.tickler.toml`.
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(TicklerError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| TicklerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.store_path, PathBuf::from("tasks.json"));
        assert_eq!(config.default_priority, 3);
        assert_eq!(config.default_postpone_days, 7);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickler.toml");
        fs::write(&path, "store_path = \"/tmp/todo.json\"\ndefault_postpone_days = 2\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/todo.json"));
        assert_eq!(config.default_postpone_days, 2);
        assert_eq!(config.default_priority, 3);
        assert!(config.color);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickler.toml");
        fs::write(&path, "default_priority = \"high\"").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(TicklerError::Config { .. })
        ));
    }
}
