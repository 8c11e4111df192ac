//! Errors - everything that ends a tickler invocation.
//!
//! There is no recovery anywhere: every variant is terminal for the current
//! command. The classes still matter for the user-facing message.
//!
//! - Fatal I/O: `Io`, `Corrupt`, `Config`
//! - Validation: everything else. These are raised before any save, so the
//!   store is never touched.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicklerError {
    #[error("failed to access task store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("task store {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize task store: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("task text is required")]
    MissingText,

    #[error("which task? give an id or part of its text")]
    MissingTarget,

    /// Also used when a substring matches more than one task.
    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("priority must be between 1 and 5, got {0}")]
    InvalidPriority(i64),

    #[error("timestamp out of range")]
    TimestampOverflow,
}

impl TicklerError {
    /// Whether the error came from bad user input rather than the filesystem.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            TicklerError::Io { .. }
                | TicklerError::Corrupt { .. }
                | TicklerError::Encode(_)
                | TicklerError::Config { .. }
        )
    }
}

pub type Result<T, E = TicklerError> = std::result::Result<T, E>;
