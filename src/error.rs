use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the roster repository and its stores.
///
/// Absence (no record matched) is never an error; those operations return
/// `Option` instead.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("student with id {id} already exists")]
    DuplicateId { id: String },

    #[error("student {id} not found")]
    NotFound { id: String },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("roster serialization error: {0}")]
    Serde(String),

    #[error("roster storage error: {0}")]
    Storage(String),

    #[error("roster lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl RosterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RosterError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serde(err.to_string())
    }
}
