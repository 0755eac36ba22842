//! JSON session store.
//!
//! One estimate per file; the file is the session boundary, so concurrent
//! estimates stay isolated by simply using different paths. There is no
//! database and no locking: single writer per file by convention.

use std::fs;
use std::path::Path;

use estimate_core::EstimateSession;
use thiserror::Error;
use tracing::debug;

/// Errors raised by the session store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read session file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot write session file '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("session file '{path}' is not a valid estimate: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("session file '{path}' already exists (pass --force to replace it)")]
    AlreadyExists { path: String },

    #[error("cannot serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Loads the session from `path`.
pub fn load(path: &Path) -> Result<EstimateSession, StoreError> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let session = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), "loaded session");
    Ok(session)
}

/// Saves the session to `path`, replacing any previous contents.
pub fn save(
    path: &Path,
    session: &EstimateSession,
) -> Result<(), StoreError> {
    // Sessions are small; pretty output keeps the file diffable by hand.
    let json = serde_json::to_string_pretty(session)?;

    fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), items = session.items().len(), "saved session");
    Ok(())
}

/// Creates a fresh session file. Refuses to clobber an existing file unless
/// `force` is set.
pub fn create(
    path: &Path,
    session: &EstimateSession,
    force: bool,
) -> Result<(), StoreError> {
    if path.exists() && !force {
        return Err(StoreError::AlreadyExists {
            path: path.display().to_string(),
        });
    }
    save(path, session)
}
