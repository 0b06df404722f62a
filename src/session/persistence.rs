//! Durable session storage.
//!
//! A single TOML file holds the bearer token and the last verified
//! profile so a restart can pre-populate the session without a network
//! round trip. Only the session store reads or writes this file; every
//! other component sees session data through store snapshots.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Profile;

/// Errors that can occur reading or writing the session file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to read session file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize session state: {source}")]
    SerializeError {
        #[source]
        source: toml::ser::Error,
    },
}

/// The on-disk session payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: Option<String>,
    pub profile: Option<Profile>,
}

/// TOML-backed persistence for the session.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// `~/.config/sweety-admin/session.toml` on Unix/macOS, or the
    /// platform equivalent. Falls back to the current directory if no
    /// config directory is available.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("sweety-admin").join("session.toml")
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session. A missing file is an empty session.
    pub fn load(&self) -> Result<StoredSession, PersistError> {
        if !self.path.exists() {
            return Ok(StoredSession::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| PersistError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| PersistError::ParseError {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Write the stored session, creating parent directories as needed.
    pub fn save(&self, session: &StoredSession) -> Result<(), PersistError> {
        let content = toml::to_string_pretty(session)
            .map_err(|source| PersistError::SerializeError { source })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }

        fs::write(&self.path, content).map_err(|e| PersistError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Remove the session file. Removing an already-absent file is not
    /// an error, so clearing is idempotent.
    pub fn clear(&self) -> Result<(), PersistError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistError::WriteError {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
