//! Error taxonomy shared by the managers and timers
//!
//! Three kinds of failure exist:
//! - `Validation`: bad user input, surfaced to the caller so it can be corrected
//! - `Storage`: a data file could not be read or written
//! - `NotFound`: the addressed entry does not exist
//!
//! None of them is fatal; the server always returns control to the client.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssistantError {
    #[error("{0}")]
    Validation(String),

    #[error("storage error for {}: {message}", .path.display())]
    Storage { path: PathBuf, message: String },

    #[error("{0}")]
    NotFound(String),
}

impl AssistantError {
    pub fn validation(message: impl Into<String>) -> Self {
        AssistantError::Validation(message.into())
    }

    pub fn storage(path: &Path, err: impl std::fmt::Display) -> Self {
        AssistantError::Storage {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AssistantError::NotFound(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AssistantError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AssistantError::NotFound(_))
    }
}

pub type Result<T, E = AssistantError> = std::result::Result<T, E>;
