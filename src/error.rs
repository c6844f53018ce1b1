use thiserror::Error;

use crate::file::FileId;

/// Failures of a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while saving or restoring the playground
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize state: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Saved data is malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// An action needed the active file and could not find it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No active file to {action}.")]
    NoActiveFile { action: &'static str },

    #[error("Active file not found.")]
    MissingRecord(FileId),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Failed to write download: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Browser(String),
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to write preview: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preview frame unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced to the user when a command cannot run
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Please enter a file name.")]
    EmptyFileName,
}
