use thiserror::Error;

use crate::kernel::services::ports::RemoteError;

/// Typed outcome of a refused or failed session operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    Conflict(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("read-only session: {0} is not allowed")]
    Permission(String),

    #[error("document is still loading: {0}")]
    DocumentLoading(String),

    #[error("unsaved changes must be saved first")]
    UnsavedChanges,
}

impl From<RemoteError> for SessionError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::NotFound(path) => SessionError::NotFound(path),
            RemoteError::Conflict(path) => SessionError::Conflict(path),
            RemoteError::Forbidden(msg) => SessionError::Permission(msg),
            RemoteError::InvalidPath(path) => SessionError::Validation(path),
            other => SessionError::Network(other.to_string()),
        }
    }
}

/// Validates a '/'-joined path coming from user input.
pub fn validate_path(path: &str) -> Result<(), SessionError> {
    if path.trim().is_empty() {
        return Err(SessionError::Validation("file name is empty".to_string()));
    }
    for segment in path.split('/') {
        if segment.trim().is_empty() {
            return Err(SessionError::Validation(format!(
                "empty segment in path {path:?}"
            )));
        }
        if segment == "." || segment == ".." {
            return Err(SessionError::Validation(format!(
                "relative segment in path {path:?}"
            )));
        }
    }
    Ok(())
}
