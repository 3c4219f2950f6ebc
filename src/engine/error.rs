//! Flow errors.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::backend::ApiError;

/// Errors that can occur while running a flow.
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("File error on {path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ToolkitError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ToolkitError::Validation(message.into())
    }

    pub(crate) fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ToolkitError::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Reduce the error to the category shown to the user.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolkitError::Validation(_) => ErrorKind::Validation,
            ToolkitError::FileIo { .. } => ErrorKind::FileIo,
            ToolkitError::Api(err) => match err {
                ApiError::Authentication(_) => ErrorKind::Authentication,
                ApiError::Validation(_) => ErrorKind::Validation,
                ApiError::RemoteService { .. } | ApiError::InvalidResponse(_) => {
                    ErrorKind::RemoteService
                }
                ApiError::Transport(_) => ErrorKind::Transport,
            },
        }
    }
}

/// Error categories surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    Validation,
    RemoteService,
    Transport,
    FileIo,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Authentication => "authentication error",
            ErrorKind::Validation => "validation error",
            ErrorKind::RemoteService => "remote service error",
            ErrorKind::Transport => "network error",
            ErrorKind::FileIo => "file error",
        };
        f.write_str(label)
    }
}
