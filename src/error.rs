use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

/// Failures that abort a render. The `Display` text is shown to users as-is.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{}: no such file or directory", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("{}: not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{}: permission denied", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: nesting exceeds the maximum depth of {limit}", .path.display())]
    DepthLimitExceeded { path: PathBuf, limit: usize },
}

impl RenderError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::PathNotFound { path }
            | Self::NotADirectory { path }
            | Self::PermissionDenied { path }
            | Self::Io { path, .. }
            | Self::DepthLimitExceeded { path, .. } => path,
        }
    }
}
