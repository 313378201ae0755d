//! Errors raised while opening the scan root

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors for the scan root.
///
/// Anything that goes wrong below the root is absorbed by the walker and
/// never surfaces here.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Folder does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Folder is not readable: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Path is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },
}

impl ScanError {
    /// The path that failed the check.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::NotFound { path }
            | ScanError::PermissionDenied { path }
            | ScanError::NotADirectory { path } => path,
        }
    }
}
