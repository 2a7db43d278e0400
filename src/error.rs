use std::path::PathBuf;

use inquire::InquireError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error when the terminal form fails for a reason other than cancellation
    #[error("inquire error: {0}")]
    Inquire(InquireError),
    /// User cancelled or interrupted the setup form
    #[error("setup cancelled by user")]
    Aborted,
    /// Error when an external command exits non-zero or cannot be started
    #[error("`{command}` failed: {reason}")]
    Command {
        /// Command line that was executed
        command: String,
        /// Captured stderr, exit status or spawn error
        reason: String,
    },
    /// Error during input validation.
    #[error("validation error: {0}")]
    Validation(String),
    /// Error when the public key cannot be read for the summary
    #[error("failed to read public key '{}': {source}", path.display())]
    PublicKey {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error when the home directory cannot be determined
    #[error("failed to find the home directory")]
    HomeDirNotFound,
}

impl From<InquireError> for AppError {
    fn from(err: InquireError) -> Self {
        match err {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                AppError::Aborted
            }
            other => AppError::Inquire(other),
        }
    }
}
