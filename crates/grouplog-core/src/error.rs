//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] grouplog_git::GitError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] grouplog_config::ConfigError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
