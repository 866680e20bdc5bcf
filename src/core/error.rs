//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitUploadError`] which covers every way a git-upload run can
//! stop early. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the failures that carry git's own error text.
//!
//! # Public API
//! - [`GitUploadError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitUploadError>`
//!
//! # Error Categories
//! - **Environment**: No identity, not a repository, no remote (preflight only)
//! - **Git commands**: Staging, commit or push exited non-zero
//! - **Ambient**: I/O, config serialization, update lookups

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-upload
#[derive(Error, Debug)]
pub enum GitUploadError {
    // Preflight errors
    #[error("Git user name or email is not configured")]
    IdentityNotConfigured,

    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("No remote repository is configured")]
    NoRemoteConfigured,

    // Git command errors
    #[error("Staging failed: {stderr}")]
    StageFailed { stderr: String },

    #[error("Commit failed: {stderr}")]
    CommitFailed { stderr: String },

    #[error("Push failed: {stderr}")]
    PushFailed { stderr: String },

    // Config errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Update check failed: {0}")]
    UpdateCheck(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitUploadError
pub type Result<T> = std::result::Result<T, GitUploadError>;

impl GitUploadError {
    /// Create a staging failed error from git's stderr
    pub fn stage_failed(stderr: impl Into<String>) -> Self {
        Self::StageFailed {
            stderr: stderr.into(),
        }
    }

    /// Create a commit failed error from git's stderr
    pub fn commit_failed(stderr: impl Into<String>) -> Self {
        Self::CommitFailed {
            stderr: stderr.into(),
        }
    }

    /// Create a push failed error from git's stderr
    pub fn push_failed(stderr: impl Into<String>) -> Self {
        Self::PushFailed {
            stderr: stderr.into(),
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Remediation lines printed under the error message
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            Self::IdentityNotConfigured => &[
                "git config --global user.name \"Your Name\"",
                "git config --global user.email \"youremail@example.com\"",
            ],
            Self::NotInGitRepo => &[
                "Run 'git init' or change to a directory inside a git repository",
            ],
            Self::NoRemoteConfigured => &["git remote add origin https://github.com/user/repo.git"],
            Self::PushFailed { .. } => &[
                "Check the error above and make sure the remote is configured correctly",
            ],
            _ => &[],
        }
    }

    /// Whether the error was raised by a preflight check
    pub fn is_environment_error(&self) -> bool {
        matches!(
            self,
            Self::IdentityNotConfigured | Self::NotInGitRepo | Self::NoRemoteConfigured
        )
    }
}
