//! Error types for Siteup
//!
//! Uses `thiserror` for library errors; the command layer wraps these
//! with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::TransportError;

/// Result type alias for Siteup operations
pub type SiteupResult<T> = Result<T, SiteupError>;

/// Main error type for Siteup operations
#[derive(Error, Debug)]
pub enum SiteupError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No repository URL available from flags or config
    #[error("no repository URL - set `repo` in siteup.toml or pass --repo")]
    MissingRepoUrl,

    /// No application package available from flags or config
    #[error("no application package - set `app` in siteup.toml or pass --app")]
    MissingApp,

    /// No operating user available from flags, config, or environment
    #[error("no target user - set `user` in siteup.toml or pass --user")]
    MissingUser,

    /// Local git invocation failed
    #[error("cannot resolve local HEAD commit: {0}")]
    Git(String),

    /// Remote transport failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Deploy was aborted at the confirmation prompt
    #[error("deploy aborted by user")]
    Aborted,
}
