//! Transport port - abstraction over remote command execution
//!
//! This trait allows the deploy pipeline to run commands and touch files
//! on the target host without depending on a concrete implementation
//! (SSH, mock).

use std::path::{Path, PathBuf};

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport operation errors
#[derive(Debug)]
pub enum TransportError {
    /// Remote command exited non-zero
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
    /// Remote file not found
    NotFound(PathBuf),
    /// I/O error while talking to the transport
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io(err)
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::CommandFailed {
                command,
                status,
                stderr,
            } => {
                write!(f, "command `{}` failed", command)?;
                if let Some(code) = status {
                    write!(f, " with exit code {}", code)?;
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            TransportError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            TransportError::Io(err) => write!(f, "I/O error: {}", err),
            TransportError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

/// Abstract remote-execution interface
///
/// Implementations:
/// - `SshTransport` - shells out to the system `ssh` binary
/// - `MockTransport` - scripted in-memory fake for tests
///
/// The contract for `run` is fail-fast: a non-zero exit status is an
/// error carrying the command's stderr, never a partial success.
pub trait Transport {
    /// Run a shell command on the target host, returning its stdout
    fn run(&self, command: &str) -> TransportResult<String>;

    /// Check if a path exists on the target host
    fn exists(&self, path: &Path) -> bool;

    /// Read a remote text file
    fn read(&self, path: &Path) -> TransportResult<String>;

    /// Write a remote text file (replacing its content)
    fn write(&self, path: &Path, content: &str) -> TransportResult<()>;

    /// Append to a remote text file, creating it if absent
    fn append(&self, path: &Path, content: &str) -> TransportResult<()>;
}

/// Quote a value for safe interpolation into a shell command
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Quote a path for safe interpolation into a shell command
pub fn quote_path(path: &Path) -> String {
    quote(&path.to_string_lossy())
}
