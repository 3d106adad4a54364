//! SSH transport implementation
//!
//! Implements the transport port by shelling out to the system `ssh`
//! binary. File writes go through stdin (`cat > tmp && mv`) so content
//! never appears on a command line, and replacement is atomic.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{quote_path, Transport, TransportError, TransportResult};

/// Transport that runs commands on the target host via `ssh`
///
/// Authentication, known-hosts handling, and connection multiplexing are
/// whatever the operator's ssh configuration provides.
pub struct SshTransport {
    /// SSH destination (`user@host`)
    destination: String,
}

impl SshTransport {
    /// Create a new transport for the given SSH destination
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Get the SSH destination
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Run a command on the target, optionally piping `input` to stdin
    fn run_command(&self, command: &str, input: Option<&str>) -> TransportResult<String> {
        let mut child = Command::new("ssh")
            .arg(&self.destination)
            .arg(command)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(content) = input {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(content.as_bytes())?;
            }
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(TransportError::CommandFailed {
                command: command.to_string(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Transport for SshTransport {
    fn run(&self, command: &str) -> TransportResult<String> {
        self.run_command(command, None)
    }

    fn exists(&self, path: &Path) -> bool {
        self.run_command(&format!("test -e {}", quote_path(path)), None)
            .is_ok()
    }

    fn read(&self, path: &Path) -> TransportResult<String> {
        match self.run_command(&format!("cat {}", quote_path(path)), None) {
            Ok(content) => Ok(content),
            Err(TransportError::CommandFailed { .. }) if !self.exists(path) => {
                Err(TransportError::NotFound(path.to_path_buf()))
            }
            Err(err) => Err(err),
        }
    }

    fn write(&self, path: &Path, content: &str) -> TransportResult<()> {
        let p = quote_path(path);
        let tmp = quote_path(&path.with_extension("tmp"));

        // Write to temp file then atomically rename
        self.run_command(&format!("cat > {}", tmp), Some(content))?;
        self.run_command(&format!("mv -f {} {}", tmp, p), None)?;
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> TransportResult<()> {
        self.run_command(&format!("cat >> {}", quote_path(path)), Some(content))?;
        Ok(())
    }
}
