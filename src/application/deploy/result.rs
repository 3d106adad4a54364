//! Deploy report
//!
//! Result types for deploy runs.

use std::path::PathBuf;

use crate::domain::Step;

/// Result of a deploy run
#[derive(Debug, Clone)]
pub struct DeployReport {
    /// Commit the site was reset to
    pub commit: String,
    /// Steps that ran to completion, in order
    pub completed: Vec<Step>,
    /// Remote files created or rewritten
    pub files_written: Vec<PathBuf>,
    /// Total remote commands issued
    pub commands_run: usize,
}

impl DeployReport {
    pub fn new(commit: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            completed: Vec::new(),
            files_written: Vec::new(),
            commands_run: 0,
        }
    }

    /// Whether every pipeline step completed
    pub fn is_complete(&self) -> bool {
        self.completed.len() == Step::ALL.len()
    }
}
