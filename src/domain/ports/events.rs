//! Deploy event port
//!
//! Provides an observable interface for deploy runs. Enables progress
//! reporting, NDJSON event streams, and test assertions on ordering.

use std::path::PathBuf;

use crate::domain::Step;

/// Event emitted during a deploy run
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        host: String,
        user: String,
        commit: String,
    },

    /// A pipeline step began
    StepStarted { index: usize, step: Step },

    /// A remote command was issued
    CommandRun { step: Step, command: String },

    /// A remote file was created or rewritten
    FileWritten { step: Step, path: PathBuf },

    /// A pipeline step finished
    StepCompleted { index: usize, step: Step },

    /// Deploy completed
    Completed { steps: usize },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants per-command events
    ///
    /// Progress-only sinks can skip the command chatter.
    fn wants_command_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }

    fn wants_command_events(&self) -> bool {
        false
    }
}
