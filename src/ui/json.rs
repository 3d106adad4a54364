//! JSON event sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Utc;

use siteup::{DeployEvent, DeployEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let ts = Utc::now().to_rfc3339();
        let json = match event {
            DeployEvent::Started { host, user, commit } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "ts": ts,
                    "host": host,
                    "user": user,
                    "commit": commit,
                })
            }

            DeployEvent::StepStarted { index, step } => {
                serde_json::json!({
                    "event": "step_start",
                    "command": "deploy",
                    "ts": ts,
                    "index": index,
                    "step": step.display_name(),
                })
            }

            DeployEvent::CommandRun { step, command } => {
                serde_json::json!({
                    "event": "command",
                    "command": "deploy",
                    "ts": ts,
                    "step": step.display_name(),
                    "shell": command,
                })
            }

            DeployEvent::FileWritten { step, path } => {
                serde_json::json!({
                    "event": "file_written",
                    "command": "deploy",
                    "ts": ts,
                    "step": step.display_name(),
                    "path": path.display().to_string(),
                })
            }

            DeployEvent::StepCompleted { index, step } => {
                serde_json::json!({
                    "event": "step_complete",
                    "command": "deploy",
                    "ts": ts,
                    "index": index,
                    "step": step.display_name(),
                })
            }

            DeployEvent::Completed { steps } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "ts": ts,
                    "status": "success",
                    "steps": steps,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_command_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
