//! Ports - capabilities the deploy pipeline depends on
//!
//! The transport port abstracts remote command execution so the pipeline
//! can run against a fake in tests; the event port makes the pipeline
//! observable without coupling it to a terminal.

pub mod events;
pub mod transport;

pub use events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use transport::{quote, quote_path, Transport, TransportError, TransportResult};
