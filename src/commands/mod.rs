//! Command layer - bridges the CLI to the application use cases

pub mod deploy;
