//! Siteup - idempotent provisioning and deployment for single-host web apps
//!
//! Siteup takes the commit currently checked out in the local working copy
//! and brings a remote host to it: directory layout, source checkout,
//! hardened settings, secret key, virtualenv with dependencies, static
//! assets, and database migrations. Every step is safe to re-run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::deploy::{DeployOptions, DeployPlan, DeployReport, DeployUseCase, PlannedStep};
pub use config::Config;
pub use domain::ports::{
    DeployEvent, DeployEventSink, NoopEventSink, Transport, TransportError, TransportResult,
};
pub use domain::{secret, settings, Site, Step, SITE_SUBFOLDERS};
pub use error::{SiteupError, SiteupResult};
