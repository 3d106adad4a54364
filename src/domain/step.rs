//! Deploy pipeline steps
//!
//! The pipeline is a fixed ordered sequence; `Step::ALL` is the source of
//! truth for that order.

/// One step of the deploy pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Ensure the site directory layout exists
    CreateDirectories,
    /// Clone or fetch, then hard-reset to the deployed commit
    SyncSource,
    /// Harden settings and provision the secret key
    UpdateSettings,
    /// Create the virtualenv if missing and install requirements
    UpdateVirtualenv,
    /// Collect static assets
    CollectStatic,
    /// Apply pending database migrations
    MigrateDatabase,
}

impl Step {
    /// All steps in execution order
    pub const ALL: [Step; 6] = [
        Step::CreateDirectories,
        Step::SyncSource,
        Step::UpdateSettings,
        Step::UpdateVirtualenv,
        Step::CollectStatic,
        Step::MigrateDatabase,
    ];

    /// Short name used in progress output and event streams
    pub fn display_name(&self) -> &'static str {
        match self {
            Step::CreateDirectories => "directories",
            Step::SyncSource => "source",
            Step::UpdateSettings => "settings",
            Step::UpdateVirtualenv => "virtualenv",
            Step::CollectStatic => "static files",
            Step::MigrateDatabase => "database",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
