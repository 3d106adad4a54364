//! Deploy options
//!
//! Configuration for one deploy run. The commit is resolved from the
//! local working copy before the run starts; the pipeline never asks the
//! remote which revision to deploy.

use crate::domain::Site;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Target host name; also becomes the single allowed host
    pub host: String,
    /// Operating user on the target host
    pub user: String,
    /// URL the source repository is cloned from
    pub repo_url: String,
    /// Commit hash the checkout is hard-reset to (local HEAD)
    pub commit: String,
    /// Application package containing `settings.py`
    pub app: String,
    /// Interpreter used to create the virtualenv
    pub python: String,
    /// Requirements manifest, relative to the source checkout
    pub requirements: String,
}

impl DeployOptions {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        repo_url: impl Into<String>,
        commit: impl Into<String>,
        app: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            repo_url: repo_url.into(),
            commit: commit.into(),
            app: app.into(),
            python: "python3".to_string(),
            requirements: "requirements.txt".to_string(),
        }
    }

    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }

    /// The site this deploy targets
    pub fn site(&self) -> Site {
        Site::new(self.host.as_str(), self.user.as_str())
    }
}
