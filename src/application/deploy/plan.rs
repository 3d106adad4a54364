//! Deploy plan
//!
//! A rendered description of what a deploy run would do, for dry runs.
//! Built entirely from options; no connection to the target is made, so
//! branches that depend on remote state ("clone or fetch") describe both
//! outcomes.

use crate::domain::{Step, SITE_SUBFOLDERS};

use super::options::DeployOptions;

/// One step of a deploy plan, with a human-readable detail line
#[derive(Debug, Clone)]
pub struct PlannedStep {
    pub step: Step,
    pub detail: String,
}

/// A full dry-run plan for one site
#[derive(Debug, Clone)]
pub struct DeployPlan {
    pub host: String,
    pub user: String,
    pub repo_url: String,
    pub commit: String,
    pub steps: Vec<PlannedStep>,
}

impl DeployPlan {
    pub fn new(options: &DeployOptions) -> Self {
        let site = options.site();
        let site_dir = site.site_dir();
        let source_dir = site.source_dir();

        let steps = Step::ALL
            .into_iter()
            .map(|step| {
                let detail = match step {
                    Step::CreateDirectories => format!(
                        "ensure {}/{{{}}}",
                        site_dir.display(),
                        SITE_SUBFOLDERS.join(",")
                    ),
                    Step::SyncSource => format!(
                        "clone {} or fetch, then reset --hard {}",
                        options.repo_url, options.commit
                    ),
                    Step::UpdateSettings => format!(
                        "harden {} and provision the secret key",
                        site.settings_path(&options.app).display()
                    ),
                    Step::UpdateVirtualenv => format!(
                        "create virtualenv with {} if missing, pip install -r {}",
                        options.python, options.requirements
                    ),
                    Step::CollectStatic => format!(
                        "cd {} && ../virtualenv/bin/python manage.py collectstatic --noinput",
                        source_dir.display()
                    ),
                    Step::MigrateDatabase => format!(
                        "cd {} && ../virtualenv/bin/python manage.py migrate --noinput",
                        source_dir.display()
                    ),
                };
                PlannedStep { step, detail }
            })
            .collect();

        Self {
            host: options.host.clone(),
            user: options.user.clone(),
            repo_url: options.repo_url.clone(),
            commit: options.commit.clone(),
            steps,
        }
    }
}
