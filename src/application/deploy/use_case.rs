//! Deploy use case
//!
//! Orchestrates the provisioning pipeline against a transport:
//! 1. Ensure the site directory layout exists
//! 2. Sync the source checkout to the deployed commit
//! 3. Harden settings and provision the secret key
//! 4. Ensure the virtualenv exists and install requirements
//! 5. Collect static assets
//! 6. Apply database migrations
//!
//! Steps run strictly in order; the first failing remote command aborts
//! the run. Completed steps are never rolled back.

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{
    quote, quote_path, DeployEvent, DeployEventSink, NoopEventSink, Transport, TransportResult,
};
use crate::domain::{secret, settings, Site, Step, SITE_SUBFOLDERS};

use super::options::DeployOptions;
use super::result::DeployReport;

/// Deploy use case - runs the pipeline over an injected transport
pub struct DeployUseCase<T: Transport> {
    transport: T,
}

impl<T: Transport> DeployUseCase<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute the deploy pipeline silently
    pub fn execute(&self, options: &DeployOptions) -> TransportResult<DeployReport> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy pipeline with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> TransportResult<DeployReport> {
        let site = options.site();
        let mut report = DeployReport::new(options.commit.clone());
        let sink = event_sink.as_ref();

        sink.on_event(DeployEvent::Started {
            host: site.host.clone(),
            user: site.user.clone(),
            commit: options.commit.clone(),
        });

        for (index, step) in Step::ALL.into_iter().enumerate() {
            sink.on_event(DeployEvent::StepStarted { index, step });
            match step {
                Step::CreateDirectories => self.create_directories(&site, &mut report, sink)?,
                Step::SyncSource => self.sync_source(&site, options, &mut report, sink)?,
                Step::UpdateSettings => self.update_settings(&site, options, &mut report, sink)?,
                Step::UpdateVirtualenv => {
                    self.update_virtualenv(&site, options, &mut report, sink)?
                }
                Step::CollectStatic => self.collect_static(&site, &mut report, sink)?,
                Step::MigrateDatabase => self.migrate_database(&site, &mut report, sink)?,
            }
            sink.on_event(DeployEvent::StepCompleted { index, step });
            report.completed.push(step);
        }

        sink.on_event(DeployEvent::Completed {
            steps: report.completed.len(),
        });

        Ok(report)
    }

    /// Ensure the four site subfolders exist (create-if-absent, recursive)
    fn create_directories(
        &self,
        site: &Site,
        report: &mut DeployReport,
        sink: &dyn DeployEventSink,
    ) -> TransportResult<()> {
        for subfolder in SITE_SUBFOLDERS {
            let dir = site.site_dir().join(subfolder);
            let command = format!("mkdir -p {}", quote_path(&dir));
            self.run_logged(Step::CreateDirectories, &command, report, sink)?;
        }
        Ok(())
    }

    /// Clone or fetch, then hard-reset the checkout to the deployed commit
    fn sync_source(
        &self,
        site: &Site,
        options: &DeployOptions,
        report: &mut DeployReport,
        sink: &dyn DeployEventSink,
    ) -> TransportResult<()> {
        let source_dir = site.source_dir();
        let quoted_source = quote_path(&source_dir);

        if self.transport.exists(&source_dir.join(".git")) {
            let command = format!("cd {} && git fetch", quoted_source);
            self.run_logged(Step::SyncSource, &command, report, sink)?;
        } else {
            let command = format!("git clone {} {}", quote(&options.repo_url), quoted_source);
            self.run_logged(Step::SyncSource, &command, report, sink)?;
        }

        let command = format!(
            "cd {} && git reset --hard {}",
            quoted_source,
            quote(&options.commit)
        );
        self.run_logged(Step::SyncSource, &command, report, sink)?;
        Ok(())
    }

    /// Harden settings in place and provision the secret key
    ///
    /// The secret key file and the settings import line are both guarded
    /// by existence checks, so re-runs leave them untouched.
    fn update_settings(
        &self,
        site: &Site,
        options: &DeployOptions,
        report: &mut DeployReport,
        sink: &dyn DeployEventSink,
    ) -> TransportResult<()> {
        let settings_path = site.settings_path(&options.app);
        let original = self.transport.read(&settings_path)?;
        let patched = settings::harden(&original, &site.host);
        if patched != original {
            self.transport.write(&settings_path, &patched)?;
            self.record_write(Step::UpdateSettings, &settings_path, report, sink);
        }

        let secret_key_path = site.secret_key_path(&options.app);
        if !self.transport.exists(&secret_key_path) {
            let key = secret::generate();
            self.transport
                .append(&secret_key_path, &format!("SECRET_KEY = '{}'\n", key))?;
            self.record_write(Step::UpdateSettings, &secret_key_path, report, sink);
        }

        if !settings::has_secret_key_import(&patched) {
            self.transport.append(
                &settings_path,
                &format!("\n{}\n", settings::SECRET_KEY_IMPORT),
            )?;
            self.record_write(Step::UpdateSettings, &settings_path, report, sink);
        }
        Ok(())
    }

    /// Create the virtualenv if missing, then install requirements
    ///
    /// The install runs on every deploy; only env creation is guarded.
    fn update_virtualenv(
        &self,
        site: &Site,
        options: &DeployOptions,
        report: &mut DeployReport,
        sink: &dyn DeployEventSink,
    ) -> TransportResult<()> {
        let virtualenv_dir = site.virtualenv_dir();
        let pip = virtualenv_dir.join("bin/pip");

        if !self.transport.exists(&pip) {
            let command = format!(
                "{} -m venv {}",
                quote(&options.python),
                quote_path(&virtualenv_dir)
            );
            self.run_logged(Step::UpdateVirtualenv, &command, report, sink)?;
        }

        let requirements = site.source_dir().join(&options.requirements);
        let command = format!(
            "{} install -r {}",
            quote_path(&pip),
            quote_path(&requirements)
        );
        self.run_logged(Step::UpdateVirtualenv, &command, report, sink)?;
        Ok(())
    }

    /// Collect static assets with the application's own tooling
    fn collect_static(
        &self,
        site: &Site,
        report: &mut DeployReport,
        sink: &dyn DeployEventSink,
    ) -> TransportResult<()> {
        let command = format!(
            "cd {} && ../virtualenv/bin/python manage.py collectstatic --noinput",
            quote_path(&site.source_dir())
        );
        self.run_logged(Step::CollectStatic, &command, report, sink)?;
        Ok(())
    }

    /// Apply pending database migrations
    fn migrate_database(
        &self,
        site: &Site,
        report: &mut DeployReport,
        sink: &dyn DeployEventSink,
    ) -> TransportResult<()> {
        let command = format!(
            "cd {} && ../virtualenv/bin/python manage.py migrate --noinput",
            quote_path(&site.source_dir())
        );
        self.run_logged(Step::MigrateDatabase, &command, report, sink)?;
        Ok(())
    }

    /// Issue one remote command, logging it to the report and the sink
    fn run_logged(
        &self,
        step: Step,
        command: &str,
        report: &mut DeployReport,
        sink: &dyn DeployEventSink,
    ) -> TransportResult<String> {
        if sink.wants_command_events() {
            sink.on_event(DeployEvent::CommandRun {
                step,
                command: command.to_string(),
            });
        }
        report.commands_run += 1;
        self.transport.run(command)
    }

    fn record_write(
        &self,
        step: Step,
        path: &Path,
        report: &mut DeployReport,
        sink: &dyn DeployEventSink,
    ) {
        report.files_written.push(path.to_path_buf());
        sink.on_event(DeployEvent::FileWritten {
            step,
            path: path.to_path_buf(),
        });
    }
}
