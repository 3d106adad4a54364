//! Console rendering - progress sink and header/summary/plan views

use crossterm::style::Stylize;

use siteup::{DeployEvent, DeployEventSink, DeployPlan, DeployReport, Step};

use super::theme::{colors, Icon};
use super::UiContext;

/// Event sink that renders step progress to stdout
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn dim(&self, text: &str) -> String {
        if self.ui.color {
            format!("{}", text.with(colors::DIM))
        } else {
            text.to_string()
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            // Header and summary are rendered by the command layer.
            DeployEvent::Started { .. } | DeployEvent::Completed { .. } => {}
            DeployEvent::StepStarted { .. } => {}
            DeployEvent::CommandRun { command, .. } => {
                println!(
                    "      {} {}",
                    Icon::Arrow.colored(self.ui.color, self.ui.unicode),
                    self.dim(&command)
                );
            }
            DeployEvent::FileWritten { path, .. } => {
                println!(
                    "      {} wrote {}",
                    Icon::Arrow.colored(self.ui.color, self.ui.unicode),
                    path.display()
                );
            }
            DeployEvent::StepCompleted { index, step } => {
                println!(
                    "[{}/{}] {} {}",
                    index + 1,
                    Step::ALL.len(),
                    Icon::Success.colored(self.ui.color, self.ui.unicode),
                    step
                );
            }
        }
    }

    fn wants_command_events(&self) -> bool {
        self.ui.verbose > 0
    }
}

/// Render the run header shown before any step output
pub fn render_header(
    action: &str,
    repo: &str,
    destination: &str,
    commit: &str,
    ui: UiContext,
) -> String {
    let mut out = format!(
        "{} Siteup {}\n",
        Icon::Deploy.colored(ui.color, ui.unicode),
        action
    );
    out.push_str(&format!("  Repo:   {}\n", repo));
    out.push_str(&format!("  Target: {}\n", destination));
    out.push_str(&format!("  Commit: {}\n", commit));
    out
}

/// Render the closing summary of a completed deploy
pub fn render_summary(report: &DeployReport, ui: UiContext) -> String {
    format!(
        "{} Deploy complete: {} steps, {} commands, {} files written\n",
        Icon::Success.colored(ui.color, ui.unicode),
        report.completed.len(),
        report.commands_run,
        report.files_written.len(),
    )
}

/// Render a dry-run plan; no commands are issued
pub fn render_plan(plan: &DeployPlan, ui: UiContext) -> String {
    let mut out = String::new();
    for (index, planned) in plan.steps.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<12} {}\n",
            index + 1,
            planned.step.display_name(),
            planned.detail
        ));
    }
    out.push_str(&format!(
        "{} Dry run: no commands were issued\n",
        Icon::Progress.colored(ui.color, ui.unicode)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteup::DeployOptions;

    fn plain() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            verbose: 0,
        }
    }

    #[test]
    fn header_includes_repo_target_and_commit() {
        let rendered = render_header(
            "Deploy",
            "https://example.com/repo.git",
            "deploy@staging.example.com",
            "abc123",
            plain(),
        );
        assert!(rendered.contains("Repo:   https://example.com/repo.git"));
        assert!(rendered.contains("Target: deploy@staging.example.com"));
        assert!(rendered.contains("Commit: abc123"));
    }

    #[test]
    fn summary_counts_steps_and_commands() {
        let mut report = DeployReport::new("abc123");
        report.completed.extend(Step::ALL);
        report.commands_run = 10;

        let rendered = render_summary(&report, plain());
        assert!(rendered.contains("6 steps"));
        assert!(rendered.contains("10 commands"));
    }

    #[test]
    fn plan_lists_all_steps_in_order() {
        let options = DeployOptions::new("h", "u", "https://example.com/r.git", "abc", "app");
        let plan = DeployPlan::new(&options);

        let rendered = render_plan(&plan, plain());
        assert!(rendered.contains("1. directories"));
        assert!(rendered.contains("6. database"));
        assert!(rendered.contains("no commands were issued"));
    }

    #[test]
    fn quiet_sink_skips_command_events() {
        let sink = ConsoleEventSink::new(plain());
        assert!(!sink.wants_command_events());
    }

    #[test]
    fn verbose_sink_wants_command_events() {
        let sink = ConsoleEventSink::new(UiContext { verbose: 1, ..plain() });
        assert!(sink.wants_command_events());
    }
}
