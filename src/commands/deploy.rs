//! Deploy command entry point

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use dialoguer::Confirm;

use siteup::infrastructure::{git, SshTransport};
use siteup::{
    Config, DeployEventSink, DeployOptions, DeployPlan, DeployUseCase, SiteupError,
};

use crate::ui::console::{render_header, render_plan, render_summary, ConsoleEventSink};
use crate::ui::json::JsonEventSink;
use crate::ui::UiContext;

/// Placeholder shown in dry-run plans when the invoking directory is not
/// a git working copy
const UNRESOLVED_COMMIT: &str = "<local HEAD>";

/// Arguments for the deploy command, CLI flags plus global output options
pub struct DeployArgs {
    pub host: String,
    pub user: Option<String>,
    pub repo: Option<String>,
    pub app: Option<String>,
    pub yes: bool,
    pub dry_run: bool,
    pub json: bool,
    pub verbose: u8,
}

pub fn cmd_deploy(args: DeployArgs) -> Result<()> {
    let config = Config::load_layered(Path::new("."))?;

    // CLI flags win over config; config layers were merged at load time.
    let repo_url = args
        .repo
        .or_else(|| config.repo.clone())
        .ok_or(SiteupError::MissingRepoUrl)?;
    let app = args
        .app
        .or_else(|| config.app.clone())
        .ok_or(SiteupError::MissingApp)?;
    let user = args
        .user
        .or_else(|| config.user.clone())
        .or_else(|| std::env::var("USER").ok())
        .ok_or(SiteupError::MissingUser)?;

    // The deploy pins the target to the local HEAD; a dry run may proceed
    // without one so the plan can be previewed from anywhere.
    let commit = match git::local_head_commit(Path::new(".")) {
        Ok(commit) => commit,
        Err(_) if args.dry_run => UNRESOLVED_COMMIT.to_string(),
        Err(err) => return Err(err.into()),
    };

    let options = DeployOptions::new(
        args.host.as_str(),
        user.as_str(),
        repo_url.as_str(),
        commit.as_str(),
        app.as_str(),
    )
    .with_python(config.python())
    .with_requirements(config.requirements());
    let destination = options.site().ssh_destination();
    let ui = UiContext::detect(args.verbose);

    if args.dry_run {
        let plan = DeployPlan::new(&options);
        if args.json {
            println!("{}", plan_json(&plan));
        } else {
            print!(
                "{}",
                render_header("Deploy (dry run)", &repo_url, &destination, &commit, ui)
            );
            print!("{}", render_plan(&plan, ui));
        }
        return Ok(());
    }

    if !args.yes && !args.json && ui.is_tty {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Deploy {} to {}?",
                short_commit(&commit),
                destination
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            return Err(SiteupError::Aborted.into());
        }
    }

    if !args.json {
        print!(
            "{}",
            render_header("Deploy", &repo_url, &destination, &commit, ui)
        );
    }

    let use_case = DeployUseCase::new(SshTransport::new(destination));
    let sink: Arc<dyn DeployEventSink> = if args.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(ui))
    };

    let report = use_case
        .execute_with_events(&options, sink)
        .map_err(SiteupError::from)?;

    if !args.json {
        print!("{}", render_summary(&report, ui));
    }
    Ok(())
}

fn plan_json(plan: &DeployPlan) -> String {
    serde_json::json!({
        "event": "plan",
        "command": "deploy",
        "host": plan.host,
        "user": plan.user,
        "repo": plan.repo_url,
        "commit": plan.commit,
        "steps": plan
            .steps
            .iter()
            .map(|planned| {
                serde_json::json!({
                    "step": planned.step.display_name(),
                    "detail": planned.detail,
                })
            })
            .collect::<Vec<_>>(),
    })
    .to_string()
}

fn short_commit(commit: &str) -> &str {
    commit.get(..12).unwrap_or(commit)
}
