//! Siteup CLI - idempotent provisioning and deployment
//!
//! Usage: siteup <COMMAND>
//!
//! Commands:
//!   deploy  Provision a remote host and deploy the local HEAD commit

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            host,
            user,
            repo,
            app,
            yes,
            dry_run,
        } => commands::deploy::cmd_deploy(commands::deploy::DeployArgs {
            host,
            user,
            repo,
            app,
            yes,
            dry_run,
            json: cli.json,
            verbose: cli.verbose,
        }),
    }
}
