use clap::{Parser, Subcommand};

/// Siteup - idempotent provisioning and deployment tool
#[derive(Parser, Debug)]
#[command(name = "siteup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows every remote command)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Provision a remote host and deploy the local HEAD commit
    Deploy {
        /// Target host; also becomes the application's allowed host
        #[arg(long)]
        host: String,

        /// Operating user on the target host
        #[arg(long)]
        user: Option<String>,

        /// Source repository URL (overrides siteup.toml)
        #[arg(long)]
        repo: Option<String>,

        /// Application package containing settings.py (overrides siteup.toml)
        #[arg(long)]
        app: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Show the provisioning plan without connecting
        #[arg(long)]
        dry_run: bool,
    },
}
