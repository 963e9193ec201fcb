use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use splitscope_api::SplitwiseClient;

mod auth;
mod config;
mod dashboard;
mod render;
mod report_cmd;
mod setup;
mod state;

use report_cmd::{ReportArgs, ReportRequest};

#[derive(Parser, Debug)]
#[command(
    name = "splitscope",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SPLITSCOPE_BUILD_SHA"), ")"),
    about = "Splitwise expense reports for your share of the bill"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time interactive setup: store an API key and defaults in ~/.splitscope/*
    Setup,

    /// List Splitwise groups visible to your account
    Groups,

    /// Print a report: expense table, totals, category charts, daily trend
    Report {
        #[command(flatten)]
        args: ReportArgs,

        /// Emit the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Full-screen dashboard with month paging
    Dashboard {
        #[command(flatten)]
        args: ReportArgs,
    },

    /// Manage the stored Splitwise API key
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AuthCommand {
    /// Paste and store a personal Splitwise API key
    SetKey,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    tracing::debug!("splitscope {} starting", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    match cli.command {
        Command::Setup => {
            setup::run_setup().await?;
        }

        Command::Groups => {
            let cfg = config::load_config()?;
            let client = make_client(&cfg)?;
            let groups = client.groups().await?;
            if groups.is_empty() {
                println!("No groups visible for this account.");
            }
            for g in groups {
                println!("{:>12}  {}", g.id, g.name);
            }
        }

        Command::Report { args, json } => {
            let cfg = config::load_config()?;
            let client = make_client(&cfg)?;
            let request = ReportRequest::from_args(&args, &cfg)?;
            let (label, report) = report_cmd::run_report(&client, &request).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                render::print_report(&label, &report);
            }
        }

        Command::Dashboard { args } => {
            let cfg = config::load_config()?;
            let client = make_client(&cfg)?;
            let request = ReportRequest::from_args(&args, &cfg)?;
            dashboard::run_dashboard(&client, request)?;
        }

        Command::Auth { command } => match command {
            AuthCommand::SetKey => {
                auth::set_key()?;
            }
        },
    }

    Ok(())
}

fn make_client(cfg: &config::Config) -> Result<SplitwiseClient> {
    let key = auth::require_api_key()?;
    SplitwiseClient::with_base_url(&key, &cfg.api.base_url)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SPLITSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}
