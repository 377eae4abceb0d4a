//! Portscout CLI - Find out what is holding your ports
//!
//! A command-line tool for checking whether development ports are free,
//! which process holds them, and what project that process belongs to.

mod commands;
mod port_args;

use clap::{Parser, Subcommand};
use portscout_core::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portscout")]
#[command(author, version, about = "Check ports and identify the processes holding them")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Ports to check, e.g. 3000 5432 or 3000-3010
    ports: Vec<String>,

    #[command(flatten)]
    report: ReportArgs,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Args)]
struct ReportArgs {
    /// Output format: table, detailed, simple or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Project name shown in reports
    #[arg(short, long)]
    project: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check ports and report conflicts
    Scan {
        /// Ports to check, e.g. 3000 5432 or 3000-3010
        #[arg(required = true)]
        ports: Vec<String>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Analyze the process with the given PID
    Analyze { pid: u32 },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value (format, project, lsof, ps, ss)
    Set { key: String, value: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Scan { ports, report }) => {
            commands::scan::run(&ports, report.format, report.project, cli.json).await?;
        }
        Some(Commands::Analyze { pid }) => {
            commands::analyze::run(pid, cli.json).await?;
        }
        Some(Commands::Config { action }) => match action {
            Some(ConfigAction::Set { key, value }) => commands::config::set(&key, &value).await?,
            Some(ConfigAction::Show) | None => commands::config::show(cli.json).await?,
        },
        None => {
            commands::scan::run(&cli.ports, cli.report.format, cli.report.project, cli.json)
                .await?;
        }
    }

    Ok(())
}
