use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use snklog::commands::{less_log, list_logs, show_failed_rules, tail_log, TailOptions};
use snklog::core::{load_config, LogCatalog};

/// snklog - Manage Snakemake and Slurm log files
#[derive(Parser)]
#[command(name = "snklog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./snklog.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the Slurm log directory
    #[arg(long, global = true)]
    slurm_dir: Option<PathBuf>,

    /// Override the Snakemake log directory
    #[arg(long, global = true)]
    snakemake_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List recent log files
    #[command(visible_alias = "ls")]
    List {
        /// Number of files to list for each log type
        #[arg(short = 'n', long)]
        num_files: Option<usize>,
    },

    /// Tail a log file
    #[command(visible_alias = "t")]
    Tail {
        /// Identifier of the log file (e.g., S1, M2, s1, m2)
        identifier: String,

        /// Number of lines to display
        #[arg(short = 'n', long)]
        lines: Option<usize>,

        /// Follow the file as it grows
        #[arg(short, long)]
        follow: bool,
    },

    /// Open a log file with the pager
    #[command(visible_alias = "l")]
    Less {
        /// Identifier of the log file (e.g., S1, M2, s1, m2)
        identifier: String,
    },

    /// Show failed rules in a log file
    #[command(visible_alias = "f")]
    Failed {
        /// Identifier of the log file. If not provided, the most recent Snakemake log is used.
        identifier: Option<String>,
    },

    /// Show failed rules in a log file and print the rule logs if present
    #[command(name = "failedv", visible_alias = "fv")]
    FailedVerbose {
        /// Identifier of the log file. If not provided, the most recent Snakemake log is used.
        identifier: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut cli = Cli::parse();

    // Set up logging; RUST_LOG takes precedence over --verbose
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command.take() else {
        if let Err(e) = Cli::command().print_help() {
            warn!("Failed to print help: {}", e);
        }
        return;
    };

    if let Err(e) = run(cli, command).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli, command: Commands) -> snklog::Result<()> {
    let project_root = std::env::current_dir()?;
    let config = load_config(
        &project_root,
        cli.config.as_deref(),
        cli.slurm_dir,
        cli.snakemake_dir,
    )?;
    let catalog = LogCatalog::from_config(&config.logs);

    match command {
        Commands::List { num_files } => {
            list_logs(&catalog, num_files.unwrap_or(config.display.num_files))
        }

        Commands::Tail {
            identifier,
            lines,
            follow,
        } => {
            let options = TailOptions {
                lines: lines.unwrap_or(config.display.tail_lines),
                follow,
                poll_interval: Duration::from_millis(config.follow.poll_interval_ms),
            };
            tail_log(&catalog, &identifier, options).await
        }

        Commands::Less { identifier } => less_log(&catalog, &identifier, &config.pager),

        Commands::Failed { identifier } => show_failed_rules(&catalog, identifier.as_deref(), false),

        Commands::FailedVerbose { identifier } => {
            show_failed_rules(&catalog, identifier.as_deref(), true)
        }
    }
}
