use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use longdrive_cli::commands::{
    handle_attempt_command, handle_name_command, show_stats, AttemptCommands, NameCommands,
};
use longdrive_cli::Config;
use longdrive_model::GolfModel;
use longdrive_storage::FileStore;

#[derive(Parser)]
#[command(name = "longdrive")]
#[command(about = "Long Drive Log - track your longest golf drives")]
#[command(version)]
struct Cli {
    /// Settings store to use instead of the configured one
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the player name
    #[command(subcommand)]
    Name(NameCommands),
    /// Log and list drives
    #[command(subcommand)]
    Attempt(AttemptCommands),
    /// Show totals, personal best and latest attempt
    Stats,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false) // Don't show module paths in logs
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store_path = match cli.store {
        Some(path) => path,
        None => Config::from_env()?.store_path(),
    };
    tracing::debug!(path = %store_path.display(), "Using settings store");

    let model = GolfModel::new(FileStore::open(&store_path)?);

    match cli.command {
        Commands::Name(command) => handle_name_command(&model, command),
        Commands::Attempt(command) => handle_attempt_command(&model, command),
        Commands::Stats => {
            show_stats(&model);
            Ok(())
        }
    }
}

fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
