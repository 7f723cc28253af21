//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::config::DEFAULT_CONFIG_FILE;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "wfseed")]
#[command(version)]
#[command(
    about = "Provision a workflow repository and its container registry repository from a template",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create both repositories, customize the descriptor, and publish it
    #[clap(visible_alias = "p")]
    Provision {
        /// Configuration file (.toml, .json, .yaml)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// Validate configuration and show the planned run without contacting any host
    #[clap(visible_alias = "c")]
    Check {
        /// Configuration file (.toml, .json, .yaml)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "wfseed=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let result: Result<(), AppError> = match cli.command {
        Commands::Provision { config } => crate::provision(&config).map(|_| ()),
        Commands::Check { config } => crate::check(&config).map(|_| ()),
    };

    match result {
        Ok(()) => {}
        Err(e @ AppError::StageFailed { .. }) => {
            println!("❌ {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
