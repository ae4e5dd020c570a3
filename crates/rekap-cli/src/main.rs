//! rekap CLI — interactive roster shell and report commands.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rekap_core::config::load_config_from;

mod commands;

#[derive(Parser)]
#[command(
    name = "rekap",
    version,
    about = "Student attendance and grade tracker"
)]
struct Cli {
    /// Config file path (default: ./rekap.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Shell,

    /// Print the recap of the saved roster
    Recap,

    /// List students whose final score is below a threshold
    Below {
        /// Score threshold (default: below_threshold from config)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Write reports for the saved roster
    Report {
        /// Output format: md, html, json, all (comma-separated allowed)
        #[arg(long, default_value = "md")]
        format: String,
    },

    /// Create a starter config and empty CSV files
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    let config = || load_config_from(config_path);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::execute(config()?),
        Commands::Recap => commands::recap::execute(&config()?),
        Commands::Below { threshold } => commands::recap::execute_below(&config()?, threshold),
        Commands::Report { format } => commands::report::execute(&config()?, &format),
        Commands::Init => commands::init::execute(config_path),
    }
}
