use clap::{Parser, Subcommand};
use lockdiff::config::Config;
use lockdiff::core::LockError;
use lockdiff::report::ReportFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "lockdiff")]
#[command(about = "Detect missing and tampered dependencies by diffing lockfiles")]
#[command(version)]
struct Cli {
    /// Use this config file instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a recorded lockfile against a freshly generated one
    Diff {
        /// Trusted, previously committed lockfile
        recorded: PathBuf,
        /// Lockfile generated from the current project
        observed: PathBuf,
        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
        /// Report differences without failing
        #[arg(long)]
        warn_only: bool,
    },
    /// Verify the project lockfile against artifacts in the local repository
    Verify {
        /// Lockfile path (defaults to the project lockfile found from the current directory)
        #[arg(short, long)]
        lockfile: Option<PathBuf>,
        /// Local artifact repository
        #[arg(short, long)]
        repository: Option<PathBuf>,
        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
        /// Report differences without failing
        #[arg(long)]
        warn_only: bool,
    },
    /// Show the effective configuration
    Config,
}

fn main() -> Result<(), LockError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_config(cli.config).and_then(|config| match cli.command {
        Commands::Diff {
            recorded,
            observed,
            format,
            warn_only,
        } => cli::diff::run(&config, &recorded, &observed, format, warn_only),
        Commands::Verify {
            lockfile,
            repository,
            format,
            warn_only,
        } => cli::verify::run(&config, lockfile, repository, format, warn_only),
        Commands::Config => cli::config::run(&config),
    });

    // Display error with helpful suggestions
    if let Err(ref e) = result {
        eprintln!("\n{}", lockdiff::core::error_help::format_error_with_help(e));
    }

    result
}

fn load_config(path: Option<PathBuf>) -> Result<Config, LockError> {
    match path {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    }
}
