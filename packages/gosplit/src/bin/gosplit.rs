//! gosplit CLI
//!
//! Splits the Go package in the current (or given) directory into one file
//! per top-level declaration.
//!
//! # Usage
//!
//! ```bash
//! # Split the package in the current directory
//! gosplit
//!
//! # Show what would be written
//! gosplit --dir ./pkg/geo --dry-run
//!
//! # Fail instead of overwriting on Foo/foo clashes, no .bak files
//! gosplit --collision reject --no-backup
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gosplit::{CollisionPolicy, FormatterKind, SplitConfig, SplitError, SplitPipeline};

#[derive(Parser)]
#[command(name = "gosplit")]
#[command(about = "Split a Go package into one file per top-level declaration", long_about = None)]
struct Cli {
    /// Package directory (default: current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delete originals instead of renaming them to *.go.bak
    #[arg(long)]
    no_backup: bool,

    /// Skip goimports
    #[arg(long)]
    no_format: bool,

    /// What to do when two declarations map to one file (overwrite, reject)
    #[arg(long)]
    collision: Option<CollisionPolicy>,

    /// Print the planned units as JSON and modify nothing
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;
    let pipeline = SplitPipeline::new(config)?;

    if cli.dry_run {
        let plan = pipeline.plan()?;
        let json = serde_json::to_string_pretty(&plan)?;
        println!("{}", json);
        return Ok(());
    }

    pipeline.run()?;
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<SplitConfig> {
    let mut config = match &cli.config {
        Some(path) => SplitConfig::from_yaml(path).map_err(SplitError::from)?,
        None => SplitConfig::default(),
    };

    config = match &cli.dir {
        Some(dir) => config.with_dir(dir),
        None if cli.config.is_none() => {
            let cwd = std::env::current_dir().map_err(SplitError::WorkingDirectory)?;
            config.with_dir(cwd)
        }
        None => config,
    };
    if cli.no_backup {
        config = config.backup(false);
    }
    if cli.no_format {
        config = config.formatter(FormatterKind::None);
    }
    if let Some(policy) = cli.collision {
        config = config.collision(policy);
    }
    Ok(config)
}
