//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{demo, measure, sum};
use crate::storage::{Config, MAX_PRECISION};

#[derive(Parser)]
#[command(name = "shapes")]
#[command(author, version, about = "Perimeter and area calculator for flat shapes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Fractional digits for formatted values (defaults to the configured precision)
    #[arg(long, short = 'p', global = true)]
    pub precision: Option<usize>,

    /// Path to a config file
    #[arg(long, global = true, env = "SHAPES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Runs the demo scenario when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the built-in demo scenario
    Demo,

    /// Measure a single shape
    #[command(subcommand)]
    Measure(measure::MeasureCommands),

    /// Total area and perimeter of the shapes in a TOML, YAML or JSON file
    Sum {
        /// Collection file
        file: PathBuf,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or_else(|| config.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose(&format!(
        "Config: {}",
        cli.config
            .clone()
            .or_else(Config::default_path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<none>".to_string())
    ));

    let precision = cli.precision.unwrap_or(config.precision);
    if precision > MAX_PRECISION {
        anyhow::bail!("Precision must be at most {}, got {}", MAX_PRECISION, precision);
    }

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo::run(&output, precision)?,
        Commands::Measure(cmd) => measure::run(cmd, &output, precision)?,
        Commands::Sum { file } => sum::run(&output, &file, precision)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
