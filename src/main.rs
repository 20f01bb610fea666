use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use timetable_chart::{run, ChartConfig};

/// Renders a weekly timetable CSV as a day-by-hour grid chart.
///
/// With no arguments, reads `schedule.csv` and writes `emploi_du_temps12.png`
/// in the current directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Timetable to read (overrides the config file)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// PNG file to write (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with chart settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut config = match &cli.config {
        Some(path) => ChartConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(input) = cli.input {
        config.paths.input = input;
    }
    if let Some(output) = cli.output {
        config.paths.output = output;
    }

    run(&config).with_context(|| {
        format!(
            "rendering {} to {}",
            config.paths.input.display(),
            config.paths.output.display()
        )
    })?;
    Ok(())
}
