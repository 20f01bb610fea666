//! Weekly timetable chart renderer
//!
//! Reads a table of `(day, start, end, activity)` rows and draws it as a grid
//! chart: one column per weekday, time of day running down the page, one
//! colored and labelled block per row.
//!
//! # Example
//!
//! ```no_run
//! use timetable_chart::{run, ChartConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = run(&ChartConfig::default())?;
//! println!("Wrote {} blocks to {}", summary.entries, summary.output.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tracing::info;

pub mod config;
pub mod display;
pub mod error;
pub mod layout;
pub mod parser;
pub mod render;
pub mod schedule;

pub use config::ChartConfig;
pub use error::{Error, Result};
pub use layout::{build_chart, BlockLayout, ChartLayout};
pub use parser::{load_schedule, read_schedule};
pub use schedule::{ScheduleEntry, TimeOfDay, Weekday};

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub entries: usize,
    pub activities: usize,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Loads the schedule, lays it out, renders it and writes the PNG.
///
/// Any failure aborts before the output file is touched.
pub fn run(config: &ChartConfig) -> Result<RunSummary> {
    config.validate()?;

    info!("Loading schedule from {}", config.paths.input.display());
    let entries = load_schedule(&config.paths.input, config.delimiter_byte())?;

    let layout = build_chart(&entries, config)?;
    let activities = layout.activities.len();
    display::log_schedule_summary(&entries, activities);

    let image = render::render_chart(&layout, &config.figure);
    render::write_png(&image, &config.paths.output)?;
    info!(
        "Chart saved to {} ({}x{})",
        config.paths.output.display(),
        image.width(),
        image.height()
    );

    Ok(RunSummary {
        entries: entries.len(),
        activities,
        output: config.paths.output.clone(),
        width: image.width(),
        height: image.height(),
    })
}
