//! Chart configuration.
//!
//! Every setting has a default, so the binary runs without any configuration
//! file. A TOML file may override any subset of the settings:
//!
//! ```toml
//! [paths]
//! input = "semaine.csv"
//!
//! [blocks]
//! wrap_width = 16
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::schedule::time_to_hours;

/// Full chart configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub figure: FigureSettings,
    #[serde(default)]
    pub blocks: BlockSettings,
    #[serde(default)]
    pub labels: LabelSettings,
}

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

/// Figure geometry and the visible time range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSettings {
    /// Width in inches
    #[serde(default = "default_width_in")]
    pub width_in: f32,
    /// Height in inches
    #[serde(default = "default_height_in")]
    pub height_in: f32,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    /// First visible time, at the top of the chart
    #[serde(default = "default_day_start")]
    pub day_start: String,
    /// Last visible time, at the bottom of the chart
    #[serde(default = "default_day_end")]
    pub day_end: String,
}

/// How each scheduled block is filled and labelled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSettings {
    /// Maximum label line length, in characters
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: f32,
    /// Label size in points
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Label size for blocks shorter than `short_block_hours`
    #[serde(default = "default_short_font_size")]
    pub short_font_size: u32,
    #[serde(default = "default_short_block_hours")]
    pub short_block_hours: f64,
}

/// Chart title and axis captions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
}

fn default_input() -> PathBuf {
    PathBuf::from("schedule.csv")
}

fn default_output() -> PathBuf {
    PathBuf::from("emploi_du_temps12.png")
}

fn default_delimiter() -> char {
    ','
}

fn default_width_in() -> f32 {
    12.0
}

fn default_height_in() -> f32 {
    16.0
}

fn default_dpi() -> u32 {
    100
}

fn default_day_start() -> String {
    "09:00".to_string()
}

fn default_day_end() -> String {
    "23:59".to_string()
}

fn default_wrap_width() -> usize {
    20
}

fn default_fill_alpha() -> f32 {
    0.5
}

fn default_font_size() -> u32 {
    8
}

fn default_short_font_size() -> u32 {
    6
}

fn default_short_block_hours() -> f64 {
    0.5
}

fn default_title() -> String {
    "Emploi du Temps".to_string()
}

fn default_x_label() -> String {
    "Jour".to_string()
}

fn default_y_label() -> String {
    "Heure".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            delimiter: default_delimiter(),
        }
    }
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            width_in: default_width_in(),
            height_in: default_height_in(),
            dpi: default_dpi(),
            day_start: default_day_start(),
            day_end: default_day_end(),
        }
    }
}

impl Default for BlockSettings {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
            fill_alpha: default_fill_alpha(),
            font_size: default_font_size(),
            short_font_size: default_short_font_size(),
            short_block_hours: default_short_block_hours(),
        }
    }
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
        }
    }
}

impl FigureSettings {
    /// Pixel size of the rendered image
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f32| (inches * self.dpi as f32).round().max(1.0) as u32;
        (px(self.width_in), px(self.height_in))
    }

    /// Visible time range as fractional hours, top first
    pub fn time_range(&self) -> Result<(f64, f64)> {
        Ok((time_to_hours(&self.day_start)?, time_to_hours(&self.day_end)?))
    }
}

impl ChartConfig {
    /// Load chart configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: ChartConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the renderer cannot honour
    pub fn validate(&self) -> Result<()> {
        if !self.paths.delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "delimiter '{}' must be a single ASCII character",
                self.paths.delimiter
            )));
        }
        let (start, end) = self.figure.time_range()?;
        if end <= start {
            return Err(Error::Config(format!(
                "day_end {} must be later than day_start {}",
                self.figure.day_end, self.figure.day_start
            )));
        }
        if self.figure.dpi == 0 || self.figure.width_in <= 0.0 || self.figure.height_in <= 0.0 {
            return Err(Error::Config("figure size and dpi must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.blocks.fill_alpha) {
            return Err(Error::Config(format!(
                "fill_alpha {} must lie in [0, 1]",
                self.blocks.fill_alpha
            )));
        }
        Ok(())
    }

    /// Input delimiter as a byte; `validate` has already checked it is ASCII
    pub fn delimiter_byte(&self) -> u8 {
        self.paths.delimiter as u8
    }
}
