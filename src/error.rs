//! Error types for timetable loading and rendering

use thiserror::Error;

/// Result type alias for timetable operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a timetable or rendering its chart
#[derive(Error, Debug)]
pub enum Error {
    /// A time cell did not parse as `HH:MM`
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime { value: String },

    /// A day cell is not one of the seven weekday labels
    #[error("Unknown day '{value}': expected one of Lundi, Mardi, Mercredi, Jeudi, Vendredi, Samedi, Dimanche")]
    UnknownDay { value: String },

    /// A data row does not carry the four expected fields
    #[error("Malformed row at line {line}: expected 4 fields, found {found}")]
    MalformedRow { line: u64, found: usize },

    /// Failed to read the input or write the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited input could not be decoded
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to encode the rendered image
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
