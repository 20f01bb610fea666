use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::{Error, Result};

/// Converts a time string (e.g. "09:00", "14:15") to fractional hours since midnight.
///
/// "10:30" maps to `10.5`. The result is used directly as a plot coordinate.
pub fn time_to_hours(time_str: &str) -> Result<f64> {
    let time = NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|_| Error::InvalidTime {
        value: time_str.to_string(),
    })?;
    Ok(time.hour() as f64 + time.minute() as f64 / 60.0)
}

/// A time-of-day cell: the text as written in the table plus its axis coordinate.
///
/// The text is kept so tick labels show exactly what the input said.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeOfDay {
    text: String,
    hours: f64,
}

impl TimeOfDay {
    pub fn parse(time_str: &str) -> Result<Self> {
        let hours = time_to_hours(time_str)?;
        Ok(Self {
            text: time_str.to_string(),
            hours,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Fractional hours since midnight
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Orders by coordinate first, then by text so equal instants written
    /// differently ("9:00" and "09:00") still sort deterministically.
    pub fn axis_cmp(&self, other: &Self) -> Ordering {
        self.hours
            .total_cmp(&other.hours)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
