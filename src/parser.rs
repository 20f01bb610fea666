use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::schedule::{ScheduleEntry, TimeOfDay, Weekday};

/// Column positions of the four schedule fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    day: usize,
    start: usize,
    end: usize,
    activity: usize,
}

impl Columns {
    /// Finds each column by its header name, falling back to positions 0..=3
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str, fallback: usize| {
            headers
                .iter()
                .position(|h| h.trim().to_lowercase() == name)
                .unwrap_or(fallback)
        };

        Self {
            day: find("jour", 0),
            start: find("heure de début", 1),
            end: find("heure de fin", 2),
            activity: find("activité", 3),
        }
    }

    fn required_len(&self) -> usize {
        self.day.max(self.start).max(self.end).max(self.activity) + 1
    }
}

/// Parses a single record into a schedule entry
fn parse_record(record: &StringRecord, columns: Columns) -> Result<ScheduleEntry> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    if record.len() < columns.required_len() {
        return Err(Error::MalformedRow {
            line,
            found: record.len(),
        });
    }

    // required_len() guarantees every column index is present
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let day: Weekday = field(columns.day).parse()?;
    let start = TimeOfDay::parse(field(columns.start))?;
    let end = TimeOfDay::parse(field(columns.end))?;

    Ok(ScheduleEntry::new(day, start, end, field(columns.activity)))
}

/// Reads schedule entries from any delimited source with a header row
pub fn read_schedule<R: Read>(source: R, delimiter: u8) -> Result<Vec<ScheduleEntry>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let columns = Columns::from_headers(reader.headers()?);
    debug!("Schedule columns resolved to {:?}", columns);

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;
        // a lone empty field is what a whitespace-only line turns into
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        entries.push(parse_record(&record, columns)?);
    }

    if entries.is_empty() {
        warn!("Schedule contains no entries; the chart will be empty");
    }

    Ok(entries)
}

/// Loads schedule entries from a delimited file
pub fn load_schedule<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Vec<ScheduleEntry>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_schedule(file, delimiter)
}
