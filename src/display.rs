use std::fmt::Write;

use tracing::info;

use crate::schedule::{ScheduleEntry, Weekday};

/// Formats one entry as `HH:MM-HH:MM Activity`
pub fn format_entry(entry: &ScheduleEntry) -> String {
    format!("{}-{} {}", entry.start, entry.end, entry.activity)
}

/// Formats a day's entries in start-time order, one per line
pub fn format_day_schedule(day: Weekday, entries: &[ScheduleEntry]) -> String {
    let mut day_entries: Vec<&ScheduleEntry> = entries.iter().filter(|e| e.day == day).collect();
    day_entries.sort_by(|a, b| a.start.axis_cmp(&b.start));

    let mut out = String::new();
    let _ = writeln!(out, "** {} **", day);
    if day_entries.is_empty() {
        let _ = writeln!(out, "  [EMPTY]");
    }
    for entry in day_entries {
        let _ = writeln!(out, "  {}", format_entry(entry));
    }
    out
}

/// Logs the loaded schedule, day by day
pub fn log_schedule_summary(entries: &[ScheduleEntry], activity_count: usize) {
    info!(
        "Loaded {} schedule entries covering {} distinct activities",
        entries.len(),
        activity_count
    );
    for day in Weekday::ALL {
        for line in format_day_schedule(day, entries).lines() {
            info!("{}", line);
        }
    }
}
