use super::time::TimeOfDay;
use super::types::ScheduleEntry;

/// A labelled position on a chart axis, in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Sorted set of every distinct start and end time in the schedule
#[derive(Debug, Clone, Default)]
pub struct TimeAxis {
    times: Vec<TimeOfDay>,
}

impl TimeAxis {
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let mut times: Vec<TimeOfDay> = entries
            .iter()
            .flat_map(|e| [e.start.clone(), e.end.clone()])
            .collect();
        times.sort_by(|a, b| a.axis_cmp(b));
        times.dedup_by(|a, b| a.as_str() == b.as_str());
        Self { times }
    }

    pub fn times(&self) -> &[TimeOfDay] {
        &self.times
    }

    /// Ticks whose coordinate falls inside `[min, max]`
    pub fn ticks_within(&self, min: f64, max: f64) -> Vec<Tick> {
        self.times
            .iter()
            .filter(|t| t.hours() >= min && t.hours() <= max)
            .map(|t| Tick {
                position: t.hours(),
                label: t.as_str().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Weekday;

    fn entry(day: Weekday, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry::new(
            day,
            TimeOfDay::parse(start).unwrap(),
            TimeOfDay::parse(end).unwrap(),
            "x",
        )
    }

    #[test]
    fn collects_sorted_distinct_times() {
        let entries = vec![
            entry(Weekday::Mardi, "14:00", "14:15"),
            entry(Weekday::Lundi, "09:00", "10:30"),
            entry(Weekday::Jeudi, "10:30", "12:00"),
            entry(Weekday::Lundi, "09:00", "10:30"),
        ];
        let axis = TimeAxis::from_entries(&entries);
        let labels: Vec<&str> = axis.times().iter().map(|t| t.as_str()).collect();
        assert_eq!(labels, ["09:00", "10:30", "12:00", "14:00", "14:15"]);
    }

    #[test]
    fn filters_ticks_to_range() {
        let entries = vec![
            entry(Weekday::Lundi, "07:00", "09:00"),
            entry(Weekday::Lundi, "23:00", "23:59"),
        ];
        let ticks = TimeAxis::from_entries(&entries).ticks_within(9.0, 23.5);
        assert_eq!(
            ticks,
            vec![
                Tick { position: 9.0, label: "09:00".into() },
                Tick { position: 23.0, label: "23:00".into() },
            ]
        );
    }

    #[test]
    fn empty_schedule_has_no_ticks() {
        let axis = TimeAxis::from_entries(&[]);
        assert!(axis.times().is_empty());
        assert!(axis.ticks_within(0.0, 24.0).is_empty());
    }
}
