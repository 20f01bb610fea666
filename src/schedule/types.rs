use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;
use crate::error::Error;

/// The seven day columns of the chart, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Lundi,
    Mardi,
    Mercredi,
    Jeudi,
    Vendredi,
    Samedi,
    Dimanche,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Lundi,
        Weekday::Mardi,
        Weekday::Mercredi,
        Weekday::Jeudi,
        Weekday::Vendredi,
        Weekday::Samedi,
        Weekday::Dimanche,
    ];

    /// Column index on the chart (Lundi = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Lundi => "Lundi",
            Weekday::Mardi => "Mardi",
            Weekday::Mercredi => "Mercredi",
            Weekday::Jeudi => "Jeudi",
            Weekday::Vendredi => "Vendredi",
            Weekday::Samedi => "Samedi",
            Weekday::Dimanche => "Dimanche",
        }
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.label() == s)
            .ok_or_else(|| Error::UnknownDay {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scheduled activity occupying a day and a start-end range.
///
/// `end > start` is not enforced; a reversed range simply draws as an empty block.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub activity: String,
}

impl ScheduleEntry {
    pub fn new(day: Weekday, start: TimeOfDay, end: TimeOfDay, activity: impl Into<String>) -> Self {
        Self {
            day,
            start,
            end,
            activity: activity.into(),
        }
    }

    /// Duration in fractional hours
    pub fn duration(&self) -> f64 {
        self.end.hours() - self.start.hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_round_trips_through_label() {
        for (i, day) in Weekday::ALL.into_iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(day.label().parse::<Weekday>().unwrap(), day);
        }
    }

    #[test]
    fn unknown_day_is_rejected() {
        assert!(matches!(
            "Monday".parse::<Weekday>(),
            Err(Error::UnknownDay { value }) if value == "Monday"
        ));
        assert!("lundi".parse::<Weekday>().is_err());
    }

    #[test]
    fn duration_in_hours() {
        let entry = ScheduleEntry::new(
            Weekday::Lundi,
            TimeOfDay::parse("09:00").unwrap(),
            TimeOfDay::parse("10:30").unwrap(),
            "Cours",
        );
        assert_eq!(entry.duration(), 1.5);
    }
}
