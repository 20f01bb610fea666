//! Chart layout in data coordinates.
//!
//! The x axis counts day columns (`Lundi` spans `[0, 1]`), the y axis counts
//! fractional hours since midnight. Nothing here knows about pixels.

use image::Rgba;
use tracing::debug;

use crate::config::ChartConfig;
use crate::error::Result;
use crate::schedule::{
    palette_color, with_alpha, wrap_label, ActivityColorMap, ScheduleEntry, Tick, TimeAxis, Weekday,
};

/// One scheduled block, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub day: Weekday,
    /// Left edge, in day columns
    pub x: f64,
    /// Start time, in fractional hours
    pub y: f64,
    pub width: f64,
    /// Duration in fractional hours
    pub height: f64,
    pub fill: Rgba<u8>,
    /// Wrapped label, lines separated by `\n`
    pub label: String,
    /// Label size in points
    pub font_size: u32,
}

impl BlockLayout {
    /// Where the label is centered
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Everything needed to draw the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_range: (f64, f64),
    /// Visible hours; the first value is drawn at the top
    pub y_range: (f64, f64),
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub blocks: Vec<BlockLayout>,
    /// Distinct activities in color-assignment order
    pub activities: Vec<String>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// Builds the chart layout for a schedule
pub fn build_chart(entries: &[ScheduleEntry], config: &ChartConfig) -> Result<ChartLayout> {
    let y_range = config.figure.time_range()?;
    let colors = ActivityColorMap::from_activities(entries.iter().map(|e| e.activity.as_str()));
    let settings = &config.blocks;

    let blocks: Vec<BlockLayout> = entries
        .iter()
        .map(|entry| {
            let color = colors
                .color(&entry.activity)
                .unwrap_or_else(|| palette_color(0));
            let height = entry.duration();
            let font_size = if height >= settings.short_block_hours {
                settings.font_size
            } else {
                settings.short_font_size
            };
            BlockLayout {
                day: entry.day,
                x: entry.day.index() as f64,
                y: entry.start.hours(),
                width: 1.0,
                height,
                fill: with_alpha(color, settings.fill_alpha),
                label: wrap_label(&entry.activity, settings.wrap_width),
                font_size,
            }
        })
        .collect();

    let x_ticks = Weekday::ALL
        .into_iter()
        .map(|day| Tick {
            position: day.index() as f64,
            label: day.label().to_string(),
        })
        .collect();
    let y_ticks = TimeAxis::from_entries(entries).ticks_within(y_range.0, y_range.1);

    debug!(
        "Laid out {} blocks, {} activities, {} time ticks",
        blocks.len(),
        colors.len(),
        y_ticks.len()
    );

    Ok(ChartLayout {
        x_range: (0.0, Weekday::ALL.len() as f64),
        y_range,
        x_ticks,
        y_ticks,
        blocks,
        activities: colors.activities().to_vec(),
        title: config.labels.title.clone(),
        x_label: config.labels.x_label.clone(),
        y_label: config.labels.y_label.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::TimeOfDay;

    fn entry(day: Weekday, start: &str, end: &str, activity: &str) -> ScheduleEntry {
        ScheduleEntry::new(
            day,
            TimeOfDay::parse(start).unwrap(),
            TimeOfDay::parse(end).unwrap(),
            activity,
        )
    }

    #[test]
    fn maths_lesson_on_monday_morning() {
        let entries = vec![entry(Weekday::Lundi, "09:00", "10:30", "Cours de Mathématiques")];
        let layout = build_chart(&entries, &ChartConfig::default()).unwrap();

        let block = &layout.blocks[0];
        assert_eq!((block.x, block.x + block.width), (0.0, 1.0));
        assert_eq!((block.y, block.y + block.height), (9.0, 10.5));
        assert_eq!(block.font_size, 8);
        assert_eq!(block.label, "Cours de\nMathématiques");
        assert!(block.label.lines().all(|l| l.chars().count() <= 20));
        assert_eq!(block.fill, Rgba([0x1f, 0x77, 0xb4, 128]));
        assert_eq!(block.center(), (0.5, 9.75));
    }

    #[test]
    fn short_block_uses_small_font() {
        let entries = vec![
            entry(Weekday::Mardi, "14:00", "14:15", "Pause"),
            entry(Weekday::Mardi, "14:15", "14:45", "Chorale"),
        ];
        let layout = build_chart(&entries, &ChartConfig::default()).unwrap();
        assert_eq!(layout.blocks[0].font_size, 6);
        assert_eq!(layout.blocks[0].x, 1.0);
        // exactly half an hour keeps the regular size
        assert_eq!(layout.blocks[1].font_size, 8);
    }

    #[test]
    fn same_activity_shares_a_color() {
        let entries = vec![
            entry(Weekday::Lundi, "09:00", "10:00", "Piano"),
            entry(Weekday::Mercredi, "10:00", "11:00", "Sport"),
            entry(Weekday::Vendredi, "09:00", "10:00", "Piano"),
        ];
        let layout = build_chart(&entries, &ChartConfig::default()).unwrap();
        assert_eq!(layout.activities, ["Piano", "Sport"]);
        assert_eq!(layout.blocks[0].fill, layout.blocks[2].fill);
        assert_ne!(layout.blocks[0].fill, layout.blocks[1].fill);
    }

    #[test]
    fn axes_cover_the_week_and_visible_times() {
        let entries = vec![
            entry(Weekday::Dimanche, "08:00", "09:30", "Course"),
            entry(Weekday::Samedi, "22:00", "23:59", "Film"),
        ];
        let layout = build_chart(&entries, &ChartConfig::default()).unwrap();
        assert_eq!(layout.x_range, (0.0, 7.0));
        let days: Vec<&str> = layout.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            days,
            ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche"]
        );
        let times: Vec<&str> = layout.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(times, ["09:30", "22:00", "23:59"]);
        assert_eq!(layout.blocks[0].x, 6.0);
    }

    #[test]
    fn empty_schedule_still_has_axes() {
        let layout = build_chart(&[], &ChartConfig::default()).unwrap();
        assert!(layout.blocks.is_empty());
        assert!(layout.y_ticks.is_empty());
        assert!(layout.activities.is_empty());
        assert_eq!(layout.x_ticks.len(), 7);
        assert_eq!(layout.title, "Emploi du Temps");
    }
}
