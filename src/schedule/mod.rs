pub mod types;
pub mod time;
pub mod colors;
pub mod wrap;
pub mod axis;

pub use types::{ScheduleEntry, Weekday};
pub use time::{time_to_hours, TimeOfDay};
pub use colors::{palette_color, with_alpha, ActivityColorMap, PALETTE};
pub use wrap::wrap_label;
pub use axis::{Tick, TimeAxis};
