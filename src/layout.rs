//! Vertical placement of tasks in the continuous-time calendar columns (day and week views)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::slot::is_on_day;
use crate::Task;

/// Tasks without an end time are shown as lasting this long, in hours
pub const DEFAULT_DURATION_HOURS: f32 = 1.0;

/// Geometry of a time column
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// The hour at the top of the column
    pub grid_start_hour: f32,
    pub pixels_per_hour: f32,
    /// Must be strictly positive
    pub min_block_height: f32,
}

impl Default for LayoutConfig {
    /// Uses the library-wide settings of the [`config`](crate::config) module
    fn default() -> Self {
        Self {
            grid_start_hour: config::read(&config::GRID_START_HOUR),
            pixels_per_hour: config::read(&config::PIXELS_PER_HOUR),
            min_block_height: config::read(&config::MIN_BLOCK_HEIGHT),
        }
    }
}

/// Where a task block is drawn, relative to the top of its column
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub top: f32,
    pub height: f32,
}

impl Placement {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

impl LayoutConfig {
    /// Vertical offset of a time of the day (in fractional hours)
    pub fn offset_of(&self, hours: f32) -> f32 {
        (hours - self.grid_start_hour) * self.pixels_per_hour
    }

    fn min_height(&self) -> f32 {
        if self.min_block_height > 0.0 {
            self.min_block_height
        } else {
            1.0
        }
    }

    /// Place a block spanning from `start` to `end` (in fractional hours).
    ///
    /// Blocks that end before (or when) they start get the minimum height. Other blocks keep their real height, however short.
    pub fn place_span(&self, start: f32, end: f32) -> Placement {
        let height = (end - start) * self.pixels_per_hour;
        // Also catches NaN
        let height = if end > start && height > 0.0 { height } else { self.min_height() };
        Placement {
            top: self.offset_of(start),
            height,
        }
    }
}

/// Compute where a task is drawn.
///
/// Returns `None` for tasks that are not scheduled within the day (no start time, or an unreadable one).
/// An absent or unreadable end time means the task lasts one hour.
pub fn place_task(task: &Task, config: &LayoutConfig) -> Option<Placement> {
    let start = task.start()?.as_fractional_hours();
    let end = match (task.end_time(), task.end()) {
        (_, Some(end)) => end.as_fractional_hours(),
        (None, None) => start + DEFAULT_DURATION_HOURS,
        (Some(raw), None) => {
            log::debug!("Task {} has an invalid end time {:?}, assuming a one-hour block", task.id(), raw);
            start + DEFAULT_DURATION_HOURS
        },
    };
    Some(config.place_span(start, end))
}

/// Place every scheduled task of a day, in their original order
pub fn place_day<'t>(tasks: &'t [Task], date: NaiveDate, config: &LayoutConfig) -> Vec<(&'t Task, Placement)> {
    tasks.iter()
        .filter(|t| is_on_day(t, date))
        .filter_map(|t| place_task(t, config).map(|p| (t, p)))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskId;

    const CONFIG: LayoutConfig = LayoutConfig { grid_start_hour: 7.0, pixels_per_hour: 60.0, min_block_height: 15.0 };

    fn task(start: Option<&str>, end: Option<&str>) -> Task {
        Task::new_with_parameters(
            TaskId::from("t"), "Team Meeting".to_string(),
            Some("2025-03-26".to_string()), start.map(String::from), end.map(String::from))
    }

    #[test]
    fn regular_block() {
        let p = place_task(&task(Some("09:30"), Some("11:00")), &CONFIG).unwrap();
        assert_eq!(p, Placement { top: 150.0, height: 90.0 });
        assert_eq!(p.bottom(), 240.0);
    }

    #[test]
    fn missing_end_lasts_one_hour() {
        let without_end = place_task(&task(Some("10:15"), None), &CONFIG).unwrap();
        let with_end = place_task(&task(Some("10:15"), Some("11:15")), &CONFIG).unwrap();
        assert_eq!(without_end, with_end);
        assert_eq!(without_end.height, 60.0);
    }

    #[test]
    fn unreadable_end_lasts_one_hour() {
        let p = place_task(&task(Some("10:00"), Some("soon")), &CONFIG).unwrap();
        assert_eq!(p.height, 60.0);
    }

    #[test]
    fn degenerate_blocks_stay_visible() {
        let backwards = place_task(&task(Some("10:00"), Some("09:00")), &CONFIG).unwrap();
        assert_eq!(backwards.height, 15.0);
        let empty = place_task(&task(Some("10:00"), Some("10:00")), &CONFIG).unwrap();
        assert_eq!(empty.height, 15.0);

        let no_minimum = LayoutConfig { min_block_height: 0.0, ..CONFIG };
        assert!(place_task(&task(Some("10:00"), Some("09:00")), &no_minimum).unwrap().height > 0.0);
    }

    #[test]
    fn short_blocks_keep_their_height() {
        let ten_minutes = place_task(&task(Some("09:00"), Some("09:10")), &CONFIG).unwrap();
        assert!((ten_minutes.height - 10.0).abs() < 1e-3);
        assert_eq!(ten_minutes.top, 120.0);

        let one_minute = place_task(&task(Some("09:00"), Some("09:01")), &CONFIG).unwrap();
        assert!((one_minute.height - 1.0).abs() < 1e-3);
    }

    #[test]
    fn before_the_grid_is_negative() {
        let p = place_task(&task(Some("06:00"), Some("07:00")), &CONFIG).unwrap();
        assert_eq!(p.top, -60.0);
    }

    #[test]
    fn unscheduled_tasks_are_not_placed() {
        assert_eq!(place_task(&task(None, Some("10:00")), &CONFIG), None);
        assert_eq!(place_task(&task(Some("ten"), None), &CONFIG), None);
    }

    #[test]
    fn whole_day() {
        let mut tasks = vec![
            task(Some("09:00"), None),
            task(None, None),
            task(Some("13:00"), Some("13:30")),
        ];
        tasks.push(Task::new_with_parameters(TaskId::from("other"), String::new(), Some("2025-03-27".to_string()), Some("09:00".to_string()), None));

        let day = NaiveDate::from_ymd_opt(2025, 3, 26).unwrap();
        let placed = place_day(&tasks, day, &CONFIG);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].1.top, 120.0);
        assert_eq!(placed[1].1, Placement { top: 360.0, height: 30.0 });
    }

    #[test]
    fn default_config_uses_settings() {
        let config = LayoutConfig::default();
        assert!(config.pixels_per_hour > 0.0);
        assert!(config.min_block_height > 0.0);
    }
}
