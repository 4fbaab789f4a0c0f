//! Calendar grids: the days shown by the month, week and day views
//!
//! Weeks start on Monday.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::slot::tasks_for_day;
use crate::Task;

/// A month is always displayed as 6 rows of 7 days
pub const MONTH_GRID_CELLS: usize = 42;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Month,
    Week,
    Day,
}

impl Default for CalendarView {
    fn default() -> Self {
        CalendarView::Month
    }
}

/// A cell of the month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// `false` for the days of the previous and next months that pad the grid
    pub in_month: bool,
}

/// The 42 days shown for a month, starting on the Monday of its first week.
///
/// Returns `None` for an invalid month, or when the grid would go past the representable date range.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<GridCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let leading_days = first.weekday().num_days_from_monday() as i64;
    let grid_start = first.checked_sub_signed(Duration::days(leading_days))?;

    (0..MONTH_GRID_CELLS as i64)
        .map(|i| {
            grid_start.checked_add_signed(Duration::days(i))
                .map(|date| GridCell {
                    date,
                    in_month: date.month() == month && date.year() == year,
                })
        })
        .collect()
}

/// The month grid, with the tasks of every cell
pub fn month_agenda(tasks: &[Task], year: i32, month: u32) -> Option<Vec<(GridCell, Vec<&Task>)>> {
    let grid = month_grid(year, month)?;
    Some(grid.into_iter()
        .map(|cell| (cell, tasks_for_day(tasks, cell.date)))
        .collect())
}

/// The Monday-to-Sunday week that contains `date`, or `None` when it is not entirely within the representable date range
pub fn week_of(date: NaiveDate) -> Option<[NaiveDate; 7]> {
    let monday = date.checked_sub_signed(Duration::days(date.weekday().num_days_from_monday() as i64))?;
    let mut week = [monday; 7];
    for (i, day) in week.iter_mut().enumerate() {
        *day = monday.checked_add_signed(Duration::days(i as i64))?;
    }
    Some(week)
}

/// The hour rows of a time column, e.g. `day_hours(7, 14)` for 7 AM to 8 PM. Rows never go past 23
pub fn day_hours(start_hour: u32, count: u32) -> Vec<u32> {
    (start_hour..start_hour.saturating_add(count))
        .take_while(|h| *h <= 23)
        .collect()
}

/// A 12-hour label for an hour row, e.g. `9:00 AM`, `12:00 PM`
pub fn hour_label(hour: u32) -> String {
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    format!("{}:00 {}", display_hour, suffix)
}

/// Add (or subtract) months, landing on the first day of the resulting month
fn first_of_month_offset(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month0 = index.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// The date shown after clicking "previous" or "next" in a view.
///
/// Months jump to the first day of the previous or next month, weeks move by 7 days, days by 1.
/// Returns `None` past the representable date range.
pub fn navigate(date: NaiveDate, view: CalendarView, forward: bool) -> Option<NaiveDate> {
    let sign = if forward { 1 } else { -1 };
    match view {
        CalendarView::Month => first_of_month_offset(date, sign),
        CalendarView::Week => date.checked_add_signed(Duration::days(7 * sign as i64)),
        CalendarView::Day => date.checked_add_signed(Duration::days(sign as i64)),
    }
}
