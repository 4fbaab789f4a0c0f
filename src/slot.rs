//! Calendar slots, and the tasks that belong to them
//!
//! A slot is either a whole day (a cell of the month grid) or an hour of a day (a cell of the week/day views).
//! The draggable and droppable halves of the calendar agree on a slot through a [`DropTarget`], which is
//! exchanged as a `slot|<YYYY-MM-DD>|<hour-or-empty>` key.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use crate::date::{format_date, normalize_date, parse_strict_date, same_day};
use crate::Task;

const KEY_TAG: &str = "slot";
const KEY_SEPARATOR: char = '|';

/// What part of a day a slot covers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// The whole day
    Day,
    /// One hour of the day. This is not range-checked here, so that a faulty drag layer can be detected and reported later on
    Hour(u32),
}

/// A calendar slot a task can be dropped on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DropTarget {
    date: NaiveDate,
    kind: SlotKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DropTargetError {
    #[error("expected 3 fields in drop target key, found {0}")]
    FieldCount(usize),
    #[error("unexpected drop target tag {0:?}")]
    Tag(String),
    #[error("invalid drop target date {0:?}")]
    Date(String),
    #[error("invalid drop target hour {0:?}")]
    Hour(String),
}

impl DropTarget {
    /// A whole-day slot
    pub fn day(date: NaiveDate) -> Self {
        Self { date, kind: SlotKind::Day }
    }

    /// An hour slot
    pub fn hour(date: NaiveDate, hour: u32) -> Self {
        Self { date, kind: SlotKind::Hour(hour) }
    }

    pub fn date(&self) -> NaiveDate { self.date }
    pub fn kind(&self) -> SlotKind  { self.kind }

    /// The target hour, for hour slots
    pub fn target_hour(&self) -> Option<u32> {
        match self.kind {
            SlotKind::Day => None,
            SlotKind::Hour(h) => Some(h),
        }
    }

    /// The key of this slot, e.g. `slot|2025-03-15|14` or `slot|2025-03-15|`
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl Display for DropTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let hour = match self.kind {
            SlotKind::Day => String::new(),
            SlotKind::Hour(h) => h.to_string(),
        };
        write!(f, "{tag}{sep}{date}{sep}{hour}",
            tag = KEY_TAG, sep = KEY_SEPARATOR, date = format_date(self.date), hour = hour)
    }
}

impl FromStr for DropTarget {
    type Err = DropTargetError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        if fields.len() != 3 {
            return Err(DropTargetError::FieldCount(fields.len()));
        }
        if fields[0] != KEY_TAG {
            return Err(DropTargetError::Tag(fields[0].to_string()));
        }

        let date = parse_strict_date(fields[1])
            .ok_or_else(|| DropTargetError::Date(fields[1].to_string()))?;

        let kind = match fields[2] {
            "" => SlotKind::Day,
            hour => {
                // Only plain digits, `parse` would also accept a sign
                if !hour.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DropTargetError::Hour(hour.to_string()));
                }
                let h = hour.parse::<u32>()
                    .map_err(|_| DropTargetError::Hour(hour.to_string()))?;
                if h > 23 {
                    return Err(DropTargetError::Hour(hour.to_string()));
                }
                SlotKind::Hour(h)
            },
        };

        Ok(Self { date, kind })
    }
}


/// Whether a task is planned on a given day
pub fn is_on_day(task: &Task, date: NaiveDate) -> bool {
    same_day(task.day(), Some(date))
}

/// Whether a task is planned on a given day and starts within a given hour
pub fn is_in_hour(task: &Task, date: NaiveDate, hour: u32) -> bool {
    match task.start() {
        None => false,
        Some(start) => start.hour() as u32 == hour && is_on_day(task, date),
    }
}

/// Tasks of a whole-day cell, in their original order
pub fn tasks_for_day(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks.iter()
        .filter(|t| is_on_day(t, date))
        .collect()
}

/// Tasks of an hour cell, in their original order. Tasks that have no start time are never part of an hour cell
pub fn tasks_for_hour(tasks: &[Task], date: NaiveDate, hour: u32) -> Vec<&Task> {
    tasks.iter()
        .filter(|t| is_in_hour(t, date, hour))
        .collect()
}

pub fn tasks_for_slot<'t>(tasks: &'t [Task], slot: &DropTarget) -> Vec<&'t Task> {
    match slot.kind() {
        SlotKind::Day => tasks_for_day(tasks, slot.date()),
        SlotKind::Hour(h) => tasks_for_hour(tasks, slot.date(), h),
    }
}

/// Tasks of a cell addressed by a date string and an optional hour.
///
/// A target date that cannot be normalized matches nothing.
pub fn tasks_for_cell<'t>(tasks: &'t [Task], target_date: &str, target_hour: Option<u32>) -> Vec<&'t Task> {
    let date = match normalize_date(target_date) {
        None => {
            log::debug!("Cell date {:?} is invalid, it has no task", target_date);
            return Vec::new();
        },
        Some(d) => d,
    };

    match target_hour {
        None => tasks_for_day(tasks, date),
        Some(h) => tasks_for_hour(tasks, date, h),
    }
}
