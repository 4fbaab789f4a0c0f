//! Drag-and-drop rescheduling
//!
//! When a task is dropped onto a calendar slot, it moves to the slot's day. When the slot is an hour of the day,
//! the task also starts at that hour, and keeps its duration.
//!
//! The planning step ([`plan_reschedule`]) is a pure function. The [`Scheduler`] looks tasks up in a store,
//! and pushes the resulting patch back to it.

use thiserror::Error;

use crate::clock::ClockTime;
use crate::slot::{DropTarget, DropTargetError, SlotKind};
use crate::traits::TaskStore;
use crate::{Task, TaskId, TaskPatch};

/// Tasks without an end time are moved as lasting this long
const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Reasons why a drop is rejected. The task list is left untouched in every case
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RescheduleError {
    #[error("malformed drop target: {0}")]
    MalformedTarget(#[from] DropTargetError),
    #[error("no task with id {0}")]
    UnknownTask(TaskId),
    #[error("hour {0} is out of the 0-23 range")]
    HourOutOfRange(u32),
    #[error("invalid {field} {value:?}")]
    InvalidTime { field: &'static str, value: String },
}

/// Returns the non-blank value of an optional field
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_field(field: &'static str, value: &str) -> Result<ClockTime, RescheduleError> {
    ClockTime::parse(value).ok_or_else(|| RescheduleError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

/// Duration of a task, in minutes.
///
/// A missing start time means midnight, a missing end time means one hour after the start.
/// End times before the start time count as a zero duration.
pub fn duration_minutes(task: &Task) -> Result<i64, RescheduleError> {
    let start = match present(task.start_time()) {
        None => ClockTime::MIDNIGHT,
        Some(raw) => parse_field("startTime", raw)?,
    };
    let start_minutes = start.as_minutes() as i64;

    let end_minutes = match present(task.end_time()) {
        None => start_minutes + DEFAULT_DURATION_MINUTES,
        Some(raw) => parse_field("endTime", raw)?.as_minutes() as i64,
    };

    let duration = end_minutes - start_minutes;
    if duration < 0 {
        log::debug!("Task {} ends before it starts, moving it as a zero-length task", task.id());
        return Ok(0);
    }
    Ok(duration)
}

/// Compute the changes needed to move a task onto a slot.
///
/// * the task always moves to the slot's day
/// * for an hour slot, it starts at the top of that hour and keeps its duration. A task that would then end after
///   23:59 is cut at 23:59 (it does not roll over to the next day)
/// * for a whole-day slot, its start and end times are not modified
pub fn plan_reschedule(task: &Task, target: &DropTarget) -> Result<TaskPatch, RescheduleError> {
    let mut patch = TaskPatch::date(target.date());

    let hour = match target.kind() {
        SlotKind::Day => return Ok(patch),
        SlotKind::Hour(h) => h,
    };
    if hour > 23 {
        return Err(RescheduleError::HourOutOfRange(hour));
    }
    let new_start = ClockTime::new(hour as u8, 0)
        .ok_or(RescheduleError::HourOutOfRange(hour))?;

    let duration = duration_minutes(task)?;
    let wanted_end = new_start.as_minutes() as i64 + duration;
    let new_end = ClockTime::from_minutes_clamped(wanted_end);
    if wanted_end > new_end.as_minutes() as i64 {
        log::info!("Task {} would end after midnight, cutting it at {}", task.id(), new_end);
    }

    patch.start_time = Some(new_start.to_string());
    patch.end_time = Some(new_end.to_string());
    Ok(patch)
}


/// Applies drag-and-drop gestures to the tasks of a store
pub struct Scheduler<S> {
    store: S,
}

impl<S: TaskStore> Scheduler<S> {
    /// Create a scheduler that updates a given store.
    /// `store` can also be a `&mut` reference to a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Move a task onto a slot. This issues a single update to the store, and only if the move is valid.
    ///
    /// Returns the patch that has been applied.
    pub fn reschedule(&mut self, id: &TaskId, target: &DropTarget) -> Result<TaskPatch, RescheduleError> {
        let task = self.store.get_task(id)
            .ok_or_else(|| RescheduleError::UnknownTask(id.clone()))?;
        let patch = plan_reschedule(task, target)?;

        if self.store.update_task(id, &patch) == false {
            return Err(RescheduleError::UnknownTask(id.clone()));
        }
        log::debug!("Moved task {} to {}", id, target);
        Ok(patch)
    }

    /// Handle the end of a drag gesture: task `task_id` has been dropped on the slot that has the key `target_key`.
    ///
    /// This never fails: invalid drops are logged and ignored.
    /// Returns whether the task has been moved.
    pub fn handle_drop(&mut self, task_id: &str, target_key: &str) -> bool {
        let result = target_key.parse::<DropTarget>()
            .map_err(RescheduleError::from)
            .and_then(|target| self.reschedule(&TaskId::from(task_id), &target));

        match result {
            Ok(_) => true,
            Err(err) => {
                log::warn!("Ignoring drop of task {:?} on {:?}: {}", task_id, target_key, err);
                false
            },
        }
    }
}
