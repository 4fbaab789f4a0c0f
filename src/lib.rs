//! This crate provides the scheduling core of the taskTune planner.
//!
//! It maps a flat list of [`Task`]s onto calendar cells in the [`slot`] module, computes their vertical placement
//! in continuous day/week columns in the [`layout`] module, and turns drag-and-drop gestures into task updates in the [`reschedule`] module.
//!
//! Tasks are owned by an external store, abstracted by the [`traits::TaskStore`] trait. \
//! This crate ships a simple in-memory store, optionally backed by a JSON file, in the [`cache`] module.
//!
//! The [`calendar`] module builds the month/week/day grids these views are drawn on, and the [`kanban`] module
//! sorts tasks into the columns of the board view.

pub mod traits;

mod task;
pub use task::{Priority, SubTask, Task, TaskId, TaskPatch};
pub mod date;
pub mod clock;
pub use clock::ClockTime;
pub mod slot;
pub use slot::{DropTarget, SlotKind};
pub mod layout;
pub use layout::{LayoutConfig, Placement};
pub mod reschedule;
pub use reschedule::{RescheduleError, Scheduler};

pub mod cache;
pub mod calendar;
pub mod kanban;
pub mod color;

pub mod config;
pub mod utils;
