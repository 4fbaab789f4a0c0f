//! The kanban board: tasks sorted by how far along they are
//!
//! A board column is derived from the completion status and the progress of a task. Moving a task to another
//! column overwrites both.

use serde::{Deserialize, Serialize};

use crate::traits::TaskStore;
use crate::{Task, TaskId, TaskPatch};

/// Progress given to tasks that are moved to (or created in) the "in progress" column
pub const IN_PROGRESS_DEFAULT: u8 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KanbanColumn {
    Todo,
    InProgress,
    Completed,
}

impl KanbanColumn {
    /// The columns, left to right
    pub const ALL: [KanbanColumn; 3] = [KanbanColumn::Todo, KanbanColumn::InProgress, KanbanColumn::Completed];

    pub fn title(&self) -> &'static str {
        match self {
            KanbanColumn::Todo => "To Do",
            KanbanColumn::InProgress => "In Progress",
            KanbanColumn::Completed => "Completed",
        }
    }

    /// The progress a task gets when it lands in this column
    pub fn progress(&self) -> u8 {
        match self {
            KanbanColumn::Todo => 0,
            KanbanColumn::InProgress => IN_PROGRESS_DEFAULT,
            KanbanColumn::Completed => 100,
        }
    }

    /// The changes that put a task into this column
    pub fn patch(&self) -> TaskPatch {
        TaskPatch {
            completed: Some(*self == KanbanColumn::Completed),
            progress: Some(self.progress()),
            ..TaskPatch::default()
        }
    }
}

/// The column a task is shown in. A fully progressed task counts as completed, even when it is not marked so
pub fn column_of(task: &Task) -> KanbanColumn {
    match (task.completed(), task.progress()) {
        (true, _) => KanbanColumn::Completed,
        (false, p) if p >= 100 => KanbanColumn::Completed,
        (false, 0) => KanbanColumn::Todo,
        (false, _) => KanbanColumn::InProgress,
    }
}

/// Tasks of a column, in their original order
pub fn tasks_for_column(tasks: &[Task], column: KanbanColumn) -> Vec<&Task> {
    tasks.iter()
        .filter(|t| column_of(t) == column)
        .collect()
}

/// Drag a task to another column of the board.
/// Returns `false` (and changes nothing) in case there is no such task
pub fn move_to_column<S: TaskStore>(store: &mut S, id: &TaskId, column: KanbanColumn) -> bool {
    let moved = store.update_task(id, &column.patch());
    if moved {
        log::debug!("Moved task {} to column {:?}", id, column);
    } else {
        log::warn!("Unable to move unknown task {} to column {:?}", id, column);
    }
    moved
}
