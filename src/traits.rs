//! The contract between the scheduling code and whatever owns the tasks

use crate::{Task, TaskId, TaskPatch};

/// Something that holds a list of tasks
pub trait TaskSource {
    /// Returns the current tasks, in display order
    fn tasks(&self) -> &[Task];

    /// Returns the task with this id, if any
    fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks().iter().find(|t| t.id() == id)
    }
}

/// A mutable list of tasks.
///
/// Updates replace a task as a whole, so that readers never observe a partially updated task.
/// Every method that targets a task by its id returns `false` (and changes nothing) in case there is no such task.
pub trait TaskStore: TaskSource {
    /// Append a task
    fn add_task(&mut self, task: Task);

    /// Merge a patch into a task
    fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) -> bool;

    /// Remove a task
    fn delete_task(&mut self, id: &TaskId) -> bool;

    /// Move a task to another day or time. This is an [`update_task`](TaskStore::update_task) under another name,
    /// for stores that want to tell drags from edits
    fn move_task(&mut self, id: &TaskId, patch: &TaskPatch) -> bool {
        self.update_task(id, patch)
    }

    /// Flip the completion status of a task (see [`Task::toggle_completion`])
    fn toggle_completion(&mut self, id: &TaskId) -> bool;

    /// Check or uncheck a subtask (see [`Task::set_subtask_completion`])
    fn update_subtask(&mut self, task_id: &TaskId, subtask_id: &TaskId, completed: bool) -> bool;
}

impl<T: TaskSource + ?Sized> TaskSource for &mut T {
    fn tasks(&self) -> &[Task] {
        (**self).tasks()
    }
    fn get_task(&self, id: &TaskId) -> Option<&Task> {
        (**self).get_task(id)
    }
}

impl<T: TaskStore + ?Sized> TaskStore for &mut T {
    fn add_task(&mut self, task: Task) {
        (**self).add_task(task)
    }
    fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) -> bool {
        (**self).update_task(id, patch)
    }
    fn delete_task(&mut self, id: &TaskId) -> bool {
        (**self).delete_task(id)
    }
    fn move_task(&mut self, id: &TaskId, patch: &TaskPatch) -> bool {
        (**self).move_task(id, patch)
    }
    fn toggle_completion(&mut self, id: &TaskId) -> bool {
        (**self).toggle_completion(id)
    }
    fn update_subtask(&mut self, task_id: &TaskId, subtask_id: &TaskId, completed: bool) -> bool {
        (**self).update_subtask(task_id, subtask_id, completed)
    }
}
