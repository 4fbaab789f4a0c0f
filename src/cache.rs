//! This module provides a local, in-memory task store, that can be backed by a JSON file

use std::path::PathBuf;
use std::path::Path;
use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::traits::{TaskSource, TaskStore};
use crate::task::rounded_percentage;
use crate::{Task, TaskId, TaskPatch};


/// A task store that keeps its tasks in memory, and stores them in a local file on demand
#[derive(Debug, PartialEq)]
pub struct Cache {
    backing_file: Option<PathBuf>,
    data: CachedData,
}

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct CachedData {
    tasks: Vec<Task>,
}

impl Cache {
    /// Initialize a cache from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };

        Ok(Self{
            backing_file: Some(PathBuf::from(path)),
            data,
        })
    }

    /// Initialize an empty cache, that will be stored at `path`
    pub fn new(path: &Path) -> Self {
        Self{
            backing_file: Some(PathBuf::from(path)),
            data: CachedData::default(),
        }
    }

    /// Initialize a cache that is not backed by any file
    pub fn in_memory() -> Self {
        Self{
            backing_file: None,
            data: CachedData::default(),
        }
    }

    /// Initialize a cache that is not backed by any file, with initial tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self{
            backing_file: None,
            data: CachedData { tasks },
        }
    }

    /// Decode a JSON array of tasks, as exported by the web front-end
    pub fn from_json_tasks(json: &str) -> Result<Self, Box<dyn Error>> {
        let tasks: Vec<Task> = serde_json::from_str(json)?;
        Ok(Self::with_tasks(tasks))
    }

    pub fn backing_file(&self) -> Option<&Path> {
        self.backing_file.as_deref()
    }

    /// Store the current Cache to its backing file.
    ///
    /// Failures are logged, and are not fatal: the in-memory content is still valid.
    pub fn save_to_file(&self) {
        let path = match &self.backing_file {
            None => {
                log::debug!("This cache has no backing file, not saving it");
                return;
            },
            Some(p) => p,
        };

        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return;
            },
            Ok(f) => f,
        };

        if let Err(err) = serde_json::to_writer(file, &self.data) {
            log::warn!("Unable to serialize: {}", err);
            return;
        };
    }

    /// Rounded percentage of completed tasks (0 when there is no task)
    pub fn completion_percentage(&self) -> u8 {
        let done = self.data.tasks.iter().filter(|t| t.completed()).count();
        rounded_percentage(done, self.data.tasks.len())
    }

    /// Replace a task by an updated copy of itself
    fn replace_with<F>(&mut self, id: &TaskId, update: F) -> bool
    where
        F: FnOnce(&Task) -> Option<Task>,
    {
        let position = match self.data.tasks.iter().position(|t| t.id() == id) {
            None => {
                log::debug!("No task with id {} in the cache", id);
                return false;
            },
            Some(pos) => pos,
        };

        match update(&self.data.tasks[position]) {
            None => false,
            Some(new_task) => {
                self.data.tasks[position] = new_task;
                true
            },
        }
    }
}

impl TaskSource for Cache {
    fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }
}

impl TaskStore for Cache {
    fn add_task(&mut self, task: Task) {
        self.data.tasks.push(task);
    }

    fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) -> bool {
        self.replace_with(id, |task| Some(task.patched(patch)))
    }

    fn delete_task(&mut self, id: &TaskId) -> bool {
        let count = self.data.tasks.len();
        self.data.tasks.retain(|t| t.id() != id);
        self.data.tasks.len() != count
    }

    fn toggle_completion(&mut self, id: &TaskId) -> bool {
        self.replace_with(id, |task| {
            let mut new_task = task.clone();
            new_task.toggle_completion();
            Some(new_task)
        })
    }

    fn update_subtask(&mut self, task_id: &TaskId, subtask_id: &TaskId, completed: bool) -> bool {
        self.replace_with(task_id, |task| {
            let mut new_task = task.clone();
            if new_task.set_subtask_completion(subtask_id, completed) {
                Some(new_task)
            } else {
                None
            }
        })
    }
}
