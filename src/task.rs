//! To-do tasks, as they are shown on the calendar

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::clock::ClockTime;
use crate::kanban::KanbanColumn;

/// An opaque, unique task identifier.
///
/// The web front-end historically used both numbers and strings as task ids. Both are accepted when deserializing,
/// and are always stored (and serialized back) as strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self { content: s.to_string() }
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<u64> for TaskId {
    fn from(n: u64) -> Self {
        Self { content: n.to_string() }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        let content = match RawId::deserialize(deserializer)? {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        };
        Ok(TaskId{ content })
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A checklist entry of a task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl SubTask {
    pub fn new(title: String) -> Self {
        Self { id: TaskId::random(), title, completed: false }
    }
}

/// A task.
///
/// The scheduling code only cares about the date and time fields. Everything else is display metadata,
/// carried around untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    #[serde(default)]
    title: String,

    /// The day this task is planned on, expected as `YYYY-MM-DD`.
    /// This is kept as it was received: malformed values are tolerated, and simply never match any calendar cell
    #[serde(default)]
    date: Option<String>,
    /// `HH:MM`, 24-hour. `None` means "not scheduled within the day"
    #[serde(default)]
    start_time: Option<String>,
    /// `HH:MM`, 24-hour. When missing, the task is shown as lasting one hour
    #[serde(default)]
    end_time: Option<String>,

    #[serde(default)]
    completed: bool,
    #[serde(default, deserialize_with = "deserialize_progress")]
    progress: u8,

    #[serde(default = "crate::config::default_color")]
    color: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default, alias = "project")]
    category: Option<String>,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default, alias = "subTasks")]
    subtasks: Vec<SubTask>,
}

impl Task {
    /// Create a brand new task, that is not planned at any time of the day yet.
    /// This will pick a new (random) task ID.
    pub fn new(title: String, date: Option<NaiveDate>) -> Self {
        Self::new_with_parameters(
            TaskId::random(), title,
            date.map(crate::date::format_date), None, None,
        )
    }

    /// Create a task with a given identifier and raw date/time strings
    pub fn new_with_parameters(id: TaskId, title: String,
                               date: Option<String>, start_time: Option<String>, end_time: Option<String>,
                            ) -> Self
    {
        Self {
            id,
            title,
            date,
            start_time,
            end_time,
            completed: false,
            progress: 0,
            color: crate::config::default_color(),
            icon: None,
            category: None,
            priority: Priority::default(),
            notes: None,
            subtasks: Vec::new(),
        }
    }

    /// Create the task a user starts editing after clicking an empty calendar cell.
    ///
    /// An hour cell pre-fills a one-hour block starting at that hour (ending at 23:59 for the last hour of the day).
    /// A whole-day cell pre-fills 09:00 to 10:00.
    pub fn for_slot(date: NaiveDate, hour: Option<u32>) -> Self {
        let (start, end) = match hour {
            Some(h) if h < 23 => (ClockTime::new(h as u8, 0), ClockTime::new(h as u8 + 1, 0)),
            Some(_) => (ClockTime::new(23, 0), Some(ClockTime::END_OF_DAY)),
            None => (ClockTime::new(9, 0), ClockTime::new(10, 0)),
        };
        let mut task = Self::new(String::new(), Some(date));
        task.start_time = start.map(|t| t.to_string());
        task.end_time = end.map(|t| t.to_string());
        task
    }

    /// Create a task from the kanban board, directly in a given column (see [`KanbanColumn::progress`])
    pub fn for_column(title: String, column: KanbanColumn) -> Self {
        let mut task = Self::new(title, None);
        task.apply(&column.patch());
        task
    }

    pub fn id(&self) -> &TaskId           { &self.id          }
    pub fn title(&self) -> &str           { &self.title       }
    pub fn date(&self) -> Option<&str>    { self.date.as_deref() }
    pub fn start_time(&self) -> Option<&str> { self.start_time.as_deref() }
    pub fn end_time(&self) -> Option<&str>   { self.end_time.as_deref() }
    pub fn completed(&self) -> bool       { self.completed    }
    pub fn progress(&self) -> u8          { self.progress     }
    pub fn color(&self) -> &str           { &self.color       }
    pub fn icon(&self) -> Option<&str>    { self.icon.as_deref() }
    pub fn category(&self) -> Option<&str> { self.category.as_deref() }
    pub fn priority(&self) -> Priority    { self.priority     }
    pub fn notes(&self) -> Option<&str>   { self.notes.as_deref() }
    pub fn subtasks(&self) -> &[SubTask]  { &self.subtasks    }

    /// The normalized day of this task, if its date can be understood
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(crate::date::normalize_date)
    }

    /// The parsed start time, if any
    pub fn start(&self) -> Option<ClockTime> {
        self.start_time.as_deref().and_then(ClockTime::parse)
    }

    /// The parsed end time, if any
    pub fn end(&self) -> Option<ClockTime> {
        self.end_time.as_deref().and_then(ClockTime::parse)
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }
    pub fn set_color(&mut self, color: String) {
        self.color = color;
    }
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }
    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }
    pub fn add_subtask(&mut self, subtask: SubTask) {
        self.subtasks.push(subtask);
    }

    /// Merge a patch into this task. Only the fields that are set in the patch are replaced
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title { self.title = title.clone(); }
        if let Some(date) = &patch.date { self.date = Some(date.clone()); }
        if let Some(start) = &patch.start_time { self.start_time = Some(start.clone()); }
        if let Some(end) = &patch.end_time { self.end_time = Some(end.clone()); }
        if let Some(completed) = patch.completed { self.completed = completed; }
        if let Some(progress) = patch.progress { self.progress = progress.min(100); }
        if let Some(color) = &patch.color { self.color = color.clone(); }
        if let Some(icon) = &patch.icon { self.icon = Some(icon.clone()); }
        if let Some(category) = &patch.category { self.category = Some(category.clone()); }
        if let Some(priority) = patch.priority { self.priority = priority; }
        if let Some(notes) = &patch.notes { self.notes = Some(notes.clone()); }
    }

    /// Returns a copy of this task, with a patch applied
    pub fn patched(&self, patch: &TaskPatch) -> Self {
        let mut new_task = self.clone();
        new_task.apply(patch);
        new_task
    }

    /// Rounded percentage of completed subtasks, or `None` if this task has no subtask
    pub fn subtask_progress(&self) -> Option<u8> {
        let total = self.subtasks.len();
        if total == 0 {
            return None;
        }
        let done = self.subtasks.iter().filter(|st| st.completed).count();
        Some(rounded_percentage(done, total))
    }

    /// Flip the completion status.
    ///
    /// A completed task has a 100% progress. Un-completing it resets its progress to its subtasks' progress,
    /// or keeps the previous progress in case it has no subtasks.
    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
        self.progress = if self.completed {
            100
        } else {
            self.subtask_progress().unwrap_or(self.progress)
        };
    }

    /// Set the completion status of a subtask, and update the task progress accordingly.
    /// Returns `false` in case there is no such subtask.
    pub fn set_subtask_completion(&mut self, subtask_id: &TaskId, completed: bool) -> bool {
        match self.subtasks.iter_mut().find(|st| &st.id == subtask_id) {
            None => return false,
            Some(subtask) => subtask.completed = completed,
        }

        // There is at least one subtask at this point
        let progress = self.subtask_progress().unwrap_or(0);
        self.progress = progress;
        self.completed = progress == 100;
        true
    }
}

/// Progress values sent by the web front-end may be fractional, or even out of range.
/// They are rounded and clamped to 0..=100, and a `null` progress is 0.
fn deserialize_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    if raw.is_nan() {
        return Ok(0);
    }
    Ok(raw.round().max(0.0).min(100.0) as u8)
}

/// Rounds half up, like a calendar front-end would
pub(crate) fn rounded_percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part * 200 + total) / (2 * total)) as u8
}


/// A partial update of a task. Fields left to `None` are not modified.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TaskPatch {
    /// A patch that only moves a task to another day
    pub fn date(date: NaiveDate) -> Self {
        Self {
            date: Some(crate::date::format_date(date)),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
