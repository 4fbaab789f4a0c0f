//! Prints the agenda of a week, and optionally moves a task by dropping it on a slot.
//!
//! Usage: `agenda [CACHE_FILE] [TASK_ID SLOT_KEY]`, e.g. `agenda tasks.json 3 'slot|2025-03-27|15'`.
//! Depending on your RUST_LOG value, you may see more or less details about ignored drops.

use std::path::PathBuf;

use chrono::NaiveDate;

use tasktune::cache::Cache;
use tasktune::traits::{TaskSource, TaskStore};
use tasktune::{Scheduler, Task, TaskId};

/// The tutorial tasks new users start with
fn tutorial_tasks() -> Vec<Task> {
    let seeds = [
        ("1", "Longpress to complete",         "2025-03-26", "09:00", "09:01"),
        ("2", "Discover taskTune",             "2025-03-27", "10:00", "10:01"),
        ("3", "Click on checkmark to complete", "2025-03-26", "13:00", "13:01"),
        ("4", "Try adding a task",             "2025-03-27", "14:00", "14:01"),
    ];
    seeds.iter()
        .map(|(id, title, date, start, end)| {
            let mut task = Task::new_with_parameters(
                TaskId::from(*id), title.to_string(),
                Some(date.to_string()), Some(start.to_string()), Some(end.to_string()));
            task.set_category(Some("Tutorial".to_string()));
            task
        })
        .collect()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut cache = match args.get(0) {
        None => Cache::with_tasks(tutorial_tasks()),
        Some(path) => {
            let path = PathBuf::from(path);
            match Cache::from_file(&path) {
                Ok(cache) => cache,
                Err(err) => {
                    log::warn!("Invalid cache file: {}. Using the tutorial tasks", err);
                    let mut cache = Cache::new(&path);
                    for task in tutorial_tasks() {
                        cache.add_task(task);
                    }
                    cache
                }
            }
        }
    };

    let shown_week = cache.tasks().iter()
        .find_map(|t| t.day())
        .or_else(|| NaiveDate::from_ymd_opt(2025, 3, 26));
    let shown_week = match shown_week {
        Some(d) => d,
        None => return,
    };

    println!("---- Week of {} -----", shown_week);
    tasktune::utils::print_week(cache.tasks(), shown_week);

    if let (Some(task_id), Some(key)) = (args.get(1), args.get(2)) {
        let mut scheduler = Scheduler::new(&mut cache);
        if scheduler.handle_drop(task_id, key) {
            println!("\n---- After moving task {} to {} -----", task_id, key);
            tasktune::utils::print_week(cache.tasks(), shown_week);
        } else {
            println!("\nTask {} has not been moved, see the previous log lines for more info.", task_id);
        }
    }

    println!("\nCompletion: {}%", cache.completion_percentage());
    cache.save_to_file();
}
