//! Some utility functions

pub mod comparison;

use chrono::NaiveDate;

use crate::calendar::{hour_label, week_of};
use crate::slot::tasks_for_hour;
use crate::Task;

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    let when = match (task.start_time(), task.end_time()) {
        (Some(start), Some(end)) => format!("{}-{}", start, end),
        (Some(start), None) => start.to_string(),
        _ => "--:--".to_string(),
    };
    println!("    {} {} {:<11}\t{}\t{}", completion, task.date().unwrap_or("??????????"), when, task.title(), task.id());
}

/// A debug utility that pretty-prints a list of tasks
pub fn print_tasks(tasks: &[Task]) {
    for task in tasks {
        print_task(task);
    }
}

/// A debug utility that pretty-prints the scheduled tasks of the week that contains `date`, hour by hour
pub fn print_week(tasks: &[Task], date: NaiveDate) {
    let week = match week_of(date) {
        Some(w) => w,
        None => {
            log::warn!("The week of {} is out of the representable date range", date);
            return;
        },
    };
    for day in week.iter() {
        println!("{}", day.format("%A %Y-%m-%d"));
        for hour in 0..24 {
            let hour_tasks = tasks_for_hour(tasks, *day, hour);
            if hour_tasks.is_empty() {
                continue;
            }
            println!("  {}", hour_label(hour));
            for task in hour_tasks {
                print_task(task);
            }
        }
    }
}
