//! Drag-and-drop scenarios, run against a task store

use chrono::NaiveDate;

use tasktune::cache::Cache;
use tasktune::layout::{place_task, LayoutConfig};
use tasktune::reschedule::plan_reschedule;
use tasktune::slot::{tasks_for_day, tasks_for_hour};
use tasktune::traits::TaskSource;
use tasktune::{DropTarget, RescheduleError, Scheduler, Task, TaskId, TaskPatch};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task(id: &str, date: &str, start: Option<&str>, end: Option<&str>) -> Task {
    Task::new_with_parameters(
        TaskId::from(id), format!("task {}", id),
        Some(date.to_string()), start.map(String::from), end.map(String::from))
}

/// A store with the task of the reference scenarios, among others
fn populate_test_store() -> Cache {
    let _ = env_logger::builder().is_test(true).try_init();

    Cache::with_tasks(vec![
        task("before", "2025-03-10", Some("08:00"), Some("08:30")),
        task("t", "2025-03-10", Some("09:00"), Some("10:00")),
        task("after", "2025-03-11", None, None),
    ])
}

fn get(cache: &Cache, id: &str) -> Task {
    cache.get_task(&TaskId::from(id)).unwrap().clone()
}

#[test]
fn drop_on_a_day_only_moves_the_date() {
    let mut cache = populate_test_store();
    let mut scheduler = Scheduler::new(&mut cache);

    let patch = scheduler.reschedule(&TaskId::from("t"), &DropTarget::day(ymd(2025, 3, 15))).unwrap();
    assert_eq!(patch, TaskPatch { date: Some("2025-03-15".to_string()), ..TaskPatch::default() });

    let moved = get(&cache, "t");
    assert_eq!(moved.date(), Some("2025-03-15"));
    assert_eq!(moved.start_time(), Some("09:00"));
    assert_eq!(moved.end_time(), Some("10:00"));
}

#[test]
fn drop_on_a_day_by_key() {
    let mut cache = populate_test_store();
    assert!(Scheduler::new(&mut cache).handle_drop("t", "slot|2025-03-15|"));

    let moved = get(&cache, "t");
    assert_eq!(moved.date(), Some("2025-03-15"));
    assert_eq!(moved.start_time(), Some("09:00"));
    assert_eq!(moved.end_time(), Some("10:00"));
}

#[test]
fn drop_on_an_hour_by_key() {
    let mut cache = populate_test_store();
    assert!(Scheduler::new(&mut cache).handle_drop("t", "slot|2025-03-15|14"));

    let moved = get(&cache, "t");
    assert_eq!(moved.date(), Some("2025-03-15"));
    assert_eq!(moved.start_time(), Some("14:00"));
    assert_eq!(moved.end_time(), Some("15:00"));

    // It now shows up in its new cell, and only there
    assert_eq!(tasks_for_hour(cache.tasks(), ymd(2025, 3, 15), 14).len(), 1);
    assert!(tasks_for_hour(cache.tasks(), ymd(2025, 3, 10), 9).is_empty());
}

#[test]
fn moving_to_a_day_twice_is_idempotent() {
    let mut cache = populate_test_store();
    let before = get(&cache, "t");
    {
        let mut scheduler = Scheduler::new(&mut cache);
        assert!(scheduler.handle_drop("t", "slot|2025-03-20|"));
        assert!(scheduler.handle_drop("t", "slot|2025-03-20|"));
    }
    let after = get(&cache, "t");
    assert_eq!(after.date(), Some("2025-03-20"));
    assert_eq!(after.start_time(), before.start_time());
    assert_eq!(after.end_time(), before.end_time());
}

#[test]
fn half_hour_task_keeps_its_duration() {
    let mut cache = Cache::with_tasks(vec![task("short", "2025-03-10", Some("10:00"), Some("10:30"))]);
    assert!(Scheduler::new(&mut cache).handle_drop("short", "slot|2025-03-10|14"));

    let moved = get(&cache, "short");
    assert_eq!(moved.start_time(), Some("14:00"));
    assert_eq!(moved.end_time(), Some("14:30"));
}

#[test]
fn late_drops_are_clamped() {
    let mut cache = Cache::with_tasks(vec![task("long", "2025-03-10", Some("10:00"), Some("11:30"))]);
    assert!(Scheduler::new(&mut cache).handle_drop("long", "slot|2025-03-10|23"));

    let moved = get(&cache, "long");
    assert_eq!(moved.start_time(), Some("23:00"));
    assert_eq!(moved.end_time(), Some("23:59"));
}

#[test]
fn malformed_targets_change_nothing() {
    let mut cache = populate_test_store();
    let before = cache.tasks().to_vec();

    let keys = [
        "slot|not-a-date|9",
        "slot|2025-03-15",
        "slot|2025-03-15|14|",
        "slot|2025/03/15|14",
        "slot|2025-03-15|24",
        "slot|2025-03-15|two",
        "day|2025-03-15|",
        "",
    ];
    let mut scheduler = Scheduler::new(&mut cache);
    for key in &keys {
        assert!(!scheduler.handle_drop("t", key), "{} should have been rejected", key);
    }

    assert_eq!(cache.tasks(), &before[..]);
}

#[test]
fn unknown_tasks_change_nothing() {
    let mut cache = populate_test_store();
    let before = cache.tasks().to_vec();

    let mut scheduler = Scheduler::new(&mut cache);
    assert!(!scheduler.handle_drop("ghost", "slot|2025-03-15|14"));
    assert_eq!(
        scheduler.reschedule(&TaskId::from("ghost"), &DropTarget::day(ymd(2025, 3, 15))),
        Err(RescheduleError::UnknownTask(TaskId::from("ghost"))),
    );

    assert_eq!(cache.tasks(), &before[..]);
}

#[test]
fn out_of_range_hours_do_not_move_the_date_either() {
    let mut cache = populate_test_store();
    let before = cache.tasks().to_vec();

    let result = Scheduler::new(&mut cache).reschedule(&TaskId::from("t"), &DropTarget::hour(ymd(2025, 3, 15), 30));
    assert_eq!(result, Err(RescheduleError::HourOutOfRange(30)));
    assert_eq!(cache.tasks(), &before[..]);
}

#[test]
fn unreadable_times_abort_hour_drops() {
    let mut cache = Cache::with_tasks(vec![task("odd", "2025-03-10", Some("7:00 AM"), None)]);
    let before = cache.tasks().to_vec();

    let mut scheduler = Scheduler::new(&mut cache);
    assert!(!scheduler.handle_drop("odd", "slot|2025-03-12|9"));
    assert_eq!(scheduler.store().tasks(), &before[..]);

    // Moving it to another day does not need its times
    assert!(scheduler.handle_drop("odd", "slot|2025-03-12|"));
    assert_eq!(get(&cache, "odd").start_time(), Some("7:00 AM"));
}

#[test]
fn other_tasks_are_untouched() {
    let mut cache = populate_test_store();
    let before = cache.tasks().to_vec();

    assert!(Scheduler::new(&mut cache).handle_drop("t", "slot|2025-03-15|14"));

    assert_eq!(cache.tasks().len(), before.len());
    assert_eq!(cache.tasks()[0], before[0]);
    assert_eq!(cache.tasks()[2], before[2]);
    // Order is preserved
    assert_eq!(cache.tasks()[1].id(), before[1].id());
}

#[test]
fn loosely_dated_tasks_can_be_moved() {
    let mut cache = Cache::with_tasks(vec![task("loose", "March 10, 2025", Some("09:00"), None)]);
    assert_eq!(tasks_for_day(cache.tasks(), ymd(2025, 3, 10)).len(), 1);

    assert!(Scheduler::new(&mut cache).handle_drop("loose", "slot|2025-03-11|"));
    // Moved tasks get a strict date
    assert_eq!(get(&cache, "loose").date(), Some("2025-03-11"));
    assert_eq!(tasks_for_day(cache.tasks(), ymd(2025, 3, 11)).len(), 1);
}

#[test]
fn placement_after_a_move() {
    let config = LayoutConfig { grid_start_hour: 7.0, pixels_per_hour: 60.0, min_block_height: 15.0 };
    let original = task("t", "2025-03-10", Some("10:00"), None);
    let moved = original.patched(&plan_reschedule(&original, &DropTarget::hour(ymd(2025, 3, 11), 12)).unwrap());

    let before = place_task(&original, &config).unwrap();
    let after = place_task(&moved, &config).unwrap();
    assert_eq!(before.height, after.height);
    assert_eq!(after.top - before.top, 120.0);
}
