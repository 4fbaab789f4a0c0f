//! Utilities to compare tasks
//!
//! These can be used to sort task lists, e.g. with `sort_by`

use std::cmp::Ordering;

use crate::Task;

/// Chronological order: by day, then by start time. Tasks that have no (valid) day or start time come last
pub fn compare_by_start(left: &Task, right: &Task) -> Ordering {
    fn last_if_none<T: Ord>(l: Option<T>, r: Option<T>) -> Ordering {
        match (l, r) {
            (Some(l), Some(r)) => l.cmp(&r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    last_if_none(left.day(), right.day())
        .then_with(|| last_if_none(left.start(), right.start()))
}

/// Compare alphabetically, case-insensitive
pub fn compare_alpha(left: &Task, right: &Task) -> Ordering {
    Ord::cmp(&left.title().to_lowercase(), &right.title().to_lowercase())
}
