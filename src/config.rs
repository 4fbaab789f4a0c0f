//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The first hour shown at the top of the continuous day and week columns.
/// Feel free to override it when initing this library.
pub static GRID_START_HOUR: Lazy<Arc<Mutex<f32>>> = Lazy::new(|| Arc::new(Mutex::new(7.0)));

/// Height of one hour in the continuous day and week columns, in pixels.
/// Feel free to override it when initing this library.
pub static PIXELS_PER_HOUR: Lazy<Arc<Mutex<f32>>> = Lazy::new(|| Arc::new(Mutex::new(60.0)));

/// Tasks are never drawn smaller than this, in pixels, so that they remain visible and clickable.
/// Feel free to override it when initing this library.
pub static MIN_BLOCK_HEIGHT: Lazy<Arc<Mutex<f32>>> = Lazy::new(|| Arc::new(Mutex::new(15.0)));

/// The palette color given to tasks that do not specify any
pub static DEFAULT_COLOR: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("purple".to_string())));


/// Read a setting. A poisoned lock still holds a usable value, since settings are only ever replaced as a whole
pub(crate) fn read<T: Clone>(setting: &Lazy<Arc<Mutex<T>>>) -> T {
    match setting.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace a setting
pub fn set<T>(setting: &Lazy<Arc<Mutex<T>>>, value: T) {
    match setting.lock() {
        Ok(mut guard) => *guard = value,
        Err(poisoned) => *poisoned.into_inner() = value,
    }
}

pub(crate) fn default_color() -> String {
    read(&DEFAULT_COLOR)
}
