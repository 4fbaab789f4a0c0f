//! Times of the day, as `HH:MM` strings

use std::fmt::{Display, Formatter};

/// A wall-clock time, with a minute resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// The last representable minute of a day
    pub const END_OF_DAY: ClockTime = ClockTime { hour: 23, minute: 59 };
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Returns `None` for out-of-range values
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Parse a `HH:MM` (or `H:MM`) 24-hour string
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(':');
        let hour = parts.next()?;
        let minute = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return None;
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(hour.parse().ok()?, minute.parse().ok()?)
    }

    /// Build a time from a count of minutes since midnight, clamped to `00:00..=23:59`
    pub fn from_minutes_clamped(minutes: i64) -> Self {
        let clamped = minutes.max(0).min(Self::END_OF_DAY.as_minutes() as i64);
        Self {
            hour: (clamped / 60) as u8,
            minute: (clamped % 60) as u8,
        }
    }

    pub fn hour(&self) -> u8 { self.hour }
    pub fn minute(&self) -> u8 { self.minute }

    /// Minutes since midnight
    pub fn as_minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Hours since midnight, e.g. 9.5 for `09:30`
    pub fn as_fractional_hours(&self) -> f32 {
        self.hour as f32 + self.minute as f32 / 60.0
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
