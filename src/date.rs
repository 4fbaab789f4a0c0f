//! Calendar dates normalization
//!
//! Task dates are stored as they were entered, and are only normalized when they are compared with a calendar cell.
//! Normalization is done in two stages:
//! * strict `YYYY-MM-DD` decomposition
//! * if (and only if) the string does not have this shape, a generic parse of the most common date-like formats
//!
//! A date that cannot be understood normalizes to `None`, and `None` never matches any day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date-only formats tried by the generic parser
const LOOSE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
    "%A, %B %d, %Y",
];

/// Date-and-time formats without timezone tried by the generic parser
const LOOSE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Whether a string has the exact `YYYY-MM-DD` shape (this does not check the date actually exists)
pub fn is_strict_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a strict `YYYY-MM-DD` string
pub fn parse_strict_date(s: &str) -> Option<NaiveDate> {
    if is_strict_date(s) == false {
        return None;
    }
    let year = s[0..4].parse::<i32>().ok()?;
    let month = s[5..7].parse::<u32>().ok()?;
    let day = s[8..10].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse any date-like string we know about.
///
/// Timestamps are reduced to the date they were written with, regardless of their timezone.
pub fn parse_loose_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local().date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_local().date());
    }
    for fmt in LOOSE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in LOOSE_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    log::debug!("Unable to understand date {:?}", s);
    None
}

/// Normalize a date string into a comparable day.
///
/// Strings that have the strict `YYYY-MM-DD` shape are never handed to the generic parser: `2025-02-30` is invalid,
/// it is not "fixed" into another day.
pub fn normalize_date(s: &str) -> Option<NaiveDate> {
    if is_strict_date(s) {
        parse_strict_date(s)
    } else {
        parse_loose_date(s)
    }
}

/// Component-wise day equality. Invalid dates are never equal to anything, not even to another invalid date
pub fn same_day(left: Option<NaiveDate>, right: Option<NaiveDate>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l.year() == r.year() && l.month() == r.month() && l.day() == r.day(),
        _ => false,
    }
}

/// Format a day as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn strict_shape() {
        assert!(is_strict_date("2025-03-26"));
        assert!(is_strict_date("2025-02-30"));
        assert!(!is_strict_date("2025-3-26"));
        assert!(!is_strict_date("2025/03/26"));
        assert!(!is_strict_date(" 2025-03-26"));
        assert!(!is_strict_date(""));
    }

    #[test]
    fn strict_dates() {
        assert_eq!(normalize_date("2025-03-26"), Some(ymd(2025, 3, 26)));
        assert_eq!(normalize_date("2024-02-29"), Some(ymd(2024, 2, 29)));
        assert_eq!(normalize_date("2025-02-30"), None);
        assert_eq!(normalize_date("2025-13-01"), None);
    }

    #[test]
    fn loose_dates() {
        let expected = Some(ymd(2025, 3, 5));
        assert_eq!(normalize_date("2025-3-5"), expected);
        assert_eq!(normalize_date("2025/03/05"), expected);
        assert_eq!(normalize_date("03/05/2025"), expected);
        assert_eq!(normalize_date("March 5, 2025"), expected);
        assert_eq!(normalize_date("Mar 5 2025"), expected);
        assert_eq!(normalize_date("5 March 2025"), expected);
        assert_eq!(normalize_date("Wed Mar 05 2025"), expected);
        assert_eq!(normalize_date("2025-03-05T10:30:00"), expected);
        assert_eq!(normalize_date("2025-03-05T23:30:00+05:00"), expected);
        assert_eq!(normalize_date("2025-03-05T00:15:00.000Z"), expected);
    }

    #[test]
    fn garbage_is_not_a_date() {
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("   "), None);
        assert_eq!(normalize_date("not-a-date"), None);
        assert_eq!(normalize_date("tomorrow"), None);
        assert_eq!(normalize_date("2025-03-"), None);
    }

    #[test]
    fn invalid_dates_never_compare_equal() {
        assert!(same_day(Some(ymd(2025, 3, 5)), normalize_date("March 5, 2025")));
        assert!(!same_day(Some(ymd(2025, 3, 5)), Some(ymd(2025, 3, 6))));
        assert!(!same_day(None, None));
        assert!(!same_day(Some(ymd(2025, 3, 5)), None));
    }

    #[test]
    fn formatting() {
        assert_eq!(format_date(ymd(2025, 3, 5)), "2025-03-05");
        assert_eq!(format_date(ymd(987, 12, 31)), "0987-12-31");
    }
}
