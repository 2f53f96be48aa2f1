//! Transaction datetime extraction.

use chrono::{NaiveDate, NaiveDateTime};

use super::patterns::{DATETIME_LINE, MONTHS};

/// Parse a line of the exact shape `D Month YYYY H:MM[:SS]`.
///
/// Month names are English, full or abbreviated, case-insensitive. Calendar
/// overflow (e.g. 31 Sep) is rejected rather than rolled over.
pub fn extract_datetime(line: &str) -> Option<NaiveDateTime> {
    let caps = DATETIME_LINE.captures(line)?;

    let month = *MONTHS.get(caps[2].to_lowercase().as_str())?;
    let day: u32 = caps[1].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let hour: u32 = caps[4].parse().ok()?;
    let minute: u32 = caps[5].parse().ok()?;
    let second: u32 = match caps.get(6) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    if !(1000..=9999).contains(&year)
        || !(1..=31).contains(&day)
        || hour > 23
        || minute > 59
        || second > 59
    {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}
