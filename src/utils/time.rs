//! Time utilities: parsing HH:MM:SS and time-of-day subtraction.

use chrono::NaiveTime;

const SECONDS_PER_DAY: i64 = 86_400;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S").ok()
}

/// Elapsed whole seconds from `start` to `end`, both time-of-day values.
/// An `end` numerically earlier than `start` is read as crossing midnight,
/// so the result is always in `[0, 86400)`.
pub fn seconds_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = (end - start).num_seconds();
    if duration < 0 {
        duration + SECONDS_PER_DAY
    } else {
        duration
    }
}

pub fn format_seconds(secs: i64) -> String {
    format!("{secs} seconds")
}
