//! Relative time formatting
//!
//! Produces the phrase the templates print in front of a literal `ago`,
//! e.g. `"5 minutes"` or `"1 day"`.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Units from largest to smallest, with their length in seconds
const UNITS: [(i64, &str); 5] = [
    (YEAR, "year"),
    (MONTH, "month"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
];

/// Time elapsed since `then`, measured against the current time
pub fn time_since(then: DateTime<Utc>) -> String {
    time_since_at(then, Utc::now())
}

/// Time elapsed between `then` and `now`
///
/// Timestamps after `now` clamp to `"0 seconds"`.
pub fn time_since_at(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_seconds(now.signed_duration_since(then).num_seconds())
}

/// Format an elapsed number of seconds using the largest whole unit
pub fn format_seconds(seconds: i64) -> String {
    let seconds = seconds.max(0);

    for (length, unit) in UNITS {
        let count = seconds / length;
        if count >= 1 {
            return pluralize(count, unit);
        }
    }

    pluralize(seconds, "second")
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
