//! Relative ("3 days ago") time formatting.

use crate::constants::CREATED_PREFIX;
use chrono::{DateTime, Utc};

const SECOND: i64 = 1;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;
const LONG_TIME: i64 = 37 * YEAR;

/// How a magnitude bucket renders its count.
enum Unit {
    /// A fixed phrase, e.g. `1 hour`.
    Fixed(&'static str),
    /// `<n> <unit>`, where `n` is the elapsed seconds divided by the divisor.
    Counted(i64, &'static str),
}

/// Buckets in ascending order. The first one whose bound exceeds the elapsed time wins.
const MAGNITUDES: [(i64, Unit); 16] = [
    (SECOND, Unit::Fixed("now")),
    (2 * SECOND, Unit::Fixed("1 second")),
    (MINUTE, Unit::Counted(SECOND, "seconds")),
    (2 * MINUTE, Unit::Fixed("1 minute")),
    (HOUR, Unit::Counted(MINUTE, "minutes")),
    (2 * HOUR, Unit::Fixed("1 hour")),
    (DAY, Unit::Counted(HOUR, "hours")),
    (2 * DAY, Unit::Fixed("1 day")),
    (WEEK, Unit::Counted(DAY, "days")),
    (2 * WEEK, Unit::Fixed("1 week")),
    (MONTH, Unit::Counted(WEEK, "weeks")),
    (2 * MONTH, Unit::Fixed("1 month")),
    (YEAR, Unit::Counted(MONTH, "months")),
    (18 * MONTH, Unit::Fixed("1 year")),
    (2 * YEAR, Unit::Fixed("2 years")),
    (LONG_TIME, Unit::Counted(YEAR, "years")),
];

/// Formats `then` relative to `now`, e.g. `2 hours ago` or `3 days from now`.
pub(crate) fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then).num_seconds();
    let (seconds, suffix) = if elapsed >= 0 {
        (elapsed, "ago")
    } else {
        (-elapsed, "from now")
    };

    let phrase = MAGNITUDES
        .iter()
        .find(|(bound, _)| seconds < *bound)
        .map(|(_, unit)| match unit {
            Unit::Fixed(text) => (*text).to_string(),
            Unit::Counted(divisor, unit) => format!("{} {}", seconds / divisor, unit),
        })
        .unwrap_or_else(|| "a long while".to_string());

    // "now" stands on its own.
    if phrase == "now" {
        return phrase;
    }
    format!("{phrase} {suffix}")
}

/// The text shown in the CREATED AT column, e.g. `about 2 hours ago`.
pub fn created_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{}{}", CREATED_PREFIX, format_relative_time(created_at, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ago(now: DateTime<Utc>, seconds: i64) -> String {
        format_relative_time(now - Duration::seconds(seconds), now)
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        assert_eq!(ago(now, 0), "now");
        assert_eq!(ago(now, 1), "1 second ago");
        assert_eq!(ago(now, 30), "30 seconds ago");
        assert_eq!(ago(now, MINUTE), "1 minute ago");
        assert_eq!(ago(now, 59 * MINUTE), "59 minutes ago");
        assert_eq!(ago(now, HOUR), "1 hour ago");
        assert_eq!(ago(now, 2 * HOUR), "2 hours ago");
        assert_eq!(ago(now, 23 * HOUR), "23 hours ago");
        assert_eq!(ago(now, DAY), "1 day ago");
        assert_eq!(ago(now, 3 * DAY), "3 days ago");
        assert_eq!(ago(now, WEEK), "1 week ago");
        assert_eq!(ago(now, 3 * WEEK), "3 weeks ago");
        assert_eq!(ago(now, MONTH), "1 month ago");
        assert_eq!(ago(now, 5 * MONTH), "5 months ago");
        assert_eq!(ago(now, YEAR), "1 year ago");
        assert_eq!(ago(now, 20 * MONTH), "2 years ago");
        assert_eq!(ago(now, 5 * YEAR), "5 years ago");
        assert_eq!(ago(now, 40 * YEAR), "a long while ago");
    }

    #[test]
    fn test_format_relative_time_future() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(ago(now, -3 * HOUR), "3 hours from now");
    }

    #[test]
    fn test_created_label() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(
            created_label(now - Duration::hours(2), now),
            "about 2 hours ago"
        );
    }
}
