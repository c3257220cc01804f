use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses a submitted date into a UTC instant.
///
/// Date-only input is midnight UTC. Offset-less date-times are read as UTC too,
/// so the result never depends on the server's local timezone.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Whole days from `start` to `end`, rounding partial days up.
///
/// Not clamped: an `end` before `start` gives a negative count.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let diff_ms = (end - start).num_milliseconds();
    let days = diff_ms / MILLIS_PER_DAY;
    if diff_ms % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

pub fn day_count(start: &str, end: &str) -> Option<i64> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;
    Some(days_between(start, end))
}
