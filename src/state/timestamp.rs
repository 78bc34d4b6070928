//! Human-readable submission timestamps

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike, Utc};

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    if day > 3 && day < 21 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Format as `1st March, 25 at 9:05 AM`
pub fn format_submitted_at(at: &NaiveDateTime) -> String {
    let day = at.day();
    let hours = at.hour();
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    let ampm = if hours >= 12 { "PM" } else { "AM" };
    format!(
        "{day}{suffix} {month}, {year:02} at {hour12}:{minutes:02} {ampm}",
        suffix = ordinal_suffix(day),
        month = at.format("%B"),
        year = at.year().rem_euclid(100),
        minutes = at.minute(),
    )
}

/// Format a service timestamp in the local time zone
pub fn format_submitted_at_local(at: &DateTime<Utc>) -> String {
    format_submitted_at(&at.with_timezone(&Local).naive_local())
}
