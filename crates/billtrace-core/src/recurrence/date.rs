use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Occurrence dates arrive as day/month/year.
const INPUT_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT).ok()
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// ISO 8601 local date-time at second precision, no offset.
pub fn format_iso_datetime(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Builds a creation timestamp from a raw `HH:MM[.S]` clock string and the
/// run date. Hours wrap modulo 24; a minute or second out of range, a missing
/// separator, or any non-numeric part falls back to `now` unchanged.
pub fn normalize_created_at(raw: &str, now: NaiveDateTime) -> NaiveDateTime {
    match parse_clock_time(raw) {
        Some(time) => NaiveDateTime::new(now.date(), time),
        None => now,
    }
}

fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let (clock, seconds_part) = match raw.split_once('.') {
        Some((clock, rest)) => (clock, Some(rest)),
        None => (raw, None),
    };

    let (hours_part, minutes_part) = clock.split_once(':')?;
    let hours = hours_part.trim().parse::<u32>().ok()? % 24;
    let minutes = minutes_part.trim().parse::<u32>().ok()?;
    let seconds = match seconds_part {
        Some(part) => part.trim().parse::<u32>().ok()?,
        None => 0,
    };

    NaiveTime::from_hms_opt(hours, minutes, seconds)
}
