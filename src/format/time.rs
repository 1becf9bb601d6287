use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Shown in place of a value that can't be formatted
pub const NOT_AVAILABLE: &str = "N/A";

/// Epoch seconds as a local wall-clock time ("14:03:27")
pub fn format_timestamp(timestamp: f64) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Epoch seconds as a wall-clock time in `tz`
pub fn format_timestamp_in<Tz>(timestamp: f64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !timestamp.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let secs = timestamp.floor();
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return NOT_AVAILABLE.to_string();
    }
    let nanos = (((timestamp - secs) * 1e9) as u32).min(999_999_999);

    match DateTime::from_timestamp(secs as i64, nanos) {
        Some(utc) => utc.with_timezone(tz).format("%H:%M:%S").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Seconds with millisecond precision ("0.420s")
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.3}s", seconds)
}
