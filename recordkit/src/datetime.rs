//! Helpers for `YYYY-MM-DD HH:MM:SS` date-time strings.

use chrono::format::{parse, DelayedFormat, Parsed, StrftimeItems};
use std::fmt::Write;

/// `strftime` form of `YYYY-MM-DD HH:MM:SS`.
pub const ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `"2012-10-05 18:23:45"` gives `"2012-10-05"`. Empty when there is no
/// space separating the two parts.
pub fn date_part(text: &str) -> &str {
    text.split_once(' ').map_or("", |(date, _)| date)
}

/// `"2012-10-05 18:23:45"` gives `"18:23:45"`. Empty when there is no
/// space separating the two parts.
pub fn time_part(text: &str) -> &str {
    text.split_once(' ').map_or("", |(_, time)| time)
}

/// True when `text` is a valid date-time in [`ISO_FORMAT`].
pub fn is_date(text: &str) -> bool {
    is_date_with(text, ISO_FORMAT)
}

/// True when `text` parses with the `strftime` `format` and prints back
/// exactly as given, so `2012-02-30` or a missing leading zero fail.
/// Formats holding only a date or only a time are accepted too.
pub fn is_date_with(text: &str, format: &str) -> bool {
    let mut parsed = Parsed::new();
    if parse(&mut parsed, text, StrftimeItems::new(format)).is_err() {
        return false;
    }

    let date = parsed.to_naive_date().ok();
    let time = parsed.to_naive_time().ok();
    if date.is_none() && time.is_none() {
        return false;
    }

    // A field the parsed value cannot supply fails the write.
    let mut printed = String::with_capacity(text.len());
    let formatted = DelayedFormat::new(date, time, StrftimeItems::new(format));
    write!(printed, "{}", formatted).is_ok() && printed == text
}
