//! Date-time normalization for attendance timestamps.
//!
//! Attendance exports mix 12-hour and 24-hour clocks and frequently drop the
//! meridiem marker. This module turns that text into an unambiguous
//! [`NaiveDateTime`], treating a time without a marker as AM.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::{AuditError, AuditResult};

/// Date layouts accepted in front of the time component, tried in order.
const DATE_FORMATS: [&str; 5] = ["%m/%d/%Y", "%m-%d-%Y", "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%y"];

/// ISO-8601 layouts without an offset.
const ISO_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Recognizes a one- or two-letter marker: `A`, `AM`, `P`, `PM` in any case.
    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "A" | "AM" => Some(Meridiem::Am),
            "P" | "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// Parses a locale-ambiguous date-time string into an instant.
///
/// The string holds a date, a `H:MM` or `HH:MM` time (optionally with
/// seconds), an optional meridiem marker and optional zone tokens. When the
/// marker is missing the time is read as AM. Hours `0` and `13..=23` cannot
/// be AM on a 12-hour clock, so those are read as a 24-hour time. Unmarked
/// `12:xx` is therefore `00:xx`, which puts a 24-hour export's `12:30` before
/// its `11:00` on the same day. A numeric
/// offset or `UTC`/`GMT`/`Z` normalizes the result to UTC.
///
/// # Errors
///
/// Returns [`AuditError::InvalidDateTime`] when the text does not describe a
/// real calendar instant.
///
/// # Examples
///
/// ```
/// use attendance_audit::parsing::parse_date_time;
///
/// let evening = parse_date_time("10/02/2023 09:00 PM").unwrap();
/// let unmarked = parse_date_time("10/02/2023 09:00").unwrap();
///
/// assert_eq!(evening.to_string(), "2023-10-02 21:00:00");
/// assert_eq!(unmarked.to_string(), "2023-10-02 09:00:00");
/// assert!(unmarked < evening);
/// ```
pub fn parse_date_time(raw: &str) -> AuditResult<NaiveDateTime> {
    let invalid = || AuditError::InvalidDateTime {
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Some(instant) = parse_iso(trimmed) {
        return Ok(instant);
    }

    let mut tokens = trimmed.split_whitespace();
    let date = tokens.next().and_then(parse_date).ok_or_else(invalid)?;
    let (clock, mut meridiem) = tokens.next().and_then(split_clock).ok_or_else(invalid)?;

    let mut offset: Option<FixedOffset> = None;
    for token in tokens {
        if meridiem.is_none() && offset.is_none() {
            if let Some(marker) = Meridiem::from_token(token) {
                meridiem = Some(marker);
                continue;
            }
        }
        match parse_zone(token) {
            Some(zone) if offset.is_none() => offset = Some(zone),
            _ => return Err(invalid()),
        }
    }

    let time = parse_clock(clock, meridiem).ok_or_else(invalid)?;
    let local = date.and_time(time);

    match offset {
        Some(zone) => zone
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.naive_utc())
            .ok_or_else(invalid),
        None => Ok(local),
    }
}

fn parse_iso(text: &str) -> Option<NaiveDateTime> {
    if !text.contains('T') {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    ISO_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

fn parse_date(token: &str) -> Option<NaiveDate> {
    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(token, fmt)
            .ok()
            // `%Y` happily reads "23" as year 23; leave short years to `%y`.
            .filter(|date| *fmt == "%m/%d/%y" || date.year() >= 1000)
    })
}

/// Splits a time token into its clock text and a marker glued to it (`9:00PM`).
fn split_clock(token: &str) -> Option<(&str, Option<Meridiem>)> {
    match token.find(|c: char| c.is_ascii_alphabetic()) {
        Some(idx) => {
            let marker = Meridiem::from_token(&token[idx..])?;
            Some((&token[..idx], Some(marker)))
        }
        None => Some((token, None)),
    }
}

fn parse_clock(clock: &str, meridiem: Option<Meridiem>) -> Option<NaiveTime> {
    let mut parts = clock.split(':');
    let hour = parse_component(parts.next()?, 1..=2)?;
    let minute = parse_component(parts.next()?, 2..=2)?;
    let second = match parts.next() {
        Some(part) => parse_component(part, 2..=2)?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }

    let hour = match meridiem {
        Some(marker) => to_24_hour(hour, marker)?,
        None if (1..=12).contains(&hour) => to_24_hour(hour, Meridiem::Am)?,
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, second)
}

fn parse_component(text: &str, digits: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !digits.contains(&text.len()) || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn to_24_hour(hour: u32, meridiem: Meridiem) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    Some(match meridiem {
        Meridiem::Am => hour % 12,
        Meridiem::Pm => hour % 12 + 12,
    })
}

/// Reads `UTC`, `GMT`, `Z` or a numeric offset such as `+05:30` / `-0800`.
fn parse_zone(token: &str) -> Option<FixedOffset> {
    if matches!(token.to_ascii_uppercase().as_str(), "UTC" | "GMT" | "Z") {
        return FixedOffset::east_opt(0);
    }

    let sign = match token.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let digits: String = token[1..].chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
