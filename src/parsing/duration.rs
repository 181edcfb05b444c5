//! Hours-worked parsing.

use crate::config::DurationMode;
use crate::error::{AuditError, AuditResult};

/// Parses an `H:MM` hours-worked field into whole minutes.
///
/// With [`DurationMode::WholeHours`] only the hour component counts, so
/// `"14:45"` is 840 minutes. With [`DurationMode::HoursAndMinutes`] the
/// minute component is added as well. A bare hour count (`"9"`) is accepted
/// in both modes.
///
/// # Errors
///
/// Returns [`AuditError::InvalidDuration`] when the hour component is empty,
/// negative or not an integer, or (in `HoursAndMinutes` mode) when the
/// minute component is not in `0..=59`.
///
/// # Examples
///
/// ```
/// use attendance_audit::config::DurationMode;
/// use attendance_audit::parsing::parse_duration_minutes;
///
/// assert_eq!(parse_duration_minutes("14:45", DurationMode::WholeHours).unwrap(), 840);
/// assert_eq!(parse_duration_minutes("14:45", DurationMode::HoursAndMinutes).unwrap(), 885);
/// ```
pub fn parse_duration_minutes(raw: &str, mode: DurationMode) -> AuditResult<i64> {
    let invalid = || AuditError::InvalidDuration {
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    let (hours_text, minutes_text) = match trimmed.split_once(':') {
        Some((hours, minutes)) => (hours.trim(), Some(minutes.trim())),
        None => (trimmed, None),
    };

    if hours_text.is_empty() || !hours_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: i64 = hours_text.parse().map_err(|_| invalid())?;
    let whole = hours.checked_mul(60).ok_or_else(invalid)?;

    match mode {
        DurationMode::WholeHours => Ok(whole),
        DurationMode::HoursAndMinutes => {
            let minutes = match minutes_text {
                Some(text) => parse_minutes(text).ok_or_else(invalid)?,
                None => 0,
            };
            whole.checked_add(minutes).ok_or_else(invalid)
        }
    }
}

fn parse_minutes(text: &str) -> Option<i64> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let minutes: i64 = text.parse().ok()?;
    (minutes < 60).then_some(minutes)
}
