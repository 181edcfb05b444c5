//! Compliance rule detectors.
//!
//! Each detector reads the shared record sequence and evaluates one employee,
//! returning an immutable [`RuleFinding`](crate::models::RuleFinding) when the
//! condition holds. The detectors never modify or reorder the sequence; the
//! analysis coordinator merges their findings into per-rule results.

mod consecutive_days;
mod long_shift;
mod shift_gap;

use rust_decimal::Decimal;

pub use consecutive_days::{
    DEFAULT_CONSECUTIVE_DAYS, detect_consecutive_days, has_consecutive_row_window,
    has_seven_consecutive_days,
};
pub use long_shift::{DEFAULT_MAX_SHIFT_MINUTES, detect_long_shift, has_long_shift_violation};
pub use shift_gap::{detect_shift_gap, has_shift_gap_violation};

/// Converts minutes to hours for display, rounded to two decimal places.
pub(crate) fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::new(minutes, 0) / Decimal::new(60, 0))
        .round_dp(2)
        .normalize()
}
