//! Field normalization for raw attendance text.
//!
//! This module turns the date-time and hours-worked columns of an attendance
//! export into typed values.

mod datetime;
mod duration;

pub use datetime::parse_date_time;
pub use duration::parse_duration_minutes;
