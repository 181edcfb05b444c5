//! Attendance Audit Engine
//!
//! This crate analyzes employee attendance logs and flags three
//! labor-compliance conditions per employee: seven consecutive working days,
//! a short rest between consecutive shifts, and a single shift longer than
//! fourteen hours.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod parsing;
pub mod report;
pub mod rules;
