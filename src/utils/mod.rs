//! Utility functions

pub mod time;
pub mod validation;

pub use time::{date_string, format_milliseconds, parse_datetime, render_datetime};
pub use validation::{validate_execution_time, validate_nanoseconds, validate_score};
