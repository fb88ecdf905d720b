//! Document store timestamp

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{MAX_TIMESTAMP_SECONDS, MIN_TIMESTAMP_SECONDS, NANOS_PER_SECOND};
use crate::utils::validation::validate_nanoseconds;

/// Point in time as the document store keeps it: whole seconds since the
/// Unix epoch plus a non-negative nanosecond remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(alias = "_seconds")]
    pub seconds: i64,
    #[serde(alias = "_nanoseconds")]
    pub nanoseconds: i32,
}

impl Timestamp {
    pub fn new(seconds: i64, nanoseconds: i32) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    /// Convert a chrono datetime into a store timestamp
    pub fn from_date(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanoseconds: dt.timestamp_subsec_nanos() as i32,
        }
    }

    /// Convert to a chrono datetime.
    ///
    /// Out-of-range values saturate to the earliest representable instant;
    /// strict reads reject them before they get here.
    pub fn to_date(&self) -> DateTime<Utc> {
        let nanos = self.nanoseconds.clamp(0, NANOS_PER_SECOND - 1) as u32;
        DateTime::from_timestamp(self.seconds, nanos).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_date(dt)
    }
}

impl Validate for Timestamp {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_nanoseconds(self.nanoseconds) {
            errors.add("nanoseconds", e);
        }
        if !(MIN_TIMESTAMP_SECONDS..=MAX_TIMESTAMP_SECONDS).contains(&self.seconds) {
            errors.add("seconds", ValidationError::new("seconds_out_of_range"));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
