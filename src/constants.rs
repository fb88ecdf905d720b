//! Application-wide constants
//!
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// DISPLAY DEFAULTS
// =============================================================================

/// Number of characters kept from a rendered date string ("Mon Jan 15 2024")
pub const DATE_STRING_LENGTH: usize = 15;

/// Format used to render timestamps before truncation
pub const RENDERED_DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Default display offset from UTC, in minutes
pub const DEFAULT_DISPLAY_UTC_OFFSET_MINUTES: i32 = 0;

/// Largest accepted display offset magnitude, in minutes
pub const MAX_DISPLAY_UTC_OFFSET_MINUTES: i32 = 23 * 60 + 59;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// STORAGE
// =============================================================================

/// Field that carries the document identifier on in-memory records
pub const ID_FIELD: &str = "id";

/// Collection holding posts
pub const POSTS_COLLECTION: &str = "posts";

/// Collection holding submissions
pub const SUBMISSIONS_COLLECTION: &str = "submissions";

// =============================================================================
// GRADING LIMITS
// =============================================================================

/// Lowest self-graded score
pub const MIN_SELF_GRADED_SCORE: f64 = 0.0;

/// Highest self-graded score
pub const MAX_SELF_GRADED_SCORE: f64 = 100.0;

/// Earliest stored timestamp, 0001-01-01T00:00:00Z
pub const MIN_TIMESTAMP_SECONDS: i64 = -62_135_596_800;

/// Latest stored timestamp, 9999-12-31T23:59:59Z
pub const MAX_TIMESTAMP_SECONDS: i64 = 253_402_300_799;

/// Upper bound (exclusive) for the nanoseconds part of a timestamp
pub const NANOS_PER_SECOND: i32 = 1_000_000_000;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

pub mod languages {
    pub const CPP: &str = "cpp";
    pub const JAVA: &str = "java";
    pub const PYTHON: &str = "py";

    pub const ALL: &[&str] = &[CPP, JAVA, PYTHON];
}

// =============================================================================
// SUBMISSION TYPES
// =============================================================================

pub mod submission_types {
    pub const SELF_GRADED: &str = "Self Graded";
    pub const COMPCS_API: &str = "CompCS API";

    pub const ALL: &[&str] = &[SELF_GRADED, COMPCS_API];
}
