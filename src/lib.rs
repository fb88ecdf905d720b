//! Postboard - Classroom posts, problems and submissions
//!
//! Data model for a classroom application backed by a document database:
//! posts (announcements or assignments), the coding problems embedded in
//! them, hints, and student submissions with their grading results.
//!
//! # Layout
//!
//! - **Models**: record shapes and derived values (point totals, date strings)
//! - **Store**: converters between records and stored documents
//! - **Utils**: date rendering and field validation
//!
//! The document store client and the grading engine live elsewhere.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod store;
pub mod telemetry;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, DecodeMode};
pub use error::{ModelError, ModelResult};
pub use store::{PostConverter, SnapshotOptions, SubmissionConverter};
