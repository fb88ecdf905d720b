//! Document store adapters
//!
//! Shapes records for the external document store and reads them back from
//! its snapshots.

pub mod converter;
pub mod snapshot;

pub use converter::{DocumentConverter, PostConverter, StoredEntity, SubmissionConverter};
pub use snapshot::{
    DocumentData, DocumentSnapshot, ServerTimestampBehavior, SnapshotOptions, StoredDocument,
};
