//! Read side of the document store
//!
//! The store client itself lives outside this crate. It hands documents over
//! through [`DocumentSnapshot`], and receives plain [`DocumentData`] maps for
//! writes.

use serde_json::{Map, Value};

use crate::error::{ModelError, ModelResult};

/// Field map of a stored document
pub type DocumentData = Map<String, Value>;

/// How server timestamps that have not been resolved yet are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerTimestampBehavior {
    /// Use a local estimate of the pending timestamp
    Estimate,
    /// Use the previously stored value
    Previous,
    /// Report the field as null
    #[default]
    None,
}

/// Options passed through to [`DocumentSnapshot::data`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotOptions {
    pub server_timestamps: ServerTimestampBehavior,
}

/// A document read from the store
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSnapshot {
    /// Identifier of the document within its collection
    fn id(&self) -> &str;

    /// Field data, or `None` when the document does not exist
    fn data(&self, options: &SnapshotOptions) -> Option<DocumentData>;
}

/// Owned snapshot, e.g. from an export or a REST response
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Option<DocumentData>,
}

impl StoredDocument {
    pub fn new(id: impl Into<String>, data: DocumentData) -> Self {
        Self {
            id: id.into(),
            data: Some(data),
        }
    }

    /// A snapshot of a document that does not exist
    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: None,
        }
    }

    /// Parse the document's fields from JSON text
    pub fn from_json(id: impl Into<String>, json: &str) -> ModelResult<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(data) => Ok(Self::new(id, data)),
            _ => Err(ModelError::NotAnObject("document JSON")),
        }
    }
}

impl DocumentSnapshot for StoredDocument {
    fn id(&self) -> &str {
        &self.id
    }

    fn data(&self, _options: &SnapshotOptions) -> Option<DocumentData> {
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let doc = StoredDocument::from_json("abc", r#"{"name": "Week 1"}"#).unwrap();
        assert_eq!(doc.id(), "abc");
        let data = doc.data(&SnapshotOptions::default()).unwrap();
        assert_eq!(data["name"], "Week 1");
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(matches!(
            StoredDocument::from_json("abc", "[1, 2]"),
            Err(ModelError::NotAnObject(_))
        ));
        assert!(matches!(
            StoredDocument::from_json("abc", "{"),
            Err(ModelError::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_document() {
        let doc = StoredDocument::missing("gone");
        assert_eq!(doc.data(&SnapshotOptions::default()), None);
    }
}
