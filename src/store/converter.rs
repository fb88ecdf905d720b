//! Conversion between domain records and stored documents
//!
//! Identifiers belong to the store, not to the payload: they are stripped on
//! write and re-attached from the snapshot on read. One generic converter
//! does this for every stored entity.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{Config, DecodeMode};
use crate::constants::{ID_FIELD, POSTS_COLLECTION, SUBMISSIONS_COLLECTION};
use crate::error::{ModelError, ModelResult};
use crate::models::{Post, Submission};
use crate::store::snapshot::{DocumentData, DocumentSnapshot, SnapshotOptions};

/// A record kept as a top-level document
pub trait StoredEntity: Serialize + DeserializeOwned + Default {
    /// Name used in logs and errors
    const KIND: &'static str;
    const COLLECTION: &'static str;

    /// Field and cross-field rules checked on strict reads
    fn validate_stored(&self) -> ModelResult<()>;
}

impl StoredEntity for Post {
    const KIND: &'static str = "post";
    const COLLECTION: &'static str = POSTS_COLLECTION;

    fn validate_stored(&self) -> ModelResult<()> {
        Post::validate_stored(self)
    }
}

impl StoredEntity for Submission {
    const KIND: &'static str = "submission";
    const COLLECTION: &'static str = SUBMISSIONS_COLLECTION;

    fn validate_stored(&self) -> ModelResult<()> {
        Submission::validate_stored(self)
    }
}

/// Strips the id on write and injects it on read
#[derive(Debug)]
pub struct DocumentConverter<T> {
    mode: DecodeMode,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for DocumentConverter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DocumentConverter<T> {}

pub type PostConverter = DocumentConverter<Post>;
pub type SubmissionConverter = DocumentConverter<Submission>;

impl<T> Default for DocumentConverter<T> {
    fn default() -> Self {
        Self::new(DecodeMode::default())
    }
}

impl<T> DocumentConverter<T> {
    pub fn new(mode: DecodeMode) -> Self {
        Self {
            mode,
            _entity: PhantomData,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.decode_mode)
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }
}

impl<T: StoredEntity> DocumentConverter<T> {
    /// Build the write payload: every field except the id. Not validated.
    pub fn to_storage(&self, value: &T) -> ModelResult<DocumentData> {
        let mut data = into_object::<T>(serde_json::to_value(value)?)?;
        data.remove(ID_FIELD);
        tracing::debug!(kind = T::KIND, fields = data.len(), "Prepared document for storage");
        Ok(data)
    }

    /// Rebuild a record from a snapshot, taking the id from the snapshot
    pub fn from_storage<S>(&self, snapshot: &S, options: &SnapshotOptions) -> ModelResult<T>
    where
        S: DocumentSnapshot + ?Sized,
    {
        let id = snapshot.id();
        let data = snapshot
            .data(options)
            .ok_or_else(|| ModelError::MissingDocument(format!("{}/{}", T::COLLECTION, id)))?;

        let entity = match self.mode {
            DecodeMode::Strict => {
                let entity: T = serde_json::from_value(inject_id(data, id))?;
                entity.validate_stored()?;
                entity
            }
            DecodeMode::Permissive => {
                let entity: T = serde_json::from_value(inject_id(with_defaults::<T>(data)?, id))?;
                if let Err(e) = entity.validate_stored() {
                    tracing::warn!(kind = T::KIND, id, error = %e, "Accepting invalid stored document");
                }
                entity
            }
        };

        tracing::debug!(kind = T::KIND, id, mode = ?self.mode, "Read document from storage");
        Ok(entity)
    }
}

fn into_object<T: StoredEntity>(value: Value) -> ModelResult<DocumentData> {
    match value {
        Value::Object(data) => Ok(data),
        _ => Err(ModelError::NotAnObject(T::KIND)),
    }
}

/// The snapshot id wins over any stored `id` field
fn inject_id(mut data: DocumentData, id: &str) -> Value {
    data.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    Value::Object(data)
}

/// Overlay stored fields on the entity's default document
fn with_defaults<T: StoredEntity>(data: DocumentData) -> ModelResult<DocumentData> {
    let mut base = into_object::<T>(serde_json::to_value(T::default())?)?;
    base.extend(data);
    Ok(base)
}
