// src/shared/singleton/document.rs
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A content type that exists at most once, stored as one JSON document.
pub trait SingletonDocument:
    Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static
{
    /// Row key in `singleton_documents`.
    const KIND: &'static str;

    /// Name used in user-facing messages, e.g. "Journey not found".
    const LABEL: &'static str;

    /// Content written on the first read.
    fn bootstrap() -> Self;

    /// Normalization applied before every persist.
    fn before_save(&mut self) {}
}

/// A persisted singleton with its store-managed fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingletonRecord<D> {
    pub id: Uuid,
    #[serde(flatten)]
    pub document: D,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
