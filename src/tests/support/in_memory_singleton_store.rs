use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::shared::error::RepositoryError;
use crate::shared::singleton::{SingletonDocument, SingletonRecord, SingletonStore};

/// Single-row store with the same versioning rules as the Postgres adapter.
pub struct InMemorySingletonStore<D> {
    row: Mutex<Option<SingletonRecord<D>>>,
    bootstraps: AtomicUsize,
}

impl<D: SingletonDocument> InMemorySingletonStore<D> {
    pub fn empty() -> Self {
        Self {
            row: Mutex::new(None),
            bootstraps: AtomicUsize::new(0),
        }
    }

    /// Seeds a stored document as-is, without running `before_save`.
    pub fn with(document: D) -> Self {
        let now = Utc::now();
        Self {
            row: Mutex::new(Some(SingletonRecord {
                id: Uuid::new_v4(),
                document,
                version: 1,
                created_at: now,
                updated_at: now,
            })),
            bootstraps: AtomicUsize::new(0),
        }
    }

    pub fn current(&self) -> Option<SingletonRecord<D>> {
        self.row.lock().unwrap().clone()
    }

    /// Number of default documents this store has inserted.
    pub fn bootstrap_count(&self) -> usize {
        self.bootstraps.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<D: SingletonDocument> SingletonStore<D> for InMemorySingletonStore<D> {
    async fn find(&self) -> Result<Option<SingletonRecord<D>>, RepositoryError> {
        Ok(self.current())
    }

    async fn find_or_bootstrap(&self) -> Result<SingletonRecord<D>, RepositoryError> {
        let mut row = self.row.lock().unwrap();
        if let Some(existing) = row.as_ref() {
            return Ok(existing.clone());
        }

        let mut document = D::bootstrap();
        document.before_save();
        let now = Utc::now();
        let record = SingletonRecord {
            id: Uuid::new_v4(),
            document,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        *row = Some(record.clone());
        self.bootstraps.fetch_add(1, Ordering::SeqCst);
        Ok(record)
    }

    async fn save(
        &self,
        current: &SingletonRecord<D>,
        document: D,
    ) -> Result<SingletonRecord<D>, RepositoryError> {
        let mut row = self.row.lock().unwrap();
        let stored = row.as_mut().ok_or(RepositoryError::NotFound)?;

        if stored.version != current.version {
            return Err(RepositoryError::Conflict(format!(
                "{} was modified by another request",
                D::LABEL
            )));
        }

        let mut document = document;
        document.before_save();
        stored.document = document;
        stored.version += 1;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }
}
