// src/shared/singleton/store.rs
use async_trait::async_trait;

use super::document::{SingletonDocument, SingletonRecord};
use crate::shared::error::{ContentError, RepositoryError};

#[async_trait]
pub trait SingletonStore<D: SingletonDocument>: Send + Sync {
    /// Current document, if one has been created.
    async fn find(&self) -> Result<Option<SingletonRecord<D>>, RepositoryError>;

    /// Current document, creating it from `D::bootstrap()` when absent.
    /// Concurrent callers observe the same row.
    async fn find_or_bootstrap(&self) -> Result<SingletonRecord<D>, RepositoryError>;

    /// Persists `document` only if the stored version still equals
    /// `current.version`; otherwise fails with `Conflict`.
    async fn save(
        &self,
        current: &SingletonRecord<D>,
        document: D,
    ) -> Result<SingletonRecord<D>, RepositoryError>;
}

/// Lifts a store failure for singleton `D`.
pub fn store_error<D: SingletonDocument>(err: RepositoryError) -> ContentError {
    ContentError::from_repository(err, D::LABEL)
}

/// A successful edit: the record that was read and the one that was written.
#[derive(Debug, Clone)]
pub struct Edited<D> {
    pub previous: SingletonRecord<D>,
    pub saved: SingletonRecord<D>,
}

/// Reads the stored document, applies `edit` to a copy and saves it against
/// the version that was read. Fails with NotFound when nothing is stored.
pub async fn edit_existing<D, S, F>(store: &S, edit: F) -> Result<Edited<D>, ContentError>
where
    D: SingletonDocument,
    S: SingletonStore<D> + ?Sized,
    F: FnOnce(&mut D) -> Result<(), ContentError> + Send,
{
    let current = store
        .find()
        .await
        .map_err(store_error::<D>)?
        .ok_or_else(|| ContentError::not_found(D::LABEL))?;

    apply_and_save(store, current, edit).await
}

/// Like [`edit_existing`], bootstrapping the document first when absent.
pub async fn edit_or_bootstrap<D, S, F>(store: &S, edit: F) -> Result<Edited<D>, ContentError>
where
    D: SingletonDocument,
    S: SingletonStore<D> + ?Sized,
    F: FnOnce(&mut D) -> Result<(), ContentError> + Send,
{
    let current = store.find_or_bootstrap().await.map_err(store_error::<D>)?;
    apply_and_save(store, current, edit).await
}

async fn apply_and_save<D, S, F>(
    store: &S,
    current: SingletonRecord<D>,
    edit: F,
) -> Result<Edited<D>, ContentError>
where
    D: SingletonDocument,
    S: SingletonStore<D> + ?Sized,
    F: FnOnce(&mut D) -> Result<(), ContentError> + Send,
{
    let mut next = current.document.clone();
    edit(&mut next)?;

    let saved = store
        .save(&current, next)
        .await
        .map_err(store_error::<D>)?;

    Ok(Edited {
        previous: current,
        saved,
    })
}
