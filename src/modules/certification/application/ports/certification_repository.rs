use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::domain::Certification;
use crate::shared::error::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificationRepository: Send + Sync {
    /// Sorted by `order`, then newest `date` first.
    async fn list(&self) -> Result<Vec<Certification>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Certification>, RepositoryError>;
    async fn insert(&self, cert: Certification) -> Result<Certification, RepositoryError>;
    async fn update(&self, cert: Certification) -> Result<Certification, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
