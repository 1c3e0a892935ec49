use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::domain::Experience;
use crate::shared::error::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Sorted by `order`, then most recent `startDate` first.
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, RepositoryError>;
    async fn insert(&self, experience: Experience) -> Result<Experience, RepositoryError>;
    async fn update(&self, experience: Experience) -> Result<Experience, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
