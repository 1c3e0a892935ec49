use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::domain::{Project, ProjectFilter};
use crate::shared::error::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Sorted by `order`, then newest first.
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, RepositoryError>;
    async fn insert(&self, project: Project) -> Result<Project, RepositoryError>;
    async fn update(&self, project: Project) -> Result<Project, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
