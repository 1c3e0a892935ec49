use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::domain::{Blog, BlogFilter, PageRequest};
use crate::shared::error::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Newest first; returns the page and the total number of matches.
    async fn list(
        &self,
        filter: BlogFilter,
        page: PageRequest,
    ) -> Result<(Vec<Blog>, u64), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepositoryError>;
    /// Finds a published post and bumps its view counter in one statement.
    async fn view_published(&self, slug: &str) -> Result<Option<Blog>, RepositoryError>;
    /// Whether any post other than `exclude` already uses `slug`.
    async fn slug_exists(
        &self,
        slug: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError>;
    async fn insert(&self, blog: Blog) -> Result<Blog, RepositoryError>;
    async fn update(&self, blog: Blog) -> Result<Blog, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
