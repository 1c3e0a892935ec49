use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::domain::{Skill, SkillFilter};
use crate::shared::error::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list(&self, filter: SkillFilter) -> Result<Vec<Skill>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Skill>, RepositoryError>;
    async fn insert(&self, skill: Skill) -> Result<Skill, RepositoryError>;
    async fn update(&self, skill: Skill) -> Result<Skill, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn set_order(&self, id: Uuid, order: i32) -> Result<(), RepositoryError>;
}
