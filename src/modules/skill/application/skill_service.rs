use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::modules::media::application::services::MediaJanitor;
use crate::modules::skill::application::ports::SkillRepository;
use crate::modules::skill::domain::{Skill, SkillFilter, SkillInput, SkillPatch};
use crate::shared::error::ContentError;
use crate::shared::reorder::{apply_reorder, ReorderItem};

const LABEL: &str = "Skill";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillUseCase: Send + Sync {
    async fn list(&self, filter: SkillFilter) -> Result<Vec<Skill>, ContentError>;
    async fn get(&self, id: Uuid) -> Result<Skill, ContentError>;
    async fn create(&self, input: SkillInput) -> Result<Skill, ContentError>;
    async fn update(&self, id: Uuid, patch: SkillPatch) -> Result<Skill, ContentError>;
    async fn delete(&self, id: Uuid) -> Result<(), ContentError>;
    /// Applies every `{id, order}` pair, then returns the full sorted list.
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<Vec<Skill>, ContentError>;
}

pub struct SkillService {
    repo: Arc<dyn SkillRepository>,
    janitor: MediaJanitor,
}

impl SkillService {
    pub fn new(repo: Arc<dyn SkillRepository>, janitor: MediaJanitor) -> Self {
        Self { repo, janitor }
    }

    async fn require(&self, id: Uuid) -> Result<Skill, ContentError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))?
            .ok_or_else(|| ContentError::not_found(LABEL))
    }
}

#[async_trait]
impl SkillUseCase for SkillService {
    async fn list(&self, filter: SkillFilter) -> Result<Vec<Skill>, ContentError> {
        self.repo
            .list(filter)
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))
    }

    async fn get(&self, id: Uuid) -> Result<Skill, ContentError> {
        self.require(id).await
    }

    async fn create(&self, input: SkillInput) -> Result<Skill, ContentError> {
        let skill = input.into_skill(Utc::now())?;
        self.repo
            .insert(skill)
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))
    }

    async fn update(&self, id: Uuid, patch: SkillPatch) -> Result<Skill, ContentError> {
        let previous = self.require(id).await?;

        let mut next = previous.clone();
        patch.apply(&mut next)?;
        next.updated_at = Utc::now();

        let saved = self
            .repo
            .update(next)
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))?;

        self.janitor
            .discard_replaced(previous.logo.as_ref(), saved.logo.as_ref())
            .await;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentError> {
        let skill = self.require(id).await?;

        self.repo
            .delete(id)
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))?;

        self.janitor.discard_all(skill.logo.iter()).await;
        Ok(())
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<Vec<Skill>, ContentError> {
        let count = items.len();
        apply_reorder(items, |item| self.repo.set_order(item.id, item.order))
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))?;

        info!(count, "Skills reordered");
        self.list(SkillFilter::default()).await
    }
}
