use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::experience::application::ports::ExperienceRepository;
use crate::modules::experience::domain::{Experience, ExperienceInput, ExperiencePatch};
use crate::modules::media::application::services::MediaJanitor;
use crate::shared::error::{ContentError, RepositoryError};

const LABEL: &str = "Experience";

fn lift(e: RepositoryError) -> ContentError {
    ContentError::from_repository(e, LABEL)
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<Experience>, ContentError>;
    async fn get(&self, id: Uuid) -> Result<Experience, ContentError>;
    async fn create(&self, input: ExperienceInput) -> Result<Experience, ContentError>;
    async fn update(&self, id: Uuid, patch: ExperiencePatch) -> Result<Experience, ContentError>;
    async fn delete(&self, id: Uuid) -> Result<(), ContentError>;
}

pub struct ExperienceService {
    repo: Arc<dyn ExperienceRepository>,
    janitor: MediaJanitor,
}

impl ExperienceService {
    pub fn new(repo: Arc<dyn ExperienceRepository>, janitor: MediaJanitor) -> Self {
        Self { repo, janitor }
    }
}

#[async_trait]
impl ExperienceUseCase for ExperienceService {
    async fn list(&self) -> Result<Vec<Experience>, ContentError> {
        self.repo.list().await.map_err(lift)
    }

    async fn get(&self, id: Uuid) -> Result<Experience, ContentError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(lift)?
            .ok_or_else(|| ContentError::not_found(LABEL))
    }

    async fn create(&self, input: ExperienceInput) -> Result<Experience, ContentError> {
        let experience = input.into_experience(Utc::now())?;
        self.repo.insert(experience).await.map_err(lift)
    }

    async fn update(&self, id: Uuid, patch: ExperiencePatch) -> Result<Experience, ContentError> {
        let previous = self.get(id).await?;

        let mut next = previous.clone();
        patch.apply(&mut next)?;
        next.updated_at = Utc::now();

        let saved = self.repo.update(next).await.map_err(lift)?;
        self.janitor
            .discard_replaced(previous.company_logo.as_ref(), saved.company_logo.as_ref())
            .await;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentError> {
        let experience = self.get(id).await?;
        self.repo.delete(id).await.map_err(lift)?;
        self.janitor.discard_all(experience.company_logo.iter()).await;
        Ok(())
    }
}
