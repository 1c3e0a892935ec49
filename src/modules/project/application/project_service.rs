use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::modules::media::application::services::MediaJanitor;
use crate::modules::project::application::ports::ProjectRepository;
use crate::modules::project::domain::{Project, ProjectFilter, ProjectInput, ProjectPatch};
use crate::shared::error::ContentError;

const LABEL: &str = "Project";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectUseCase: Send + Sync {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, ContentError>;
    async fn get(&self, id: Uuid) -> Result<Project, ContentError>;
    async fn create(&self, input: ProjectInput) -> Result<Project, ContentError>;
    async fn update(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, ContentError>;
    async fn delete(&self, id: Uuid) -> Result<(), ContentError>;
}

pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
    janitor: MediaJanitor,
}

impl ProjectService {
    pub fn new(repo: Arc<dyn ProjectRepository>, janitor: MediaJanitor) -> Self {
        Self { repo, janitor }
    }

    async fn require(&self, id: Uuid) -> Result<Project, ContentError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))?
            .ok_or_else(|| ContentError::not_found(LABEL))
    }
}

#[async_trait]
impl ProjectUseCase for ProjectService {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, ContentError> {
        self.repo
            .list(filter)
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))
    }

    async fn get(&self, id: Uuid) -> Result<Project, ContentError> {
        self.require(id).await
    }

    async fn create(&self, input: ProjectInput) -> Result<Project, ContentError> {
        let project = input.into_project(Utc::now())?;
        let saved = self
            .repo
            .insert(project)
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))?;

        info!(project_id = %saved.id, "Project created");
        Ok(saved)
    }

    async fn update(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, ContentError> {
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
            .discard_replaced(previous.thumbnail.as_ref(), saved.thumbnail.as_ref())
            .await;
        self.janitor
            .discard_dropped(&previous.images, &saved.images)
            .await;

        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentError> {
        let project = self.require(id).await?;

        self.repo
            .delete(id)
            .await
            .map_err(|e| ContentError::from_repository(e, LABEL))?;

        self.janitor.discard_all(&project.media()).await;
        info!(project_id = %id, "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::project_repository::MockProjectRepository;
    use crate::shared::error::RepositoryError;
    use crate::shared::patch::PatchField;
    use crate::tests::support::fixtures::media;
    use crate::tests::support::recording_media_host::RecordingMediaHost;

    fn stored() -> Project {
        let mut project = ProjectInput {
            title: "CMS".into(),
            short_description: "Headless".into(),
            ..ProjectInput::default()
        }
        .into_project(Utc::now())
        .unwrap();
        project.thumbnail = Some(media("projects/thumb"));
        project.images = vec![media("projects/a"), media("projects/b")];
        project
    }

    #[tokio::test]
    async fn create_rejects_blank_title_without_touching_repo() {
        let mut repo = MockProjectRepository::new();
        repo.expect_insert().times(0);
        let host = RecordingMediaHost::new();
        let service = ProjectService::new(Arc::new(repo), host.janitor());

        let err = service.create(ProjectInput::default()).await.unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[tokio::test]
    async fn update_discards_replaced_thumbnail_and_dropped_images() {
        let current = stored();
        let id = current.id;

        let mut repo = MockProjectRepository::new();
        let found = current.clone();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        repo.expect_update()
            .withf(|p: &Project| p.title == "CMS v2")
            .times(1)
            .returning(Ok);

        let host = RecordingMediaHost::new();
        let service = ProjectService::new(Arc::new(repo), host.janitor());

        let saved = service
            .update(
                id,
                ProjectPatch {
                    title: Some("CMS v2".into()),
                    thumbnail: PatchField::Value(media("projects/new-thumb")),
                    images: Some(vec![media("projects/a")]),
                    ..ProjectPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(saved.images.len(), 1);
        assert_eq!(host.deleted(), vec!["projects/b", "projects/thumb"]);
    }

    #[tokio::test]
    async fn failed_update_deletes_nothing() {
        let current = stored();
        let id = current.id;

        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_update()
            .returning(|_| Err(RepositoryError::DatabaseError("down".into())));

        let host = RecordingMediaHost::new();
        let service = ProjectService::new(Arc::new(repo), host.janitor());

        let result = service
            .update(
                id,
                ProjectPatch {
                    thumbnail: PatchField::Null,
                    ..ProjectPatch::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ContentError::Repository(_))));
        assert!(host.deleted().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_row_then_all_media() {
        let current = stored();
        let id = current.id;

        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_delete()
            .withf(move |deleted: &Uuid| *deleted == id)
            .times(1)
            .returning(|_| Ok(()));

        let host = RecordingMediaHost::new();
        let service = ProjectService::new(Arc::new(repo), host.janitor());

        service.delete(id).await.unwrap();
        assert_eq!(
            host.deleted(),
            vec!["projects/a", "projects/b", "projects/thumb"]
        );
    }

    #[tokio::test]
    async fn get_missing_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let host = RecordingMediaHost::new();
        let service = ProjectService::new(Arc::new(repo), host.janitor());

        assert_eq!(
            service.get(Uuid::new_v4()).await.unwrap_err(),
            ContentError::NotFound("Project not found".into())
        );
    }
}
