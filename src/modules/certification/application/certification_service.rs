use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::certification::application::ports::CertificationRepository;
use crate::modules::certification::domain::{
    Certification, CertificationInput, CertificationPatch,
};
use crate::modules::media::application::services::MediaJanitor;
use crate::shared::error::{ContentError, RepositoryError};

const LABEL: &str = "Certification";

fn lift(e: RepositoryError) -> ContentError {
    ContentError::from_repository(e, LABEL)
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificationUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<Certification>, ContentError>;
    async fn get(&self, id: Uuid) -> Result<Certification, ContentError>;
    async fn create(&self, input: CertificationInput) -> Result<Certification, ContentError>;
    async fn update(
        &self,
        id: Uuid,
        patch: CertificationPatch,
    ) -> Result<Certification, ContentError>;
    async fn delete(&self, id: Uuid) -> Result<(), ContentError>;
}

pub struct CertificationService {
    repo: Arc<dyn CertificationRepository>,
    janitor: MediaJanitor,
}

impl CertificationService {
    pub fn new(repo: Arc<dyn CertificationRepository>, janitor: MediaJanitor) -> Self {
        Self { repo, janitor }
    }
}

#[async_trait]
impl CertificationUseCase for CertificationService {
    async fn list(&self) -> Result<Vec<Certification>, ContentError> {
        self.repo.list().await.map_err(lift)
    }

    async fn get(&self, id: Uuid) -> Result<Certification, ContentError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(lift)?
            .ok_or_else(|| ContentError::not_found(LABEL))
    }

    async fn create(&self, input: CertificationInput) -> Result<Certification, ContentError> {
        let cert = input.into_certification(Utc::now())?;
        self.repo.insert(cert).await.map_err(lift)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: CertificationPatch,
    ) -> Result<Certification, ContentError> {
        let previous = self.get(id).await?;

        let mut next = previous.clone();
        patch.apply(&mut next)?;
        next.updated_at = Utc::now();

        let saved = self.repo.update(next).await.map_err(lift)?;
        self.janitor
            .discard_replaced(previous.image.as_ref(), saved.image.as_ref())
            .await;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentError> {
        let cert = self.get(id).await?;
        self.repo.delete(id).await.map_err(lift)?;
        self.janitor.discard_all(cert.image.iter()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::certification::application::ports::certification_repository::MockCertificationRepository;
    use crate::shared::patch::PatchField;
    use crate::tests::support::fixtures::media;
    use crate::tests::support::recording_media_host::RecordingMediaHost;
    use chrono::NaiveDate;

    fn stored() -> Certification {
        CertificationInput {
            title: "CKA".into(),
            issuer: "CNCF".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            image: Some(media("certs/cka")),
            ..CertificationInput::default()
        }
        .into_certification(Utc::now())
        .unwrap()
    }

    #[tokio::test]
    async fn replacing_image_deletes_old_one_once() {
        let current = stored();
        let id = current.id;

        let mut repo = MockCertificationRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_update().times(1).returning(Ok);

        let host = RecordingMediaHost::new();
        let service = CertificationService::new(Arc::new(repo), host.janitor());

        service
            .update(
                id,
                CertificationPatch {
                    image: PatchField::Value(media("certs/cka-2024")),
                    ..CertificationPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(host.deleted(), vec!["certs/cka"]);
    }

    #[tokio::test]
    async fn media_failure_does_not_fail_delete() {
        let current = stored();
        let id = current.id;

        let mut repo = MockCertificationRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_delete().times(1).returning(|_| Ok(()));

        let host = RecordingMediaHost::failing();
        let service = CertificationService::new(Arc::new(repo), host.janitor());

        assert!(service.delete(id).await.is_ok());
        assert_eq!(host.deleted(), vec!["certs/cka"]);
    }
}
