use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::modules::service_offering::application::ports::ServiceRepository;
use crate::modules::service_offering::domain::{
    ServiceFilter, ServiceInput, ServiceOffering, ServicePatch,
};
use crate::shared::error::ContentError;
use crate::shared::reorder::{apply_reorder, ReorderItem};

const LABEL: &str = "Service";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceOfferingUseCase: Send + Sync {
    async fn list(&self, filter: ServiceFilter) -> Result<Vec<ServiceOffering>, ContentError>;
    /// Active services flagged for the site footer.
    async fn footer(&self) -> Result<Vec<ServiceOffering>, ContentError>;
    async fn get(&self, id: Uuid) -> Result<ServiceOffering, ContentError>;
    async fn create(&self, input: ServiceInput) -> Result<ServiceOffering, ContentError>;
    async fn update(&self, id: Uuid, patch: ServicePatch)
        -> Result<ServiceOffering, ContentError>;
    async fn delete(&self, id: Uuid) -> Result<(), ContentError>;
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<Vec<ServiceOffering>, ContentError>;
}

pub struct ServiceOfferingService {
    repo: Arc<dyn ServiceRepository>,
}

impl ServiceOfferingService {
    pub fn new(repo: Arc<dyn ServiceRepository>) -> Self {
        Self { repo }
    }
}

fn lift(e: crate::shared::error::RepositoryError) -> ContentError {
    ContentError::from_repository(e, LABEL)
}

#[async_trait]
impl ServiceOfferingUseCase for ServiceOfferingService {
    async fn list(&self, filter: ServiceFilter) -> Result<Vec<ServiceOffering>, ContentError> {
        self.repo.list(filter).await.map_err(lift)
    }

    async fn footer(&self) -> Result<Vec<ServiceOffering>, ContentError> {
        self.repo.list(ServiceFilter::footer()).await.map_err(lift)
    }

    async fn get(&self, id: Uuid) -> Result<ServiceOffering, ContentError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(lift)?
            .ok_or_else(|| ContentError::not_found(LABEL))
    }

    async fn create(&self, input: ServiceInput) -> Result<ServiceOffering, ContentError> {
        let service = input.into_service(Utc::now())?;
        self.repo.insert(service).await.map_err(lift)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ServicePatch,
    ) -> Result<ServiceOffering, ContentError> {
        let mut service = self.get(id).await?;
        patch.apply(&mut service)?;
        service.updated_at = Utc::now();

        self.repo.update(service).await.map_err(lift)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentError> {
        self.repo.delete(id).await.map_err(lift)
    }

    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<Vec<ServiceOffering>, ContentError> {
        let count = items.len();
        apply_reorder(items, |item| self.repo.set_order(item.id, item.order))
            .await
            .map_err(lift)?;

        info!(count, "Services reordered");
        self.list(ServiceFilter::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::service_offering::application::ports::service_repository::MockServiceRepository;
    use crate::modules::service_offering::domain::{Package, PackageName};
    use crate::shared::error::RepositoryError;

    fn stored() -> ServiceOffering {
        ServiceInput {
            title: "Mentoring".into(),
            ..ServiceInput::default()
        }
        .into_service(Utc::now())
        .unwrap()
    }

    fn basic() -> Package {
        Package {
            name: PackageName::Basic,
            description: String::new(),
            price: "$50".into(),
            delivery_time: "1 day".into(),
            revisions: "1".into(),
            features: vec![],
        }
    }

    #[tokio::test]
    async fn footer_uses_footer_filter() {
        let mut repo = MockServiceRepository::new();
        repo.expect_list()
            .withf(|f: &ServiceFilter| f.active == Some(true) && f.in_footer)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ServiceOfferingService::new(Arc::new(repo));
        assert!(service.footer().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_with_duplicate_packages_never_reaches_repo() {
        let current = stored();
        let id = current.id;

        let mut repo = MockServiceRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        repo.expect_update().times(0);

        let service = ServiceOfferingService::new(Arc::new(repo));
        let err = service
            .update(
                id,
                ServicePatch {
                    has_packages: Some(true),
                    packages: Some(vec![basic(), basic()]),
                    ..ServicePatch::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_of_unknown_service_is_not_found() {
        let mut repo = MockServiceRepository::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let service = ServiceOfferingService::new(Arc::new(repo));
        assert_eq!(
            service.delete(Uuid::new_v4()).await.unwrap_err(),
            ContentError::NotFound("Service not found".into())
        );
    }
}
