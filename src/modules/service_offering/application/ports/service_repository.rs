use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::service_offering::domain::{ServiceFilter, ServiceOffering};
use crate::shared::error::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list(&self, filter: ServiceFilter) -> Result<Vec<ServiceOffering>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceOffering>, RepositoryError>;
    async fn insert(&self, service: ServiceOffering) -> Result<ServiceOffering, RepositoryError>;
    async fn update(&self, service: ServiceOffering) -> Result<ServiceOffering, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn set_order(&self, id: Uuid, order: i32) -> Result<(), RepositoryError>;
}
