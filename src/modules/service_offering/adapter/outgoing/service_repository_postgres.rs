use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{self as services, ActiveModel, Column, Entity};
use crate::modules::service_offering::application::ports::ServiceRepository;
use crate::modules::service_offering::domain::{ServiceFilter, ServiceOffering};
use crate::shared::error::{from_json, to_json, RepositoryError};

#[derive(Clone)]
pub struct ServiceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceRepositoryPostgres {
    async fn list(&self, filter: ServiceFilter) -> Result<Vec<ServiceOffering>, RepositoryError> {
        let mut query = Entity::find();

        if filter.active == Some(true) {
            query = query.filter(Column::IsActive.eq(true));
        }
        if filter.in_footer {
            query = query.filter(Column::ShowInFooter.eq(true));
        }

        query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .into_iter()
            .map(model_to_service)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceOffering>, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(model_to_service)
            .transpose()
    }

    async fn insert(&self, service: ServiceOffering) -> Result<ServiceOffering, RepositoryError> {
        let model = service_to_active_model(&service)?
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;
        model_to_service(model)
    }

    async fn update(&self, service: ServiceOffering) -> Result<ServiceOffering, RepositoryError> {
        let mut active = service_to_active_model(&service)?;
        active.created_at = NotSet;

        let model = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepositoryError::NotFound,
            other => RepositoryError::from_db(other),
        })?;
        model_to_service(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_order(&self, id: Uuid, order: i32) -> Result<(), RepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::SortOrder, Expr::value(order))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

fn service_to_active_model(s: &ServiceOffering) -> Result<ActiveModel, RepositoryError> {
    Ok(ActiveModel {
        id: Set(s.id),
        title: Set(s.title.clone()),
        description: Set(s.description.clone()),
        icon: Set(s.icon.clone()),
        features: Set(to_json(&s.features)?),
        price: Set(s.price.clone()),
        has_packages: Set(s.has_packages),
        packages: Set(to_json(&s.packages)?),
        is_active: Set(s.is_active),
        show_in_footer: Set(s.show_in_footer),
        sort_order: Set(s.order),
        created_at: Set(s.created_at.fixed_offset()),
        updated_at: Set(s.updated_at.fixed_offset()),
    })
}

fn model_to_service(model: services::Model) -> Result<ServiceOffering, RepositoryError> {
    Ok(ServiceOffering {
        id: model.id,
        title: model.title,
        description: model.description,
        icon: model.icon,
        features: from_json(model.features)?,
        price: model.price,
        has_packages: model.has_packages,
        packages: from_json(model.packages)?,
        is_active: model.is_active,
        show_in_footer: model.show_in_footer,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::service_offering::domain::PackageName;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    fn model() -> services::Model {
        let now = Utc::now().fixed_offset();
        services::Model {
            id: Uuid::new_v4(),
            title: "Web apps".into(),
            description: "Full stack".into(),
            icon: "FaCode".into(),
            features: json!([]),
            price: String::new(),
            has_packages: true,
            packages: json!([{
                "name": "Premium",
                "description": "Everything",
                "price": "$2000",
                "deliveryTime": "30 days",
                "revisions": "Unlimited",
                "features": ["SEO"]
            }]),
            is_active: true,
            show_in_footer: true,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn footer_filter_adds_both_conditions() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![model()]])
                .into_connection(),
        );
        let repo = ServiceRepositoryPostgres::new(Arc::clone(&db));

        let services = repo.list(ServiceFilter::footer()).await.unwrap();
        assert_eq!(services[0].packages[0].name, PackageName::Premium);
        assert_eq!(services[0].packages[0].delivery_time, "30 days");

        drop(repo);
        let log = Arc::try_unwrap(db)
            .ok()
            .expect("single owner")
            .into_transaction_log();
        let sql = format!("{:?}", log);
        assert!(sql.contains("is_active"));
        assert!(sql.contains("show_in_footer"));
        assert!(sql.contains("$2"));
    }

    #[tokio::test]
    async fn corrupt_packages_column_is_serialization_error() {
        let mut bad = model();
        bad.packages = json!([{ "name": "Gold" }]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![bad]])
            .into_connection();
        let repo = ServiceRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.find_by_id(Uuid::new_v4()).await,
            Err(RepositoryError::SerializationError(_))
        ));
    }
}
