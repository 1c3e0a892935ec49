use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{self as certifications, ActiveModel, Column, Entity};
use crate::modules::certification::application::ports::CertificationRepository;
use crate::modules::certification::domain::Certification;
use crate::shared::error::{from_json, to_json, RepositoryError};

#[derive(Clone)]
pub struct CertificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificationRepository for CertificationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Certification>, RepositoryError> {
        Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .into_iter()
            .map(model_to_certification)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Certification>, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(model_to_certification)
            .transpose()
    }

    async fn insert(&self, cert: Certification) -> Result<Certification, RepositoryError> {
        let model = to_active_model(&cert)?
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;
        model_to_certification(model)
    }

    async fn update(&self, cert: Certification) -> Result<Certification, RepositoryError> {
        let mut active = to_active_model(&cert)?;
        active.created_at = NotSet;

        let model = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepositoryError::NotFound,
            other => RepositoryError::from_db(other),
        })?;
        model_to_certification(model)
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
}

fn to_active_model(c: &Certification) -> Result<ActiveModel, RepositoryError> {
    Ok(ActiveModel {
        id: Set(c.id),
        title: Set(c.title.clone()),
        issuer: Set(c.issuer.clone()),
        date: Set(c.date),
        credential_id: Set(c.credential_id.clone()),
        credential_url: Set(c.credential_url.clone()),
        image: Set(c.image.as_ref().map(to_json).transpose()?),
        sort_order: Set(c.order),
        created_at: Set(c.created_at.fixed_offset()),
        updated_at: Set(c.updated_at.fixed_offset()),
    })
}

fn model_to_certification(model: certifications::Model) -> Result<Certification, RepositoryError> {
    Ok(Certification {
        id: model.id,
        title: model.title,
        issuer: model.issuer,
        date: model.date,
        credential_id: model.credential_id,
        credential_url: model.credential_url,
        image: model.image.map(from_json).transpose()?,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn model(title: &str, date: NaiveDate) -> certifications::Model {
        let now = Utc::now().fixed_offset();
        certifications::Model {
            id: Uuid::new_v4(),
            title: title.into(),
            issuer: "CNCF".into(),
            date,
            credential_id: None,
            credential_url: None,
            image: Some(json!({ "url": "https://cdn/c.png", "publicId": "certs/c" })),
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_maps_rows_in_returned_order() {
        let newer = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let older = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("CKS", newer), model("CKA", older)]])
            .into_connection();
        let repo = CertificationRepositoryPostgres::new(Arc::new(db));

        let certs = repo.list().await.unwrap();

        assert_eq!(certs[0].date, newer);
        assert_eq!(certs[1].title, "CKA");
        assert_eq!(certs[0].image.as_ref().unwrap().public_id, "certs/c");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = CertificationRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.delete(Uuid::new_v4()).await,
            Err(RepositoryError::NotFound)
        );
    }
}
