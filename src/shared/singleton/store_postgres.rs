// src/shared/singleton/store_postgres.rs
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::document::{SingletonDocument, SingletonRecord};
use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use super::store::SingletonStore;
use crate::shared::error::{from_json, to_json, RepositoryError};

pub struct SingletonStorePostgres<D> {
    db: Arc<DatabaseConnection>,
    _document: PhantomData<fn() -> D>,
}

impl<D> SingletonStorePostgres<D> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _document: PhantomData,
        }
    }
}

impl<D> Clone for SingletonStorePostgres<D> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

fn to_record<D: SingletonDocument>(model: Model) -> Result<SingletonRecord<D>, RepositoryError> {
    Ok(SingletonRecord {
        id: model.id,
        document: from_json(model.document)?,
        version: model.version,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

#[async_trait]
impl<D: SingletonDocument> SingletonStore<D> for SingletonStorePostgres<D> {
    async fn find(&self) -> Result<Option<SingletonRecord<D>>, RepositoryError> {
        Entity::find_by_id(D::KIND.to_string())
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(to_record)
            .transpose()
    }

    async fn find_or_bootstrap(&self) -> Result<SingletonRecord<D>, RepositoryError> {
        if let Some(existing) = self.find().await? {
            return Ok(existing);
        }

        let mut document = D::bootstrap();
        document.before_save();

        let now = Utc::now().fixed_offset();
        let seed = ActiveModel {
            kind: Set(D::KIND.to_string()),
            id: Set(Uuid::new_v4()),
            document: Set(to_json(&document)?),
            version: Set(1),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // A concurrent first read may win the insert; either way one row exists afterwards.
        Entity::insert(seed)
            .on_conflict(OnConflict::column(Column::Kind).do_nothing().to_owned())
            .exec_without_returning(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        tracing::info!("Bootstrapped singleton document '{}'", D::KIND);

        self.find().await?.ok_or(RepositoryError::NotFound)
    }

    async fn save(
        &self,
        current: &SingletonRecord<D>,
        document: D,
    ) -> Result<SingletonRecord<D>, RepositoryError> {
        let mut document = document;
        document.before_save();

        let changes = ActiveModel {
            document: Set(to_json(&document)?),
            version: Set(current.version + 1),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(changes)
            .filter(Column::Kind.eq(D::KIND))
            .filter(Column::Version.eq(current.version))
            .exec_with_returning(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        match updated.into_iter().next() {
            Some(model) => to_record(model),
            None => Err(RepositoryError::Conflict(format!(
                "{} was modified by another request",
                D::LABEL
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Banner {
        title: String,
        #[serde(default)]
        normalized: bool,
    }

    impl SingletonDocument for Banner {
        const KIND: &'static str = "banner";
        const LABEL: &'static str = "Banner";

        fn bootstrap() -> Self {
            Banner {
                title: "Hello".to_string(),
                normalized: false,
            }
        }

        fn before_save(&mut self) {
            self.normalized = true;
        }
    }

    fn model(title: &str, version: i64) -> Model {
        let now = Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap());
        Model {
            kind: "banner".to_string(),
            id: Uuid::new_v4(),
            document: json!({ "title": title, "normalized": true }),
            version,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_returns_none_when_no_row_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let store = SingletonStorePostgres::<Banner>::new(Arc::new(db));

        assert!(store.find().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_or_bootstrap_returns_existing_row_without_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Existing", 4)]])
            .into_connection();

        let store = SingletonStorePostgres::<Banner>::new(Arc::new(db));
        let record = store.find_or_bootstrap().await.unwrap();

        assert_eq!(record.document.title, "Existing");
        assert_eq!(record.version, 4);
    }

    #[tokio::test]
    async fn find_or_bootstrap_uses_conditional_insert() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<Model>::new()])
                .append_exec_results(vec![MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .append_query_results(vec![vec![model("Hello", 1)]])
                .into_connection(),
        );

        let store = SingletonStorePostgres::<Banner>::new(Arc::clone(&db));
        let record = store.find_or_bootstrap().await.unwrap();
        assert_eq!(record.document.title, "Hello");
        assert_eq!(record.version, 1);

        drop(store);
        let log = Arc::try_unwrap(db)
            .ok()
            .expect("single owner")
            .into_transaction_log();
        let statements = format!("{:?}", log);
        assert!(statements.contains("ON CONFLICT"));
        assert!(statements.contains("DO NOTHING"));
    }

    #[tokio::test]
    async fn save_bumps_version() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Renamed", 3)]])
            .into_connection();

        let store = SingletonStorePostgres::<Banner>::new(Arc::new(db));
        let current = to_record::<Banner>(model("Old", 2)).unwrap();

        let saved = store
            .save(
                &current,
                Banner {
                    title: "Renamed".to_string(),
                    normalized: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(saved.version, 3);
        assert_eq!(saved.document.title, "Renamed");
    }

    #[tokio::test]
    async fn save_with_stale_version_is_a_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let store = SingletonStorePostgres::<Banner>::new(Arc::new(db));
        let stale = to_record::<Banner>(model("Old", 2)).unwrap();

        let err = store.save(&stale, Banner::bootstrap()).await.unwrap_err();

        assert_eq!(
            err,
            RepositoryError::Conflict("Banner was modified by another request".to_string())
        );
    }

    #[tokio::test]
    async fn corrupt_document_is_a_serialization_error() {
        let mut broken = model("x", 1);
        broken.document = json!({ "title": 42 });

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![broken]])
            .into_connection();

        let store = SingletonStorePostgres::<Banner>::new(Arc::new(db));

        assert!(matches!(
            store.find().await.unwrap_err(),
            RepositoryError::SerializationError(_)
        ));
    }
}
