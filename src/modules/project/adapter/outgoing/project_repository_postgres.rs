use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{self as projects, ActiveModel, Column, Entity};
use crate::modules::project::application::ports::ProjectRepository;
use crate::modules::project::domain::{Project, ProjectFilter};
use crate::shared::error::{from_json, from_text, to_json, to_text, RepositoryError};

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, RepositoryError> {
        let mut query = Entity::find();

        if let Some(featured) = filter.featured {
            query = query.filter(Column::Featured.eq(featured));
        }
        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(to_text(&category)?));
        }

        query
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .into_iter()
            .map(model_to_project)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(model_to_project)
            .transpose()
    }

    async fn insert(&self, project: Project) -> Result<Project, RepositoryError> {
        let model = project_to_active_model(&project)?
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        model_to_project(model)
    }

    async fn update(&self, project: Project) -> Result<Project, RepositoryError> {
        let mut active = project_to_active_model(&project)?;
        active.created_at = NotSet;

        let model = active.update(&*self.db).await.map_err(map_update_err)?;
        model_to_project(model)
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

fn map_update_err(e: DbErr) -> RepositoryError {
    match e {
        DbErr::RecordNotUpdated => RepositoryError::NotFound,
        other => RepositoryError::from_db(other),
    }
}

fn project_to_active_model(p: &Project) -> Result<ActiveModel, RepositoryError> {
    Ok(ActiveModel {
        id: Set(p.id),
        title: Set(p.title.clone()),
        short_description: Set(p.short_description.clone()),
        description: Set(p.description.clone()),
        thumbnail: Set(p.thumbnail.as_ref().map(to_json).transpose()?),
        images: Set(to_json(&p.images)?),
        tech_stack: Set(to_json(&p.tech_stack)?),
        features: Set(to_json(&p.features)?),
        links: Set(to_json(&p.links)?),
        category: Set(to_text(&p.category)?),
        featured: Set(p.featured),
        sort_order: Set(p.order),
        created_at: Set(p.created_at.fixed_offset()),
        updated_at: Set(p.updated_at.fixed_offset()),
    })
}

fn model_to_project(model: projects::Model) -> Result<Project, RepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        short_description: model.short_description,
        description: model.description,
        thumbnail: model.thumbnail.map(from_json).transpose()?,
        images: from_json(model.images)?,
        tech_stack: from_json(model.tech_stack)?,
        features: from_json(model.features)?,
        links: from_json(model.links)?,
        category: from_text(&model.category)?,
        featured: model.featured,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::domain::ProjectCategory;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn model(id: Uuid, title: &str) -> projects::Model {
        let now = Utc::now().fixed_offset();
        projects::Model {
            id,
            title: title.to_string(),
            short_description: "Short".to_string(),
            description: "Long".to_string(),
            thumbnail: Some(json!({ "url": "https://cdn/t.png", "publicId": "projects/t" })),
            images: json!([{ "url": "https://cdn/a.png", "publicId": "projects/a" }]),
            tech_stack: json!(["Rust", "actix-web"]),
            features: json!([]),
            links: json!({ "github": "https://github.com/me/p" }),
            category: "web".to_string(),
            featured: true,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_maps_json_columns_and_filters() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, "CMS")]])
            .into_connection();
        let db = Arc::new(db);
        let repo = ProjectRepositoryPostgres::new(Arc::clone(&db));

        let projects = repo
            .list(ProjectFilter {
                featured: Some(true),
                category: Some(ProjectCategory::Web),
            })
            .await
            .unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].tech_stack, vec!["Rust", "actix-web"]);
        assert_eq!(projects[0].thumbnail.as_ref().unwrap().public_id, "projects/t");
        assert_eq!(projects[0].category, ProjectCategory::Web);

        drop(repo);
        let log = Arc::try_unwrap(db)
            .ok()
            .expect("single owner")
            .into_transaction_log();
        let sql = format!("{:?}", log);
        assert!(sql.contains("WHERE"));
        assert!(sql.contains("featured"));
        assert!(sql.contains("sort_order"));
        assert!(sql.contains("DESC"));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();
        let repo = ProjectRepositoryPostgres::new(Arc::new(db));

        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_category_is_serialization_error() {
        let mut bad = model(Uuid::new_v4(), "Bad");
        bad.category = "spaceship".to_string();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![bad]])
            .into_connection();
        let repo = ProjectRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.find_by_id(Uuid::new_v4()).await,
            Err(RepositoryError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn delete_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = ProjectRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.delete(Uuid::new_v4()).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn insert_returns_stored_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, "CMS")]])
            .into_connection();
        let repo = ProjectRepositoryPostgres::new(Arc::new(db));

        let stored = model_to_project(model(id, "CMS")).unwrap();
        let saved = repo.insert(stored).await.unwrap();

        assert_eq!(saved.id, id);
        assert_eq!(saved.links.github.as_deref(), Some("https://github.com/me/p"));
    }
}
