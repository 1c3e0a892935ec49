use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{self as experiences, ActiveModel, Column, Entity};
use crate::modules::experience::application::ports::ExperienceRepository;
use crate::modules::experience::domain::Experience;
use crate::shared::error::{from_json, from_text, to_json, to_text, RepositoryError};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError> {
        Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .into_iter()
            .map(model_to_experience)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(model_to_experience)
            .transpose()
    }

    async fn insert(&self, experience: Experience) -> Result<Experience, RepositoryError> {
        let model = to_active_model(&experience)?
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;
        model_to_experience(model)
    }

    async fn update(&self, experience: Experience) -> Result<Experience, RepositoryError> {
        let mut active = to_active_model(&experience)?;
        active.created_at = NotSet;

        let model = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepositoryError::NotFound,
            other => RepositoryError::from_db(other),
        })?;
        model_to_experience(model)
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

fn to_active_model(e: &Experience) -> Result<ActiveModel, RepositoryError> {
    Ok(ActiveModel {
        id: Set(e.id),
        title: Set(e.title.clone()),
        company: Set(e.company.clone()),
        location: Set(e.location.clone()),
        employment_type: Set(to_text(&e.employment_type)?),
        start_date: Set(e.start_date),
        end_date: Set(e.end_date),
        current: Set(e.current),
        description: Set(e.description.clone()),
        responsibilities: Set(to_json(&e.responsibilities)?),
        technologies: Set(to_json(&e.technologies)?),
        company_logo: Set(e.company_logo.as_ref().map(to_json).transpose()?),
        sort_order: Set(e.order),
        created_at: Set(e.created_at.fixed_offset()),
        updated_at: Set(e.updated_at.fixed_offset()),
    })
}

fn model_to_experience(model: experiences::Model) -> Result<Experience, RepositoryError> {
    Ok(Experience {
        id: model.id,
        title: model.title,
        company: model.company,
        location: model.location,
        employment_type: from_text(&model.employment_type)?,
        start_date: model.start_date,
        end_date: model.end_date,
        current: model.current,
        description: model.description,
        responsibilities: from_json(model.responsibilities)?,
        technologies: from_json(model.technologies)?,
        company_logo: model.company_logo.map(from_json).transpose()?,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
