use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{self as skills, ActiveModel, Column, Entity};
use crate::modules::skill::application::ports::SkillRepository;
use crate::modules::skill::domain::{Skill, SkillFilter};
use crate::shared::error::{from_json, from_text, to_json, to_text, RepositoryError};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list(&self, filter: SkillFilter) -> Result<Vec<Skill>, RepositoryError> {
        let mut query = Entity::find();

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(to_text(&category)?));
        }
        if filter.marquee == Some(true) {
            query = query.filter(Column::DisplayInMarquee.eq(true));
        }

        query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .into_iter()
            .map(model_to_skill)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Skill>, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(model_to_skill)
            .transpose()
    }

    async fn insert(&self, skill: Skill) -> Result<Skill, RepositoryError> {
        let model = skill_to_active_model(&skill)?
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;
        model_to_skill(model)
    }

    async fn update(&self, skill: Skill) -> Result<Skill, RepositoryError> {
        let mut active = skill_to_active_model(&skill)?;
        active.created_at = NotSet;

        let model = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepositoryError::NotFound,
            other => RepositoryError::from_db(other),
        })?;
        model_to_skill(model)
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

fn skill_to_active_model(s: &Skill) -> Result<ActiveModel, RepositoryError> {
    Ok(ActiveModel {
        id: Set(s.id),
        name: Set(s.name.clone()),
        logo: Set(s.logo.as_ref().map(to_json).transpose()?),
        category: Set(to_text(&s.category)?),
        proficiency: Set(s.proficiency),
        sort_order: Set(s.order),
        display_in_marquee: Set(s.display_in_marquee),
        created_at: Set(s.created_at.fixed_offset()),
        updated_at: Set(s.updated_at.fixed_offset()),
    })
}

fn model_to_skill(model: skills::Model) -> Result<Skill, RepositoryError> {
    Ok(Skill {
        id: model.id,
        name: model.name,
        logo: model.logo.map(from_json).transpose()?,
        category: from_text(&model.category)?,
        proficiency: model.proficiency,
        order: model.sort_order,
        display_in_marquee: model.display_in_marquee,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
