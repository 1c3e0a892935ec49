use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde_json::json;
use uuid::Uuid;

use super::sea_orm_entity::{self as blogs, ActiveModel, Column, Entity};
use crate::modules::blog::application::ports::BlogRepository;
use crate::modules::blog::domain::{Blog, BlogFilter, PageRequest};
use crate::shared::error::{from_json, to_json, RepositoryError};

#[derive(Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn list(
        &self,
        filter: BlogFilter,
        page: PageRequest,
    ) -> Result<(Vec<Blog>, u64), RepositoryError> {
        let mut query = Entity::find();

        if let Some(published) = filter.published {
            query = query.filter(Column::Published.eq(published));
        }
        if let Some(tag) = filter.tag {
            query = query.filter(Expr::cust_with_values(
                "\"tags\" @> $1::jsonb",
                [json!([tag])],
            ));
        }

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        let blogs = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .into_iter()
            .map(model_to_blog)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((blogs, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .map(model_to_blog)
            .transpose()
    }

    async fn view_published(&self, slug: &str) -> Result<Option<Blog>, RepositoryError> {
        Entity::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::Slug.eq(slug))
            .filter(Column::Published.eq(true))
            .exec_with_returning(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?
            .into_iter()
            .next()
            .map(model_to_blog)
            .transpose()
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        let mut query = Entity::find().filter(Column::Slug.eq(slug));
        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }

        let count = query
            .count(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;
        Ok(count > 0)
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepositoryError> {
        let model = to_active_model(&blog)?
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;
        model_to_blog(model)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, RepositoryError> {
        let mut active = to_active_model(&blog)?;
        active.created_at = NotSet;
        // Concurrent public reads own the counter.
        active.views = NotSet;

        let model = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepositoryError::NotFound,
            other => RepositoryError::from_db(other),
        })?;
        model_to_blog(model)
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

fn to_active_model(b: &Blog) -> Result<ActiveModel, RepositoryError> {
    Ok(ActiveModel {
        id: Set(b.id),
        title: Set(b.title.clone()),
        slug: Set(b.slug.clone()),
        excerpt: Set(b.excerpt.clone()),
        content: Set(b.content.clone()),
        featured_image: Set(b.featured_image.as_ref().map(to_json).transpose()?),
        tags: Set(to_json(&b.tags)?),
        published: Set(b.published),
        views: Set(b.views),
        created_at: Set(b.created_at.fixed_offset()),
        updated_at: Set(b.updated_at.fixed_offset()),
    })
}

fn model_to_blog(model: blogs::Model) -> Result<Blog, RepositoryError> {
    Ok(Blog {
        id: model.id,
        title: model.title,
        slug: model.slug,
        excerpt: model.excerpt,
        content: model.content,
        featured_image: model.featured_image.map(from_json).transpose()?,
        tags: from_json(model.tags)?,
        published: model.published,
        views: model.views,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
