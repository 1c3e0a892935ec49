use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::blog::application::ports::BlogRepository;
use crate::modules::blog::domain::slug::{
    candidate, random_candidate, slug_base, MAX_SLUG_ATTEMPTS,
};
use crate::modules::blog::domain::{
    Blog, BlogFilter, BlogInput, BlogPage, BlogPatch, PageRequest,
};
use crate::modules::media::application::services::MediaJanitor;
use crate::shared::error::{ContentError, RepositoryError};

const LABEL: &str = "Blog";

fn lift(e: RepositoryError) -> ContentError {
    match e {
        RepositoryError::Conflict(_) => {
            ContentError::Conflict("A blog with this slug already exists".to_string())
        }
        other => ContentError::from_repository(other, LABEL),
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogUseCase: Send + Sync {
    async fn list(&self, filter: BlogFilter, page: PageRequest) -> Result<BlogPage, ContentError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Blog, ContentError>;
    /// Public read: published posts only, counts a view.
    async fn read_by_slug(&self, slug: &str) -> Result<Blog, ContentError>;
    async fn create(&self, input: BlogInput) -> Result<Blog, ContentError>;
    async fn update(&self, id: Uuid, patch: BlogPatch) -> Result<Blog, ContentError>;
    async fn delete(&self, id: Uuid) -> Result<(), ContentError>;
}

pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
    janitor: MediaJanitor,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>, janitor: MediaJanitor) -> Self {
        Self { repo, janitor }
    }

    /// First free candidate for `source`, ignoring the post `exclude`.
    async fn unique_slug(
        &self,
        source: &str,
        exclude: Option<Uuid>,
    ) -> Result<String, ContentError> {
        let base = slug_base(source);

        for attempt in 0..MAX_SLUG_ATTEMPTS {
            let slug = candidate(&base, attempt);
            if !self.repo.slug_exists(&slug, exclude).await.map_err(lift)? {
                return Ok(slug);
            }
        }

        warn!(base = %base, "Slug suffixes exhausted, using random suffix");
        Ok(random_candidate(&base))
    }
}

#[async_trait]
impl BlogUseCase for BlogService {
    async fn list(&self, filter: BlogFilter, page: PageRequest) -> Result<BlogPage, ContentError> {
        let (items, total) = self.repo.list(filter, page).await.map_err(lift)?;
        Ok(BlogPage {
            items,
            total,
            request: page,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Blog, ContentError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(lift)?
            .ok_or_else(|| ContentError::not_found(LABEL))
    }

    async fn read_by_slug(&self, slug: &str) -> Result<Blog, ContentError> {
        self.repo
            .view_published(slug)
            .await
            .map_err(lift)?
            .ok_or_else(|| ContentError::not_found(LABEL))
    }

    async fn create(&self, input: BlogInput) -> Result<Blog, ContentError> {
        let slug = self.unique_slug(input.slug_source(), None).await?;
        let blog = input.into_blog(slug, Utc::now())?;

        let saved = self.repo.insert(blog).await.map_err(lift)?;
        info!(blog_id = %saved.id, slug = %saved.slug, "Blog created");
        Ok(saved)
    }

    async fn update(&self, id: Uuid, patch: BlogPatch) -> Result<Blog, ContentError> {
        let previous = self.get_by_id(id).await?;

        let new_slug = match patch.slug_source(&previous) {
            Some(source) => Some(self.unique_slug(&source, Some(id)).await?),
            None => None,
        };

        let mut next = previous.clone();
        patch.apply(&mut next)?;
        if let Some(slug) = new_slug {
            next.slug = slug;
        }
        next.updated_at = Utc::now();

        let saved = self.repo.update(next).await.map_err(lift)?;
        self.janitor
            .discard_replaced(previous.featured_image.as_ref(), saved.featured_image.as_ref())
            .await;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentError> {
        let blog = self.get_by_id(id).await?;
        self.repo.delete(id).await.map_err(lift)?;
        self.janitor.discard_all(blog.featured_image.iter()).await;

        info!(blog_id = %id, "Blog deleted");
        Ok(())
    }
}
