use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::media::domain::MediaRef;
use crate::shared::error::ContentError;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<MediaRef>,
    pub tags: Vec<String>,
    pub published: bool,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn required(value: &str, message: &str) -> Result<String, ContentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContentError::validation(message));
    }
    Ok(trimmed.to_string())
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !cleaned.contains(&tag) {
            cleaned.push(tag);
        }
    }
    cleaned
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogInput {
    pub title: String,
    /// Normalized like a title when given; derived from the title otherwise.
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<MediaRef>,
    pub tags: Vec<String>,
    pub published: bool,
}

impl BlogInput {
    /// Builds the post with `slug` already made unique by the caller.
    pub fn into_blog(self, slug: String, now: DateTime<Utc>) -> Result<Blog, ContentError> {
        let title = required(&self.title, "Blog title is required")?;
        required(&self.content, "Blog content is required")?;

        Ok(Blog {
            id: Uuid::new_v4(),
            title,
            slug,
            excerpt: self.excerpt,
            content: self.content,
            featured_image: self.featured_image,
            tags: clean_tags(self.tags),
            published: self.published,
            views: 0,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn slug_source(&self) -> &str {
        match self.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug,
            _ => &self.title,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: PatchField<MediaRef>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl BlogPatch {
    /// Source text for a new slug, if this patch requires one: an explicit
    /// slug, or a changed title when no slug was given.
    pub fn slug_source(&self, current: &Blog) -> Option<String> {
        match (&self.slug, &self.title) {
            (Some(slug), _) if !slug.trim().is_empty() => Some(slug.clone()),
            (_, Some(title)) if title.trim() != current.title => Some(title.clone()),
            _ => None,
        }
    }

    /// Applies every field except the slug.
    pub fn apply(self, blog: &mut Blog) -> Result<(), ContentError> {
        if let Some(title) = &self.title {
            blog.title = required(title, "Blog title is required")?;
        }
        if let Some(content) = self.content {
            required(&content, "Blog content is required")?;
            blog.content = content;
        }
        if let Some(excerpt) = self.excerpt {
            blog.excerpt = excerpt;
        }
        blog.featured_image = self.featured_image.apply_to(blog.featured_image.take());
        if let Some(tags) = self.tags {
            blog.tags = clean_tags(tags);
        }
        if let Some(published) = self.published {
            blog.published = published;
        }
        Ok(())
    }
}
