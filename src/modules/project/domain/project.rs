use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::media::domain::MediaRef;
use crate::shared::error::ContentError;
use crate::shared::patch::{AbsentPolicy, PatchField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Backend,
    Ai,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub thumbnail: Option<MediaRef>,
    pub images: Vec<MediaRef>,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub links: ProjectLinks,
    pub category: ProjectCategory,
    pub featured: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Every asset this project owns.
    pub fn media(&self) -> Vec<MediaRef> {
        self.thumbnail
            .iter()
            .chain(self.images.iter())
            .cloned()
            .collect()
    }
}

/// Query-string filters for the public list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
    pub category: Option<ProjectCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub thumbnail: Option<MediaRef>,
    pub images: Vec<MediaRef>,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub links: ProjectLinks,
    pub category: ProjectCategory,
    pub featured: bool,
    pub order: i32,
}

fn require(value: &str, message: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::validation(message))
    } else {
        Ok(())
    }
}

impl ProjectInput {
    pub fn into_project(self, now: DateTime<Utc>) -> Result<Project, ContentError> {
        require(&self.title, "Project title is required")?;
        require(&self.short_description, "Project short description is required")?;

        Ok(Project {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            short_description: self.short_description,
            description: self.description,
            thumbnail: self.thumbnail,
            images: self.images,
            tech_stack: self.tech_stack,
            features: self.features,
            links: self.links,
            category: self.category,
            featured: self.featured,
            order: self.order,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: PatchField<MediaRef>,
    pub images: Option<Vec<MediaRef>>,
    pub tech_stack: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub links: Option<ProjectLinks>,
    pub category: Option<ProjectCategory>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

impl ProjectPatch {
    pub fn apply(self, project: &mut Project) -> Result<(), ContentError> {
        let keep = AbsentPolicy::Keep;

        if let Some(title) = &self.title {
            require(title, "Project title is required")?;
        }

        project.title = keep.resolve(
            self.title.map(|t| t.trim().to_string()),
            std::mem::take(&mut project.title),
        );
        project.short_description = keep.resolve(
            self.short_description,
            std::mem::take(&mut project.short_description),
        );
        project.description =
            keep.resolve(self.description, std::mem::take(&mut project.description));
        project.thumbnail = self.thumbnail.apply_to(project.thumbnail.take());
        project.images = keep.resolve(self.images, std::mem::take(&mut project.images));
        project.tech_stack = keep.resolve(self.tech_stack, std::mem::take(&mut project.tech_stack));
        project.features = keep.resolve(self.features, std::mem::take(&mut project.features));
        project.links = keep.resolve(self.links, std::mem::take(&mut project.links));
        project.category = keep.resolve(self.category, project.category);
        project.featured = keep.resolve(self.featured, project.featured);
        project.order = keep.resolve(self.order, project.order);
        Ok(())
    }
}
