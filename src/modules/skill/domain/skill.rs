use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::media::domain::MediaRef;
use crate::shared::error::ContentError;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Tools,
    Mobile,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub logo: Option<MediaRef>,
    pub category: SkillCategory,
    pub proficiency: i32,
    pub order: i32,
    pub display_in_marquee: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkillFilter {
    pub category: Option<SkillCategory>,
    /// `?marquee=true` keeps only skills shown in the scrolling strip.
    pub marquee: Option<bool>,
}

fn check_name(name: &str) -> Result<(), ContentError> {
    if name.trim().is_empty() {
        return Err(ContentError::validation("Skill name is required"));
    }
    Ok(())
}

fn check_proficiency(value: i32) -> Result<(), ContentError> {
    if !(0..=100).contains(&value) {
        return Err(ContentError::validation(
            "Skill proficiency must be between 0 and 100",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillInput {
    pub name: String,
    pub logo: Option<MediaRef>,
    pub category: SkillCategory,
    pub proficiency: i32,
    pub order: i32,
    pub display_in_marquee: bool,
}

impl Default for SkillInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            logo: None,
            category: SkillCategory::default(),
            proficiency: 50,
            order: 0,
            display_in_marquee: true,
        }
    }
}

impl SkillInput {
    pub fn into_skill(self, now: DateTime<Utc>) -> Result<Skill, ContentError> {
        check_name(&self.name)?;
        check_proficiency(self.proficiency)?;

        Ok(Skill {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            logo: self.logo,
            category: self.category,
            proficiency: self.proficiency,
            order: self.order,
            display_in_marquee: self.display_in_marquee,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    pub name: Option<String>,
    #[serde(default)]
    pub logo: PatchField<MediaRef>,
    pub category: Option<SkillCategory>,
    pub proficiency: Option<i32>,
    pub order: Option<i32>,
    pub display_in_marquee: Option<bool>,
}

impl SkillPatch {
    pub fn apply(self, skill: &mut Skill) -> Result<(), ContentError> {
        if let Some(name) = self.name {
            check_name(&name)?;
            skill.name = name.trim().to_string();
        }
        if let Some(proficiency) = self.proficiency {
            check_proficiency(proficiency)?;
            skill.proficiency = proficiency;
        }

        skill.logo = self.logo.apply_to(skill.logo.take());
        if let Some(category) = self.category {
            skill.category = category;
        }
        if let Some(order) = self.order {
            skill.order = order;
        }
        if let Some(marquee) = self.display_in_marquee {
            skill.display_in_marquee = marquee;
        }
        Ok(())
    }
}
