use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::media::domain::MediaRef;
use crate::shared::error::ContentError;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
    pub company_logo: Option<MediaRef>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    /// Ongoing roles carry no end date; otherwise the end cannot precede
    /// the start.
    fn normalize(&mut self) -> Result<(), ContentError> {
        if self.title.trim().is_empty() {
            return Err(ContentError::validation("Experience title is required"));
        }
        if self.company.trim().is_empty() {
            return Err(ContentError::validation("Company is required"));
        }

        if self.current {
            self.end_date = None;
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ContentError::validation(
                    "End date cannot be before start date",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
    pub company_logo: Option<MediaRef>,
    pub order: i32,
}

impl ExperienceInput {
    pub fn into_experience(self, now: DateTime<Utc>) -> Result<Experience, ContentError> {
        let start_date = self
            .start_date
            .ok_or_else(|| ContentError::validation("Start date is required"))?;

        let mut experience = Experience {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location,
            employment_type: self.employment_type,
            start_date,
            end_date: self.end_date,
            current: self.current,
            description: self.description,
            responsibilities: self.responsibilities,
            technologies: self.technologies,
            company_logo: self.company_logo,
            order: self.order,
            created_at: now,
            updated_at: now,
        };
        experience.normalize()?;
        Ok(experience)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub current: Option<bool>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub company_logo: PatchField<MediaRef>,
    pub order: Option<i32>,
}

impl ExperiencePatch {
    pub fn apply(self, experience: &mut Experience) -> Result<(), ContentError> {
        let mut next = experience.clone();

        if let Some(title) = self.title {
            next.title = title.trim().to_string();
        }
        if let Some(company) = self.company {
            next.company = company.trim().to_string();
        }
        if let Some(location) = self.location {
            next.location = location;
        }
        if let Some(kind) = self.employment_type {
            next.employment_type = kind;
        }
        if let Some(start) = self.start_date {
            next.start_date = start;
        }
        next.end_date = self.end_date.apply_to(next.end_date.take());
        if let Some(current) = self.current {
            next.current = current;
        }
        if let Some(description) = self.description {
            next.description = description;
        }
        if let Some(responsibilities) = self.responsibilities {
            next.responsibilities = responsibilities;
        }
        if let Some(technologies) = self.technologies {
            next.technologies = technologies;
        }
        next.company_logo = self.company_logo.apply_to(next.company_logo.take());
        if let Some(order) = self.order {
            next.order = order;
        }

        next.normalize()?;
        *experience = next;
        Ok(())
    }
}
