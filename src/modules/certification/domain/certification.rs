use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::media::domain::MediaRef;
use crate::shared::error::ContentError;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub date: NaiveDate,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<MediaRef>,
    pub order: i32,
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

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationInput {
    pub title: String,
    pub issuer: String,
    pub date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<MediaRef>,
    pub order: i32,
}

impl CertificationInput {
    pub fn into_certification(self, now: DateTime<Utc>) -> Result<Certification, ContentError> {
        let title = required(&self.title, "Certification title is required")?;
        let issuer = required(&self.issuer, "Certification issuer is required")?;
        let date = self
            .date
            .ok_or_else(|| ContentError::validation("Certification date is required"))?;

        Ok(Certification {
            id: Uuid::new_v4(),
            title,
            issuer,
            date,
            credential_id: self.credential_id,
            credential_url: self.credential_url,
            image: self.image,
            order: self.order,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationPatch {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<NaiveDate>,
    pub credential_id: PatchField<String>,
    pub credential_url: PatchField<String>,
    pub image: PatchField<MediaRef>,
    pub order: Option<i32>,
}

impl CertificationPatch {
    pub fn apply(self, cert: &mut Certification) -> Result<(), ContentError> {
        if let Some(title) = &self.title {
            cert.title = required(title, "Certification title is required")?;
        }
        if let Some(issuer) = &self.issuer {
            cert.issuer = required(issuer, "Certification issuer is required")?;
        }
        if let Some(date) = self.date {
            cert.date = date;
        }
        cert.credential_id = self.credential_id.apply_to(cert.credential_id.take());
        cert.credential_url = self.credential_url.apply_to(cert.credential_url.take());
        cert.image = self.image.apply_to(cert.image.take());
        if let Some(order) = self.order {
            cert.order = order;
        }
        Ok(())
    }
}
