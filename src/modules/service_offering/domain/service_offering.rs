use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::package::{check_packages, Package};
use crate::shared::error::ContentError;

/// A service sold on the portfolio, priced flat or in packages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub price: String,
    pub has_packages: bool,
    pub packages: Vec<Package>,
    pub is_active: bool,
    pub show_in_footer: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceOffering {
    fn validate(&self) -> Result<(), ContentError> {
        if self.title.trim().is_empty() {
            return Err(ContentError::validation("Service title is required"));
        }
        check_packages(self.has_packages, &self.packages)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceFilter {
    pub active: Option<bool>,
    #[serde(skip)]
    pub in_footer: bool,
}

impl ServiceFilter {
    pub fn footer() -> Self {
        Self {
            active: Some(true),
            in_footer: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceInput {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub price: String,
    pub has_packages: bool,
    pub packages: Vec<Package>,
    pub is_active: bool,
    pub show_in_footer: bool,
    pub order: i32,
}

impl Default for ServiceInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            icon: String::new(),
            features: Vec::new(),
            price: String::new(),
            has_packages: false,
            packages: Vec::new(),
            is_active: true,
            show_in_footer: false,
            order: 0,
        }
    }
}

impl ServiceInput {
    pub fn into_service(self, now: DateTime<Utc>) -> Result<ServiceOffering, ContentError> {
        let service = ServiceOffering {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            description: self.description,
            icon: self.icon,
            features: self.features,
            price: self.price,
            has_packages: self.has_packages,
            packages: self.packages,
            is_active: self.is_active,
            show_in_footer: self.show_in_footer,
            order: self.order,
            created_at: now,
            updated_at: now,
        };
        service.validate()?;
        Ok(service)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<String>,
    pub has_packages: Option<bool>,
    pub packages: Option<Vec<Package>>,
    pub is_active: Option<bool>,
    pub show_in_footer: Option<bool>,
    pub order: Option<i32>,
}

impl ServicePatch {
    /// Package rules are checked against the merged result, so toggling
    /// `hasPackages` alone is validated too.
    pub fn apply(self, service: &mut ServiceOffering) -> Result<(), ContentError> {
        let mut next = service.clone();

        if let Some(title) = self.title {
            next.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            next.description = description;
        }
        if let Some(icon) = self.icon {
            next.icon = icon;
        }
        if let Some(features) = self.features {
            next.features = features;
        }
        if let Some(price) = self.price {
            next.price = price;
        }
        if let Some(has_packages) = self.has_packages {
            next.has_packages = has_packages;
        }
        if let Some(packages) = self.packages {
            next.packages = packages;
        }
        if let Some(is_active) = self.is_active {
            next.is_active = is_active;
        }
        if let Some(show_in_footer) = self.show_in_footer {
            next.show_in_footer = show_in_footer;
        }
        if let Some(order) = self.order {
            next.order = order;
        }

        next.validate()?;
        *service = next;
        Ok(())
    }
}
