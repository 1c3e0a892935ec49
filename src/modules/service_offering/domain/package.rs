use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::shared::error::ContentError;

pub const MAX_PACKAGES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageName {
    Basic,
    Standard,
    Premium,
}

/// One pricing tier of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: PackageName,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default)]
    pub revisions: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// At most three packages with distinct names, and at least one when the
/// service is sold in packages.
pub fn check_packages(has_packages: bool, packages: &[Package]) -> Result<(), ContentError> {
    if has_packages && packages.is_empty() {
        return Err(ContentError::validation(
            "At least one package is required when packages are enabled",
        ));
    }
    if packages.len() > MAX_PACKAGES {
        return Err(ContentError::validation(format!(
            "A service can have at most {MAX_PACKAGES} packages"
        )));
    }

    let mut seen = HashSet::new();
    for package in packages {
        if !seen.insert(package.name) {
            return Err(ContentError::validation(format!(
                "Duplicate package name: {:?}",
                package.name
            )));
        }
    }
    Ok(())
}
