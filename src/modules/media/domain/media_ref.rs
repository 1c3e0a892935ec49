use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pointer to an asset held by the media host. The owning document is the
/// only holder; replacing it orphans the previous asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    pub url: String,
    pub public_id: String,
}

impl MediaRef {
    pub fn new(url: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: public_id.into(),
        }
    }

    pub fn same_asset(&self, other: &MediaRef) -> bool {
        self.public_id == other.public_id
    }
}
