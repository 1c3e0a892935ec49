use async_trait::async_trait;

use crate::modules::media::domain::{MediaRef, StagedUpload};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaHostError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

/// Remote image store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Uploads the staged file into `folder`. The staged file is consumed and
    /// removed from local disk whatever the outcome.
    async fn upload(&self, file: StagedUpload, folder: &str) -> Result<MediaRef, MediaHostError>;

    async fn delete(&self, public_id: &str) -> Result<(), MediaHostError>;
}
