use async_trait::async_trait;

use crate::modules::media::domain::{MediaRef, StagedUpload};
use crate::shared::error::ContentError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaUploadUseCase: Send + Sync {
    async fn upload(&self, file: StagedUpload) -> Result<MediaRef, ContentError>;

    /// Uploads every file or none: on failure the assets already uploaded by
    /// this call are deleted again.
    async fn upload_many(&self, files: Vec<StagedUpload>) -> Result<Vec<MediaRef>, ContentError>;

    async fn delete(&self, public_id: &str) -> Result<(), ContentError>;
}
