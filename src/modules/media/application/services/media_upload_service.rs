use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use super::media_janitor::MediaJanitor;
use crate::modules::media::application::ports::incoming::MediaUploadUseCase;
use crate::modules::media::application::ports::outgoing::MediaHost;
use crate::modules::media::domain::{MediaRef, StagedUpload};
use crate::shared::error::ContentError;

#[derive(Clone)]
pub struct MediaUploadService {
    host: Arc<dyn MediaHost>,
    janitor: MediaJanitor,
    folder: String,
}

impl MediaUploadService {
    pub fn new(host: Arc<dyn MediaHost>, folder: impl Into<String>) -> Self {
        Self {
            janitor: MediaJanitor::new(Arc::clone(&host)),
            host,
            folder: folder.into(),
        }
    }
}

#[async_trait]
impl MediaUploadUseCase for MediaUploadService {
    async fn upload(&self, file: StagedUpload) -> Result<MediaRef, ContentError> {
        self.host.upload(file, &self.folder).await.map_err(|e| {
            error!("Media upload failed: {}", e);
            ContentError::Upstream(e.to_string())
        })
    }

    async fn upload_many(&self, files: Vec<StagedUpload>) -> Result<Vec<MediaRef>, ContentError> {
        if files.is_empty() {
            return Err(ContentError::validation("No image files provided"));
        }

        let mut uploaded = Vec::with_capacity(files.len());
        for file in files {
            match self.host.upload(file, &self.folder).await {
                Ok(media) => uploaded.push(media),
                Err(e) => {
                    error!("Media upload failed after {} files: {}", uploaded.len(), e);
                    self.janitor.discard_all(&uploaded).await;
                    return Err(ContentError::Upstream(e.to_string()));
                }
            }
        }

        Ok(uploaded)
    }

    async fn delete(&self, public_id: &str) -> Result<(), ContentError> {
        if public_id.trim().is_empty() {
            return Err(ContentError::validation("Public id is required"));
        }

        self.host
            .delete(public_id)
            .await
            .map_err(|e| ContentError::Upstream(e.to_string()))
    }
}
