use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::media::application::ports::outgoing::{MediaHost, MediaHostError};
use crate::modules::media::application::services::MediaJanitor;
use crate::modules::media::domain::{MediaRef, StagedUpload};

/// Media host fake that records every deletion request.
#[derive(Default)]
pub struct RecordingMediaHost {
    deleted: Mutex<Vec<String>>,
    fail_deletes: bool,
}

impl RecordingMediaHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            deleted: Mutex::new(Vec::new()),
            fail_deletes: true,
        })
    }

    pub fn deleted(&self) -> Vec<String> {
        let mut ids = self.deleted.lock().unwrap().clone();
        ids.sort();
        ids
    }

    pub fn janitor(self: &Arc<Self>) -> MediaJanitor {
        MediaJanitor::new(Arc::clone(self) as Arc<dyn MediaHost>)
    }
}

#[async_trait]
impl MediaHost for RecordingMediaHost {
    async fn upload(&self, file: StagedUpload, folder: &str) -> Result<MediaRef, MediaHostError> {
        let public_id = format!("{folder}/{}", file.file_name());
        Ok(MediaRef::new(
            format!("https://cdn.test/{public_id}"),
            public_id,
        ))
    }

    async fn delete(&self, public_id: &str) -> Result<(), MediaHostError> {
        self.deleted.lock().unwrap().push(public_id.to_string());
        if self.fail_deletes {
            Err(MediaHostError::DeleteFailed("media host unavailable".into()))
        } else {
            Ok(())
        }
    }
}
