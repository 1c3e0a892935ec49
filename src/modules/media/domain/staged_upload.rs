use std::path::Path;

use tempfile::TempPath;

/// An uploaded file staged on local disk. The file is removed when this
/// value is dropped.
#[derive(Debug)]
pub struct StagedUpload {
    path: TempPath,
    file_name: String,
    content_type: String,
    size: u64,
}

impl StagedUpload {
    pub fn new(path: TempPath, file_name: String, content_type: String, size: u64) -> Self {
        Self {
            path,
            file_name,
            content_type,
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}
