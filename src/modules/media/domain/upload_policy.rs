#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("No image file provided")]
    Missing,

    #[error("Only image files are allowed (got {0})")]
    UnsupportedType(String),

    #[error("File exceeds the {limit_mb}MB limit")]
    TooLarge { limit_mb: u64 },

    #[error("Uploaded file is empty")]
    Empty,

    #[error("At most {0} files can be uploaded at once")]
    TooMany(usize),

    #[error("Invalid multipart payload: {0}")]
    Malformed(String),

    #[error("Could not stage upload: {0}")]
    Staging(String),
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_files_per_request: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024,
            max_files_per_request: 10,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "image/gif",
        "image/svg+xml",
    ];

    pub fn check_type(&self, content_type: &str) -> Result<(), UploadRejection> {
        if self.allowed_mime_types.contains(&content_type) {
            Ok(())
        } else {
            Err(UploadRejection::UnsupportedType(content_type.to_string()))
        }
    }

    pub fn check_size(&self, size: u64) -> Result<(), UploadRejection> {
        if size > self.max_file_size_bytes {
            Err(UploadRejection::TooLarge {
                limit_mb: self.max_file_size_bytes / (1024 * 1024),
            })
        } else {
            Ok(())
        }
    }
}
