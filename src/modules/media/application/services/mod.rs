pub mod media_janitor;
pub mod media_upload_service;

pub use media_janitor::MediaJanitor;
pub use media_upload_service::MediaUploadService;
