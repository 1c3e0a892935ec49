pub mod media_ref;
pub mod staged_upload;
pub mod upload_policy;

pub use media_ref::MediaRef;
pub use staged_upload::StagedUpload;
pub use upload_policy::{UploadPolicy, UploadRejection};
