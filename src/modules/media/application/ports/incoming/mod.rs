pub mod media_upload;

pub use media_upload::MediaUploadUseCase;
