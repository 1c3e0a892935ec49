pub mod multipart;
pub mod routes;

pub use routes::{delete_media_handler, upload_many_handler, upload_single_handler};
