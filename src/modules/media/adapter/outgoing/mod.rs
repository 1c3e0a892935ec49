pub mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryMediaHost};
