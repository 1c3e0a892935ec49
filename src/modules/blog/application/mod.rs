pub mod blog_service;
pub mod ports;

pub use blog_service::{BlogService, BlogUseCase};
