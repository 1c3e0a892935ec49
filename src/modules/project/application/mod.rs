pub mod ports;
pub mod project_service;

pub use project_service::{ProjectService, ProjectUseCase};
