pub mod experience_service;
pub mod ports;

pub use experience_service::{ExperienceService, ExperienceUseCase};
