pub mod certification_service;
pub mod ports;

pub use certification_service::{CertificationService, CertificationUseCase};
