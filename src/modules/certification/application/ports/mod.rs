pub mod certification_repository;

pub use certification_repository::CertificationRepository;
