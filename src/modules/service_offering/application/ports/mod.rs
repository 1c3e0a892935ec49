pub mod service_repository;

pub use service_repository::ServiceRepository;
