pub mod ports;
pub mod service_offering_service;

pub use service_offering_service::{ServiceOfferingService, ServiceOfferingUseCase};
