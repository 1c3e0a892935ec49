pub mod journey_service;

pub use journey_service::{JourneyService, JourneyUseCase};
