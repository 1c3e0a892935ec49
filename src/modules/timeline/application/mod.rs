pub mod timeline_service;

pub use timeline_service::{TimelineService, TimelineUseCase};
