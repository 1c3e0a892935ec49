pub mod ports;
pub mod skill_service;

pub use skill_service::{SkillService, SkillUseCase};
