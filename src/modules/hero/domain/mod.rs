pub mod hero;

pub use hero::{Hero, HeroAnimation, HeroUpdate, ModelConfig, ModelType, ResumeLink};
