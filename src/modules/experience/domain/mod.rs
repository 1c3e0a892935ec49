pub mod experience;

pub use experience::{EmploymentType, Experience, ExperienceInput, ExperiencePatch};
