pub mod skill;

pub use skill::{Skill, SkillCategory, SkillFilter, SkillInput, SkillPatch};
