pub mod project;

pub use project::{Project, ProjectCategory, ProjectFilter, ProjectInput, ProjectLinks, ProjectPatch};
