pub mod routes;

pub use routes::{
    create_skill_handler, delete_skill_handler, get_skill_handler, list_skills_handler,
    reorder_skills_handler, update_skill_handler,
};
