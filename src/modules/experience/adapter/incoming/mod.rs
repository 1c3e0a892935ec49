pub mod routes;

pub use routes::{
    create_experience_handler, delete_experience_handler, get_experience_handler,
    list_experiences_handler, update_experience_handler,
};
