pub mod routes;

pub use routes::{
    create_project_handler, delete_project_handler, get_project_handler, list_projects_handler,
    update_project_handler,
};
