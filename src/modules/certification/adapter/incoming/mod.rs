pub mod routes;

pub use routes::{
    create_certification_handler, delete_certification_handler, get_certification_handler,
    list_certifications_handler, update_certification_handler,
};
