pub mod routes;

pub use routes::{
    create_service_handler, delete_service_handler, footer_services_handler, get_service_handler,
    list_services_handler, reorder_services_handler, update_service_handler,
};
