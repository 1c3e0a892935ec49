pub mod routes;
pub mod submit;

pub use routes::{
    add_contact_entry_handler, delete_contact_entry_handler, get_contact_handler,
    update_contact_entry_handler, update_contact_handler,
};
pub use submit::{submit_contact_handler, ContactSubmitRequest};
