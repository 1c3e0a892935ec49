pub mod routes;

pub use routes::{
    add_timeline_item_handler, delete_timeline_item_handler, get_timeline_handler,
    update_timeline_handler, update_timeline_item_handler,
};
