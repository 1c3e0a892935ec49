pub mod routes;

pub use routes::{get_theme_handler, reset_theme_handler, update_theme_handler};
