pub mod routes;

pub use routes::{get_hero_handler, update_hero_handler};
