pub mod routes;

pub use routes::{
    add_journey_step_handler, delete_journey_step_handler, get_journey_handler,
    update_journey_handler, update_journey_step_handler,
};
