pub mod journey;
pub mod position;

pub use journey::{Bike, BikeInput, Journey, JourneyStep, JourneyStepInput, JourneyUpdate};
pub use position::{auto_position, distribute_positions};
