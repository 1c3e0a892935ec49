pub mod api;
pub mod config;
pub mod error;
pub mod patch;
pub mod reorder;
pub mod singleton;
