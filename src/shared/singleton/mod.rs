pub mod document;
pub mod sea_orm_entity;
pub mod store;
pub mod store_postgres;

pub use document::{SingletonDocument, SingletonRecord};
pub use store::{edit_existing, edit_or_bootstrap, store_error, Edited, SingletonStore};
pub use store_postgres::SingletonStorePostgres;
