pub mod blog_repository_postgres;
pub mod sea_orm_entity;

pub use blog_repository_postgres::BlogRepositoryPostgres;
