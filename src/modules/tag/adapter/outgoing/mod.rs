pub mod sea_orm_entity;
mod tag_repository_postgres;

pub use tag_repository_postgres::TagRepositoryPostgres;
