mod media_comment_repository_postgres;
mod media_repository_postgres;
mod media_tag_repository_postgres;
pub mod sea_orm_entity;

pub use media_comment_repository_postgres::MediaCommentRepositoryPostgres;
pub use media_repository_postgres::MediaRepositoryPostgres;
pub use media_tag_repository_postgres::MediaTagRepositoryPostgres;
