pub mod media_comment_repository;
pub mod media_repository;
pub mod media_tag_repository;

pub use media_comment_repository::{MediaCommentRepository, MediaCommentRepositoryError};
pub use media_repository::{CreateMediaData, MediaRepository, MediaRepositoryError};
pub use media_tag_repository::{MediaTagRepository, MediaTagRepositoryError};
