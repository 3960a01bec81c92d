use async_trait::async_trait;

use crate::modules::media::application::ports::outgoing::MediaCommentRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttachMediaCommentError {
    #[error("media not found")]
    MediaNotFound,

    #[error("comment not found")]
    CommentNotFound,

    #[error("comment already attached to a media record")]
    CommentAlreadyAttached,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<MediaCommentRepositoryError> for AttachMediaCommentError {
    fn from(err: MediaCommentRepositoryError) -> Self {
        match err {
            MediaCommentRepositoryError::MediaNotFound => AttachMediaCommentError::MediaNotFound,
            MediaCommentRepositoryError::CommentNotFound => {
                AttachMediaCommentError::CommentNotFound
            }
            MediaCommentRepositoryError::CommentAlreadyAttached => {
                AttachMediaCommentError::CommentAlreadyAttached
            }
            MediaCommentRepositoryError::DatabaseError(msg) => {
                AttachMediaCommentError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait AttachMediaCommentUseCase: Send + Sync {
    async fn execute(&self, media_id: i32, comment_id: i32)
        -> Result<(), AttachMediaCommentError>;
}
