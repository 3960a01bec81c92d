use async_trait::async_trait;

use crate::modules::comment::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaCommentRepositoryError {
    #[error("Media not found")]
    MediaNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    /// The comment already hangs off a media record (unique comment_id).
    #[error("Comment already attached to a media record")]
    CommentAlreadyAttached,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (media_comments table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MediaCommentRepository: Send + Sync {
    async fn get_media_comments(
        &self,
        media_id: i32,
    ) -> Result<Vec<Comment>, MediaCommentRepositoryError>;

    /// Link a comment to a media record and stamp the comment's `type` with
    /// `"media"`, both in one transaction.
    async fn attach_comment(
        &self,
        media_id: i32,
        comment_id: i32,
    ) -> Result<(), MediaCommentRepositoryError>;

    async fn detach_comment(
        &self,
        media_id: i32,
        comment_id: i32,
    ) -> Result<(), MediaCommentRepositoryError>;
}
