use async_trait::async_trait;

use crate::modules::media::application::ports::outgoing::{
    MediaRepositoryError, MediaTagRepositoryError,
};
use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::TagRepositoryError;

/// Either ready-made tags or a comma separated blob to parse and resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSelection {
    Tags(Vec<Tag>),
    Text(String),
}

impl From<Vec<Tag>> for TagSelection {
    fn from(tags: Vec<Tag>) -> Self {
        TagSelection::Tags(tags)
    }
}

impl From<&str> for TagSelection {
    fn from(text: &str) -> Self {
        TagSelection::Text(text.to_string())
    }
}

impl From<String> for TagSelection {
    fn from(text: String) -> Self {
        TagSelection::Text(text)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetMediaTagsError {
    #[error("media not found")]
    MediaNotFound,

    #[error("tag not found")]
    TagNotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<MediaTagRepositoryError> for SetMediaTagsError {
    fn from(err: MediaTagRepositoryError) -> Self {
        match err {
            MediaTagRepositoryError::MediaNotFound => SetMediaTagsError::MediaNotFound,
            MediaTagRepositoryError::TagNotFound => SetMediaTagsError::TagNotFound,
            MediaTagRepositoryError::DatabaseError(msg) => SetMediaTagsError::RepositoryError(msg),
        }
    }
}

impl From<MediaRepositoryError> for SetMediaTagsError {
    fn from(err: MediaRepositoryError) -> Self {
        match err {
            MediaRepositoryError::NotFound => SetMediaTagsError::MediaNotFound,
            other => SetMediaTagsError::RepositoryError(other.to_string()),
        }
    }
}

impl From<TagRepositoryError> for SetMediaTagsError {
    fn from(err: TagRepositoryError) -> Self {
        match err {
            TagRepositoryError::DatabaseError(msg) => SetMediaTagsError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SetMediaTagsUseCase: Send + Sync {
    /// Replaces the record's tags with the selection and returns the new set.
    async fn execute(
        &self,
        media_id: i32,
        selection: TagSelection,
    ) -> Result<Vec<Tag>, SetMediaTagsError>;
}
