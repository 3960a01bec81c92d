use async_trait::async_trait;

use crate::modules::media::application::domain::entities::MediaRecord;
use crate::modules::media::application::ports::outgoing::MediaRepositoryError;

/// How to change the status bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Replace the whole mask.
    Set(i32),
    /// OR the given bits in.
    Add(i32),
    /// Clear the given bits.
    Remove(i32),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateMediaStatusError {
    #[error("media not found")]
    NotFound,

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<MediaRepositoryError> for UpdateMediaStatusError {
    fn from(err: MediaRepositoryError) -> Self {
        match err {
            MediaRepositoryError::NotFound => UpdateMediaStatusError::NotFound,
            MediaRepositoryError::InvalidStatus(msg) => UpdateMediaStatusError::InvalidStatus(msg),
            MediaRepositoryError::SlugAlreadyExists => UpdateMediaStatusError::RepositoryError(
                "unexpected slug conflict while updating status".to_string(),
            ),
            MediaRepositoryError::InvalidValue(msg) | MediaRepositoryError::DatabaseError(msg) => {
                UpdateMediaStatusError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait UpdateMediaStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        media_id: i32,
        change: StatusChange,
    ) -> Result<MediaRecord, UpdateMediaStatusError>;
}
