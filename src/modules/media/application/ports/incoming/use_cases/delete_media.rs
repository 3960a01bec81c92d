use async_trait::async_trait;

use crate::modules::media::application::ports::outgoing::MediaRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMediaError {
    #[error("media not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<MediaRepositoryError> for DeleteMediaError {
    fn from(err: MediaRepositoryError) -> Self {
        match err {
            MediaRepositoryError::NotFound => DeleteMediaError::NotFound,
            other => DeleteMediaError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteMediaUseCase: Send + Sync {
    async fn execute(&self, media_id: i32) -> Result<(), DeleteMediaError>;
}
