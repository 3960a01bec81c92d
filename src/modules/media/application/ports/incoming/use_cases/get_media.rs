use async_trait::async_trait;

use crate::modules::media::application::domain::entities::MediaRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMediaError {
    #[error("media not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Loads a record by slug with its tags and comments.
#[async_trait]
pub trait GetMediaUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<MediaRecord, GetMediaError>;
}
