use async_trait::async_trait;

use crate::modules::media::application::domain::entities::MediaRecord;
use crate::modules::media::application::ports::outgoing::{CreateMediaData, MediaRepositoryError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateMediaError {
    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<MediaRepositoryError> for CreateMediaError {
    fn from(err: MediaRepositoryError) -> Self {
        match err {
            MediaRepositoryError::SlugAlreadyExists => CreateMediaError::SlugAlreadyExists,
            MediaRepositoryError::InvalidStatus(msg) => CreateMediaError::InvalidStatus(msg),
            MediaRepositoryError::InvalidValue(msg) => CreateMediaError::InvalidValue(msg),
            MediaRepositoryError::DatabaseError(msg) => CreateMediaError::RepositoryError(msg),
            MediaRepositoryError::NotFound => CreateMediaError::RepositoryError(
                "unexpected not found while creating media".to_string(),
            ),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateMediaUseCase: Send + Sync {
    async fn execute(&self, data: CreateMediaData) -> Result<MediaRecord, CreateMediaError>;
}
