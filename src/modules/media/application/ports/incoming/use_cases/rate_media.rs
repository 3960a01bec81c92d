use async_trait::async_trait;

use crate::modules::media::application::domain::value_objects::Rating;
use crate::modules::media::application::ports::outgoing::MediaRepositoryError;

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RateMediaError {
    #[error("media not found")]
    NotFound,

    #[error("score {0} is outside {min}..={max}", min = MIN_SCORE, max = MAX_SCORE)]
    InvalidScore(i32),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<MediaRepositoryError> for RateMediaError {
    fn from(err: MediaRepositoryError) -> Self {
        match err {
            MediaRepositoryError::NotFound => RateMediaError::NotFound,
            other => RateMediaError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait RateMediaUseCase: Send + Sync {
    /// Adds one vote and returns the updated rating.
    async fn execute(&self, media_id: i32, score: i32) -> Result<Rating, RateMediaError>;
}
