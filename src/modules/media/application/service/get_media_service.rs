use async_trait::async_trait;

use crate::modules::media::application::domain::entities::MediaRecord;
use crate::modules::media::application::ports::incoming::use_cases::{
    GetMediaError, GetMediaUseCase,
};
use crate::modules::media::application::ports::outgoing::{
    MediaCommentRepository, MediaRepository, MediaRepositoryError, MediaTagRepository,
};

pub struct GetMediaService<R, T, C>
where
    R: MediaRepository,
    T: MediaTagRepository,
    C: MediaCommentRepository,
{
    media_repository: R,
    media_tag_repository: T,
    media_comment_repository: C,
}

impl<R, T, C> GetMediaService<R, T, C>
where
    R: MediaRepository,
    T: MediaTagRepository,
    C: MediaCommentRepository,
{
    pub fn new(media_repository: R, media_tag_repository: T, media_comment_repository: C) -> Self {
        Self {
            media_repository,
            media_tag_repository,
            media_comment_repository,
        }
    }
}

#[async_trait]
impl<R, T, C> GetMediaUseCase for GetMediaService<R, T, C>
where
    R: MediaRepository + Send + Sync,
    T: MediaTagRepository + Send + Sync,
    C: MediaCommentRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<MediaRecord, GetMediaError> {
        let mut record = self
            .media_repository
            .find_by_slug(slug)
            .await
            .map_err(|e| match e {
                MediaRepositoryError::NotFound => GetMediaError::NotFound,
                other => GetMediaError::RepositoryError(other.to_string()),
            })?;

        let tags = self
            .media_tag_repository
            .get_media_tags(record.id)
            .await
            .map_err(|e| GetMediaError::RepositoryError(e.to_string()))?;

        record.comments = self
            .media_comment_repository
            .get_media_comments(record.id)
            .await
            .map_err(|e| GetMediaError::RepositoryError(e.to_string()))?;

        record.set_tags(tags);
        Ok(record)
    }
}
