use async_trait::async_trait;

use crate::modules::media::application::ports::incoming::use_cases::{
    DeleteMediaError, DeleteMediaUseCase,
};
use crate::modules::media::application::ports::outgoing::MediaRepository;

pub struct DeleteMediaService<R>
where
    R: MediaRepository,
{
    media_repository: R,
}

impl<R> DeleteMediaService<R>
where
    R: MediaRepository,
{
    pub fn new(media_repository: R) -> Self {
        Self { media_repository }
    }
}

#[async_trait]
impl<R> DeleteMediaUseCase for DeleteMediaService<R>
where
    R: MediaRepository + Send + Sync,
{
    async fn execute(&self, media_id: i32) -> Result<(), DeleteMediaError> {
        self.media_repository
            .delete_media(media_id)
            .await
            .map_err(DeleteMediaError::from)
    }
}
