use async_trait::async_trait;
use tracing::info;

use crate::modules::media::application::domain::entities::MediaRecord;
use crate::modules::media::application::ports::incoming::use_cases::{
    StatusChange, UpdateMediaStatusError, UpdateMediaStatusUseCase,
};
use crate::modules::media::application::ports::outgoing::MediaRepository;

pub struct UpdateMediaStatusService<R>
where
    R: MediaRepository,
{
    media_repository: R,
}

impl<R> UpdateMediaStatusService<R>
where
    R: MediaRepository,
{
    pub fn new(media_repository: R) -> Self {
        Self { media_repository }
    }
}

#[async_trait]
impl<R> UpdateMediaStatusUseCase for UpdateMediaStatusService<R>
where
    R: MediaRepository + Send + Sync,
{
    async fn execute(
        &self,
        media_id: i32,
        change: StatusChange,
    ) -> Result<MediaRecord, UpdateMediaStatusError> {
        let mut record = self.media_repository.find_by_id(media_id).await?;

        let applied = match change {
            StatusChange::Set(value) => record.set_status(value),
            StatusChange::Add(bits) => record.add_status(bits),
            StatusChange::Remove(bits) => record.remove_status(bits),
        };
        applied.map_err(|e| UpdateMediaStatusError::InvalidStatus(e.to_string()))?;

        let saved = self.media_repository.save_media(&record).await?;

        info!(media_id, status = saved.status(), "Media status updated");
        Ok(saved)
    }
}
