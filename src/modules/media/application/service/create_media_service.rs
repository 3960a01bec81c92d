use async_trait::async_trait;

use crate::modules::media::application::domain::entities::MediaRecord;
use crate::modules::media::application::ports::incoming::use_cases::{
    CreateMediaError, CreateMediaUseCase,
};
use crate::modules::media::application::ports::outgoing::{CreateMediaData, MediaRepository};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateMediaService<R>
where
    R: MediaRepository,
{
    media_repository: R,
}

impl<R> CreateMediaService<R>
where
    R: MediaRepository,
{
    pub fn new(media_repository: R) -> Self {
        Self { media_repository }
    }
}

#[async_trait]
impl<R> CreateMediaUseCase for CreateMediaService<R>
where
    R: MediaRepository + Send + Sync,
{
    async fn execute(&self, data: CreateMediaData) -> Result<MediaRecord, CreateMediaError> {
        self.media_repository
            .create_media(data)
            .await
            .map_err(CreateMediaError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::entities::MediaKind;
    use crate::modules::media::application::domain::value_objects::Author;
    use crate::modules::media::application::ports::outgoing::MediaRepositoryError;
    use crate::tests::support::media_test_fixtures::sample_record;
    use crate::tests::support::mocks::MockMediaRepo;

    fn sample_create_data() -> CreateMediaData {
        CreateMediaData::new(
            MediaKind::Audio,
            "song",
            "Song",
            Author::new("Ann", "ann@example.com"),
        )
    }

    #[tokio::test]
    async fn test_execute_success() {
        let mut repo = MockMediaRepo::new();
        repo.expect_create_media()
            .withf(|data| data.slug == "song" && data.kind == MediaKind::Audio)
            .times(1)
            .returning(|_| Ok(sample_record(1, MediaKind::Audio, "song")));

        let service = CreateMediaService::new(repo);
        let record = service.execute(sample_create_data()).await.unwrap();

        assert_eq!(record.to_string(), "<Audio: song>");
    }

    #[tokio::test]
    async fn test_execute_maps_slug_already_exists() {
        let mut repo = MockMediaRepo::new();
        repo.expect_create_media()
            .returning(|_| Err(MediaRepositoryError::SlugAlreadyExists));

        let service = CreateMediaService::new(repo);
        let res = service.execute(sample_create_data()).await;

        assert!(matches!(res, Err(CreateMediaError::SlugAlreadyExists)));
    }

    #[tokio::test]
    async fn test_execute_maps_invalid_status() {
        let mut repo = MockMediaRepo::new();
        repo.expect_create_media()
            .returning(|_| Err(MediaRepositoryError::InvalidStatus("Status 64".to_string())));

        let service = CreateMediaService::new(repo);
        let res = service.execute(sample_create_data()).await;

        assert!(matches!(res, Err(CreateMediaError::InvalidStatus(_))));
    }

    #[tokio::test]
    async fn test_execute_maps_invalid_value() {
        let mut repo = MockMediaRepo::new();
        repo.expect_create_media().returning(|_| {
            Err(MediaRepositoryError::InvalidValue(
                "duration must not be negative, got -5".to_string(),
            ))
        });

        let service = CreateMediaService::new(repo);
        let res = service.execute(sample_create_data()).await;

        assert!(matches!(res, Err(CreateMediaError::InvalidValue(_))));
    }

    #[tokio::test]
    async fn test_execute_maps_database_error() {
        let mut repo = MockMediaRepo::new();
        repo.expect_create_media()
            .returning(|_| Err(MediaRepositoryError::DatabaseError("db down".to_string())));

        let service = CreateMediaService::new(repo);
        let res = service.execute(sample_create_data()).await;

        assert!(matches!(
            res,
            Err(CreateMediaError::RepositoryError(msg)) if msg == "db down"
        ));
    }
}
