use async_trait::async_trait;

use crate::modules::media::application::domain::value_objects::Rating;
use crate::modules::media::application::ports::incoming::use_cases::{
    RateMediaError, RateMediaUseCase, MAX_SCORE, MIN_SCORE,
};
use crate::modules::media::application::ports::outgoing::MediaRepository;

pub struct RateMediaService<R>
where
    R: MediaRepository,
{
    media_repository: R,
}

impl<R> RateMediaService<R>
where
    R: MediaRepository,
{
    pub fn new(media_repository: R) -> Self {
        Self { media_repository }
    }
}

#[async_trait]
impl<R> RateMediaUseCase for RateMediaService<R>
where
    R: MediaRepository + Send + Sync,
{
    async fn execute(&self, media_id: i32, score: i32) -> Result<Rating, RateMediaError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(RateMediaError::InvalidScore(score));
        }

        let mut record = self.media_repository.find_by_id(media_id).await?;
        record.rating_mut().add_vote(score);

        let saved = self.media_repository.save_media(&record).await?;
        Ok(saved.rating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::entities::MediaKind;
    use crate::modules::media::application::ports::outgoing::MediaRepositoryError;
    use crate::tests::support::media_test_fixtures::sample_record;
    use crate::tests::support::mocks::MockMediaRepo;

    #[tokio::test]
    async fn test_vote_is_written_through_rating_columns() {
        let mut repo = MockMediaRepo::new();
        repo.expect_find_by_id().returning(|id| {
            let mut record = sample_record(id, MediaKind::Audio, "song");
            record.set_rating(Rating::new(8, 2));
            Ok(record)
        });
        repo.expect_save_media()
            .withf(|r| r.rating_sum == 13 && r.rating_votes == 3)
            .times(1)
            .returning(|r| Ok(r.clone()));

        let service = RateMediaService::new(repo);
        let rating = service.execute(1, 5).await.unwrap();

        assert_eq!(rating, Rating::new(13, 3));
    }

    #[tokio::test]
    async fn test_score_out_of_range() {
        let service = RateMediaService::new(MockMediaRepo::new());

        assert!(matches!(
            service.execute(1, 0).await,
            Err(RateMediaError::InvalidScore(0))
        ));
        assert!(matches!(
            service.execute(1, 6).await,
            Err(RateMediaError::InvalidScore(6))
        ));
    }

    #[tokio::test]
    async fn test_missing_media() {
        let mut repo = MockMediaRepo::new();
        repo.expect_find_by_id()
            .returning(|_| Err(MediaRepositoryError::NotFound));

        let service = RateMediaService::new(repo);
        assert!(matches!(
            service.execute(1, 3).await,
            Err(RateMediaError::NotFound)
        ));
    }
}
