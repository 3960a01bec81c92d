use async_trait::async_trait;
use tracing::debug;

use crate::modules::media::application::ports::incoming::use_cases::{
    SetMediaTagsError, SetMediaTagsUseCase, TagSelection,
};
use crate::modules::media::application::ports::outgoing::{MediaRepository, MediaTagRepository};
use crate::modules::tag::application::domain::entities::{extract_tags, Tag};
use crate::modules::tag::application::ports::outgoing::TagRepository;

pub struct SetMediaTagsService<R, T, M>
where
    R: MediaRepository,
    T: TagRepository,
    M: MediaTagRepository,
{
    media_repository: R,
    tag_repository: T,
    media_tag_repository: M,
}

impl<R, T, M> SetMediaTagsService<R, T, M>
where
    R: MediaRepository,
    T: TagRepository,
    M: MediaTagRepository,
{
    pub fn new(media_repository: R, tag_repository: T, media_tag_repository: M) -> Self {
        Self {
            media_repository,
            tag_repository,
            media_tag_repository,
        }
    }
}

#[async_trait]
impl<R, T, M> SetMediaTagsUseCase for SetMediaTagsService<R, T, M>
where
    R: MediaRepository + Send + Sync,
    T: TagRepository + Send + Sync,
    M: MediaTagRepository + Send + Sync,
{
    async fn execute(
        &self,
        media_id: i32,
        selection: TagSelection,
    ) -> Result<Vec<Tag>, SetMediaTagsError> {
        // Resolving text creates tags, so a missing record must fail first.
        self.media_repository.find_by_id(media_id).await?;

        let tags = match selection {
            TagSelection::Tags(tags) => tags,
            TagSelection::Text(text) => {
                let names = extract_tags(&text);
                debug!(media_id, names = ?names, "Parsed tag text");
                if names.is_empty() {
                    Vec::new()
                } else {
                    self.tag_repository.fetch_and_create_tags(names).await?
                }
            }
        };

        let tag_ids = tags.iter().map(|t| t.id).collect();
        self.media_tag_repository
            .set_media_tags(media_id, tag_ids)
            .await?;

        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::entities::MediaKind;
    use crate::modules::media::application::ports::outgoing::{
        MediaRepositoryError, MediaTagRepositoryError,
    };
    use crate::modules::tag::application::ports::outgoing::TagRepositoryError;
    use crate::tests::support::media_test_fixtures::{sample_record, sample_tag};
    use crate::tests::support::mocks::{MockMediaRepo, MockMediaTagRepo, MockTagRepo};
    use mockall::predicate::eq;

    fn existing_media() -> MockMediaRepo {
        let mut repo = MockMediaRepo::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(sample_record(id, MediaKind::Audio, "song")));
        repo
    }

    #[tokio::test]
    async fn test_text_is_parsed_resolved_and_replaces_links() {
        let mut tag_repo = MockTagRepo::new();
        tag_repo
            .expect_fetch_and_create_tags()
            .with(eq(vec!["foo".to_string(), "bar".to_string()]))
            .times(1)
            .returning(|_| Ok(vec![sample_tag(1, "foo"), sample_tag(2, "bar")]));

        let mut link_repo = MockMediaTagRepo::new();
        link_repo
            .expect_set_media_tags()
            .with(eq(5), eq(vec![1, 2]))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SetMediaTagsService::new(existing_media(), tag_repo, link_repo);
        let tags = service.execute(5, "foo, bar".into()).await.unwrap();

        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["foo", "bar"]);
    }

    #[tokio::test]
    async fn test_prebuilt_tags_skip_resolution() {
        let mut tag_repo = MockTagRepo::new();
        tag_repo.expect_fetch_and_create_tags().never();

        let mut link_repo = MockMediaTagRepo::new();
        link_repo
            .expect_set_media_tags()
            .with(eq(5), eq(vec![9]))
            .returning(|_, _| Ok(()));

        let service = SetMediaTagsService::new(existing_media(), tag_repo, link_repo);
        let tags = service
            .execute(5, vec![sample_tag(9, "jazz")].into())
            .await
            .unwrap();

        assert_eq!(tags, vec![sample_tag(9, "jazz")]);
    }

    #[tokio::test]
    async fn test_empty_text_clears_tags_without_error() {
        let mut tag_repo = MockTagRepo::new();
        tag_repo.expect_fetch_and_create_tags().never();

        let mut link_repo = MockMediaTagRepo::new();
        link_repo
            .expect_set_media_tags()
            .with(eq(5), eq(Vec::<i32>::new()))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SetMediaTagsService::new(existing_media(), tag_repo, link_repo);
        let tags = service.execute(5, " , ,, ".into()).await.unwrap();

        assert!(tags.is_empty());
    }

    #[tokio::test]
    async fn test_maps_media_not_found() {
        let mut link_repo = MockMediaTagRepo::new();
        link_repo
            .expect_set_media_tags()
            .returning(|_, _| Err(MediaTagRepositoryError::MediaNotFound));

        let service = SetMediaTagsService::new(existing_media(), MockTagRepo::new(), link_repo);
        let res = service.execute(5, Vec::<Tag>::new().into()).await;

        assert!(matches!(res, Err(SetMediaTagsError::MediaNotFound)));
    }

    #[tokio::test]
    async fn test_maps_tag_resolution_failure() {
        let mut tag_repo = MockTagRepo::new();
        tag_repo
            .expect_fetch_and_create_tags()
            .returning(|_| Err(TagRepositoryError::DatabaseError("db down".to_string())));

        let service = SetMediaTagsService::new(existing_media(), tag_repo, MockMediaTagRepo::new());
        let res = service.execute(5, "foo".into()).await;

        assert!(matches!(res, Err(SetMediaTagsError::RepositoryError(_))));
    }

    #[tokio::test]
    async fn test_missing_media_creates_no_tags() {
        let mut media_repo = MockMediaRepo::new();
        media_repo
            .expect_find_by_id()
            .with(eq(404))
            .times(1)
            .returning(|_| Err(MediaRepositoryError::NotFound));

        let mut tag_repo = MockTagRepo::new();
        tag_repo.expect_fetch_and_create_tags().never();

        let mut link_repo = MockMediaTagRepo::new();
        link_repo.expect_set_media_tags().never();

        let service = SetMediaTagsService::new(media_repo, tag_repo, link_repo);
        let res = service.execute(404, "foo, bar".into()).await;

        assert!(matches!(res, Err(SetMediaTagsError::MediaNotFound)));
    }
}
