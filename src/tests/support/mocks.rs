use async_trait::async_trait;
use mockall::mock;

use crate::modules::comment::application::domain::entities::Comment;
use crate::modules::media::application::domain::entities::{MediaKind, MediaRecord};
use crate::modules::media::application::ports::outgoing::{
    CreateMediaData, MediaCommentRepository, MediaCommentRepositoryError, MediaRepository,
    MediaRepositoryError, MediaTagRepository, MediaTagRepositoryError,
};
use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::{TagRepository, TagRepositoryError};

mock! {
    pub MediaRepo {}
    #[async_trait]
    impl MediaRepository for MediaRepo {
        async fn create_media(&self, data: CreateMediaData) -> Result<MediaRecord, MediaRepositoryError>;
        async fn find_by_id(&self, media_id: i32) -> Result<MediaRecord, MediaRepositoryError>;
        async fn find_by_slug(&self, slug: &str) -> Result<MediaRecord, MediaRepositoryError>;
        async fn list_media(&self, kind: Option<MediaKind>) -> Result<Vec<MediaRecord>, MediaRepositoryError>;
        async fn save_media(&self, record: &MediaRecord) -> Result<MediaRecord, MediaRepositoryError>;
        async fn delete_media(&self, media_id: i32) -> Result<(), MediaRepositoryError>;
    }
}

mock! {
    pub MediaTagRepo {}
    #[async_trait]
    impl MediaTagRepository for MediaTagRepo {
        async fn get_media_tags(&self, media_id: i32) -> Result<Vec<Tag>, MediaTagRepositoryError>;
        async fn set_media_tags(&self, media_id: i32, tag_ids: Vec<i32>) -> Result<(), MediaTagRepositoryError>;
    }
}

mock! {
    pub MediaCommentRepo {}
    #[async_trait]
    impl MediaCommentRepository for MediaCommentRepo {
        async fn get_media_comments(&self, media_id: i32) -> Result<Vec<Comment>, MediaCommentRepositoryError>;
        async fn attach_comment(&self, media_id: i32, comment_id: i32) -> Result<(), MediaCommentRepositoryError>;
        async fn detach_comment(&self, media_id: i32, comment_id: i32) -> Result<(), MediaCommentRepositoryError>;
    }
}

mock! {
    pub TagRepo {}
    #[async_trait]
    impl TagRepository for TagRepo {
        async fn fetch_and_create_tags(&self, names: Vec<String>) -> Result<Vec<Tag>, TagRepositoryError>;
    }
}
